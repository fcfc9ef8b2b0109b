use derive_more::{Add, Constructor, From, Sub};

use super::Size;

/// A location on a 2D plane.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Add, Sub, From, Constructor)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    /// Reinterprets the point as the size of the rectangle spanning from the origin to it.
    pub fn to_size(self) -> Size<T> {
        Size {
            width: self.x,
            height: self.y,
        }
    }

    /// Moves the point by `size` along both axes.
    ///
    /// # Examples
    /// ```
    /// # use standard_ext::geometry::{Point, Size};
    /// assert_eq!(Point::new(1, 2).offset(Size::new(10, 20)), Point::new(11, 22));
    /// ```
    pub fn offset(self, size: Size<T>) -> Point<T>
    where
        T: std::ops::Add<Output = T>,
    {
        Point {
            x: self.x + size.width,
            y: self.y + size.height,
        }
    }
}

impl Point<f64> {
    /// Returns the straight line distance between two points.
    pub fn distance_to(self, other: Point<f64>) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl<T> From<Point<T>> for (T, T) {
    fn from(value: Point<T>) -> Self {
        (value.x, value.y)
    }
}
