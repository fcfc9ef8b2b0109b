use std::ops::Mul;

use derive_more::{Add, Constructor, From, Sub};

use super::Point;

/// The extent of a rectangle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Add, Sub, From, Constructor)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    /// Reinterprets the size as the point at the far corner of a rectangle anchored at the origin.
    pub fn to_point(self) -> Point<T> {
        Point {
            x: self.width,
            y: self.height,
        }
    }

    pub fn area(self) -> T
    where
        T: Mul<Output = T>,
    {
        self.width * self.height
    }

    /// Returns true if either dimension is zero or negative.
    pub fn is_empty(&self) -> bool
    where
        T: PartialOrd + Default,
    {
        let zero = T::default();
        self.width <= zero || self.height <= zero
    }
}

impl<T> From<Size<T>> for (T, T) {
    fn from(value: Size<T>) -> Self {
        (value.width, value.height)
    }
}
