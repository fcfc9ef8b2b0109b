#![cfg(test)]

use super::*;

#[test]
fn test_conversions() {
    let point = Point::new(3, 4);
    assert_eq!(point.to_size(), Size::new(3, 4));
    assert_eq!(point.to_size().to_point(), point, "Converting back should be lossless.");

    assert_eq!(Point::from((1, 2)), Point { x: 1, y: 2 });
    assert_eq!(<(i32, i32)>::from(Size::new(5, 6)), (5, 6));
}

#[test]
fn test_arithmetic() {
    let a = Point::new(1, 1);
    let b = Point::new(4, 5);
    assert_eq!(b - a, Point::new(3, 4));
    assert_eq!(a + b, Point::new(5, 6));
    assert_eq!(a.offset(Size::new(2, -1)), Point::new(3, 0));
    assert_eq!(Size::new(2, 3) + Size::new(1, 1), Size::new(3, 4));
}

#[test]
fn test_size_queries() {
    assert_eq!(Size::new(3_u32, 7).area(), 21);
    assert!(!Size::new(1, 1).is_empty());
    assert!(Size::new(0, 10).is_empty(), "A zero width should make the size empty.");
    assert!(Size::new(4.0, -1.0).is_empty(), "A negative height should make the size empty.");
    assert!(Size::<i32>::default().is_empty());
}

#[test]
fn test_distance() {
    let origin = Point::new(0.0, 0.0);
    assert_eq!(origin.distance_to(Point::new(3.0, 4.0)), 5.0);
    assert_eq!(Point::new(-1.0, 2.0).distance_to(Point::new(-1.0, 2.0)), 0.0);
}
