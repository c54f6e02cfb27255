use std::cmp::Ordering;
use std::fmt;

use nalgebra::Point2;

use crate::geometry::vector::Vector;

/// A position in a 2D cartesian coordinate system. Read-only once created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    coords: Point2<f64>
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { coords: Point2::new(x, y) }
    }

    pub fn x(&self) -> f64 {
        self.coords.x
    }

    pub fn y(&self) -> f64 {
        self.coords.y
    }

    pub fn is_infinite(&self) -> bool {
        self.coords.x.is_infinite() || self.coords.y.is_infinite()
    }

    pub fn is_nan(&self) -> bool {
        self.coords.x.is_nan() || self.coords.y.is_nan()
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        nalgebra::distance(&self.coords, &other.coords)
    }

    /// Displacement leading from this point to `other`.
    pub fn vector_to(&self, other: &Point) -> Vector {
        Vector::from(other.coords - self.coords)
    }
}

/// Points order by x first, then by y.
impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.x().partial_cmp(&other.x())? {
            Ordering::Equal => self.y().partial_cmp(&other.y()),
            ordering => Some(ordering)
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x(), self.y())
    }
}

pub fn middle_point(a: &Point, b: &Point) -> Point {
    Point { coords: nalgebra::center(&a.coords, &b.coords) }
}

pub fn point_vector(a: &Point, b: &Point) -> Vector {
    a.vector_to(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_and_vector() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        assert_eq!(a.distance_to(&b), 5.0);
        let v = a.vector_to(&b);
        assert_eq!((v.x(), v.y()), (3.0, 4.0));
        assert_eq!(point_vector(&b, &a).x(), -3.0);
    }

    #[test]
    fn middle() {
        let m = middle_point(&Point::new(-2.0, 0.0), &Point::new(2.0, 4.0));
        assert_eq!(m, Point::new(0.0, 2.0));
    }

    #[test]
    fn classification() {
        assert!(Point::new(f64::INFINITY, 0.0).is_infinite());
        assert!(Point::new(0.0, f64::NEG_INFINITY).is_infinite());
        assert!(Point::new(0.0, f64::NAN).is_nan());
        assert!(!Point::new(1.0, 2.0).is_nan());
    }

    #[test]
    fn ordering_is_x_then_y() {
        assert!(Point::new(0.0, 9.0) < Point::new(1.0, 0.0));
        assert!(Point::new(1.0, 0.0) < Point::new(1.0, 1.0));
        assert!(Point::new(1.0, f64::NAN).partial_cmp(&Point::new(1.0, 0.0)).is_none());
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "(1.500000, -2.000000)");
    }
}
