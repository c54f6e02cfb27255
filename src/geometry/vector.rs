use std::fmt;
use std::ops::{Add, Mul, Sub};

use nalgebra::Vector2;

/// A displacement in a 2D cartesian coordinate system. Kept apart from
/// `Point` so positions and differences can't be mixed up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector {
    components: Vector2<f64>
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Vector {
        Vector { components: Vector2::new(x, y) }
    }

    pub fn x(&self) -> f64 {
        self.components.x
    }

    pub fn y(&self) -> f64 {
        self.components.y
    }

    pub fn len(&self) -> f64 {
        self.components.norm()
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::from(self.components + rhs.components)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::from(self.components - rhs.components)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, factor: f64) -> Vector {
        Vector::from(self.components * factor)
    }
}

impl From<Vector2<f64>> for Vector {
    fn from(components: Vector2<f64>) -> Self {
        Vector { components }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:.6}, {:.6}>", self.x(), self.y())
    }
}

pub fn add_vectors(a: &Vector, b: &Vector) -> Vector {
    *a + *b
}

pub fn sub_vectors(a: &Vector, b: &Vector) -> Vector {
    *a - *b
}

pub fn scale_vector(v: &Vector, factor: f64) -> Vector {
    *v * factor
}
