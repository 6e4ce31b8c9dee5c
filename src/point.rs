use core::ops::{Add, Mul, Sub};

use num_traits::Float;

use crate::NativeFloat;

/// An immutable 2D point (or vector) value type.
///
/// Points are copied into segments at construction, so later edits to a
/// point a caller kept around can never silently invalidate a segment's
/// cached length or arc-length table.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point2 {
    pub x: NativeFloat,
    pub y: NativeFloat,
}

impl Point2 {
    pub fn new(x: NativeFloat, y: NativeFloat) -> Self {
        Point2 { x, y }
    }

    /// Returns the Euclidean distance between self and other.
    pub fn distance(&self, other: Self) -> NativeFloat {
        ((self.x - other.x) * (self.x - other.x) + (self.y - other.y) * (self.y - other.y)).sqrt()
    }

    /// Interprets the point as a vector and returns its L2 norm.
    pub fn norm(&self) -> NativeFloat {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Interprets the point as a direction vector and returns its angle
    /// in radians, measured from the positive x axis.
    pub fn angle(&self) -> NativeFloat {
        Float::atan2(self.y, self.x)
    }
}

impl Add for Point2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<NativeFloat> for Point2 {
    type Output = Self;

    fn mul(self, rhs: NativeFloat) -> Self {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    #[test]
    fn arithmetic() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(-0.5, 4.0);
        assert_eq!(a + b, Point2::new(0.5, 6.0));
        assert_eq!(a - b, Point2::new(1.5, -2.0));
        assert_eq!(a * 2.0, Point2::new(2.0, 4.0));
    }

    #[test]
    fn distance_and_norm() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < EPSILON);
        assert!((b.norm() - 5.0).abs() < EPSILON);
    }

    #[test]
    fn vector_angle() {
        let up = Point2::new(0.0, 1.0);
        assert!((up.angle() - core::f64::consts::FRAC_PI_2).abs() < EPSILON);
        let left = Point2::new(-1.0, 0.0);
        assert!((left.angle() - core::f64::consts::PI).abs() < EPSILON);
    }
}
