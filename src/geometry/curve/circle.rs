use crate::math::{Point3, Vector3};

use super::{Curve, CurveKind};

/// A circle centered at the origin in the XY plane.
///
/// `P(t) = (radius * cos(t), radius * sin(t), 0)`
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// A negative `radius` is replaced by its absolute value.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self {
            radius: radius.abs(),
        }
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Curve for Circle {
    fn kind(&self) -> CurveKind {
        CurveKind::Circle
    }

    fn position(&self, t: f64) -> Point3 {
        Point3::new(self.radius * t.cos(), self.radius * t.sin(), 0.0)
    }

    fn derivative(&self, t: f64) -> Vector3 {
        Vector3::new(-self.radius * t.sin(), self.radius * t.cos(), 0.0)
    }

    fn primary_radius(&self) -> f64 {
        self.radius
    }

    fn secondary_radius(&self) -> f64 {
        self.radius
    }
}
