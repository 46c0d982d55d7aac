use crate::math::{Point3, Vector3};

use super::{Curve, CurveKind};

/// A helix around the z axis.
///
/// `P(t) = (radius * cos(t), radius * sin(t), step)`
///
/// The height is the constant `step`, not `step * t`, so the derivative has
/// no z component. Callers relying on a rising helix must scale `z`
/// themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct Helix {
    radius: f64,
    step: f64,
}

impl Helix {
    /// Creates a new helix.
    ///
    /// A negative `radius` is replaced by its absolute value. `step` is kept
    /// as given and may be zero or negative.
    #[must_use]
    pub fn new(radius: f64, step: f64) -> Self {
        Self {
            radius: radius.abs(),
            step,
        }
    }

    /// Returns the radius of the helix.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the step (z offset) of the helix.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Default for Helix {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl Curve for Helix {
    fn kind(&self) -> CurveKind {
        CurveKind::Helix
    }

    fn position(&self, t: f64) -> Point3 {
        Point3::new(self.radius * t.cos(), self.radius * t.sin(), self.step)
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
