use crate::math::{Point3, Vector3};

use super::{Curve, CurveKind};

/// An axis-aligned ellipse centered at the origin in the XY plane.
///
/// `P(t) = (x_radius * cos(t), y_radius * sin(t), 0)`
///
/// The x radius is the primary radius and the y radius the secondary one.
/// Neither has to be the larger of the two.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    x_radius: f64,
    y_radius: f64,
}

impl Ellipse {
    /// Creates a new ellipse.
    ///
    /// Each radius is independently replaced by its absolute value.
    #[must_use]
    pub fn new(x_radius: f64, y_radius: f64) -> Self {
        Self {
            x_radius: x_radius.abs(),
            y_radius: y_radius.abs(),
        }
    }

    /// Returns the radius along the x axis.
    #[must_use]
    pub fn x_radius(&self) -> f64 {
        self.x_radius
    }

    /// Returns the radius along the y axis.
    #[must_use]
    pub fn y_radius(&self) -> f64 {
        self.y_radius
    }
}

impl Default for Ellipse {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl Curve for Ellipse {
    fn kind(&self) -> CurveKind {
        CurveKind::Ellipse
    }

    fn position(&self, t: f64) -> Point3 {
        Point3::new(self.x_radius * t.cos(), self.y_radius * t.sin(), 0.0)
    }

    fn derivative(&self, t: f64) -> Vector3 {
        Vector3::new(-self.x_radius * t.sin(), self.y_radius * t.cos(), 0.0)
    }

    fn primary_radius(&self) -> f64 {
        self.x_radius
    }

    fn secondary_radius(&self) -> f64 {
        self.y_radius
    }
}
