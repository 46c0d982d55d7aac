mod circle;
mod ellipse;
mod helix;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use helix::Helix;

use std::fmt;

use crate::math::{Point3, Vector3};

/// Discriminant naming the concrete variant behind a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    /// A [`Circle`].
    Circle,
    /// An [`Ellipse`].
    Ellipse,
    /// A [`Helix`].
    Helix,
}

impl CurveKind {
    /// All kinds, in declaration order.
    pub const ALL: [CurveKind; 3] = [CurveKind::Circle, CurveKind::Ellipse, CurveKind::Helix];

    /// Lowercase name used in text specifications and log output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CurveKind::Circle => "circle",
            CurveKind::Ellipse => "ellipse",
            CurveKind::Helix => "helix",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for parametric curves in 3D space.
///
/// All methods are pure and total: any `t` is accepted, and non-finite
/// input propagates through the trigonometric evaluation.
pub trait Curve {
    /// Returns the concrete variant of this curve.
    fn kind(&self) -> CurveKind;

    /// Evaluates the curve at parameter `t` (radians).
    fn position(&self, t: f64) -> Point3;

    /// Computes the first derivative at parameter `t`.
    ///
    /// Not normalized.
    fn derivative(&self, t: f64) -> Vector3;

    /// Variant-specific size used as the sort and aggregation key.
    fn primary_radius(&self) -> f64;

    /// Second size parameter; equal to [`Curve::primary_radius`] for
    /// circular variants.
    fn secondary_radius(&self) -> f64;
}

/// A curve of any supported variant.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyCurve {
    /// A circle.
    Circle(Circle),
    /// An ellipse.
    Ellipse(Ellipse),
    /// A helix.
    Helix(Helix),
}

impl AnyCurve {
    /// Returns the circle, if this curve is one.
    #[must_use]
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            AnyCurve::Circle(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the ellipse, if this curve is one.
    #[must_use]
    pub fn as_ellipse(&self) -> Option<&Ellipse> {
        match self {
            AnyCurve::Ellipse(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the helix, if this curve is one.
    #[must_use]
    pub fn as_helix(&self) -> Option<&Helix> {
        match self {
            AnyCurve::Helix(h) => Some(h),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn Curve {
        match self {
            AnyCurve::Circle(c) => c,
            AnyCurve::Ellipse(e) => e,
            AnyCurve::Helix(h) => h,
        }
    }
}

impl Curve for AnyCurve {
    fn kind(&self) -> CurveKind {
        self.inner().kind()
    }

    fn position(&self, t: f64) -> Point3 {
        self.inner().position(t)
    }

    fn derivative(&self, t: f64) -> Vector3 {
        self.inner().derivative(t)
    }

    fn primary_radius(&self) -> f64 {
        self.inner().primary_radius()
    }

    fn secondary_radius(&self) -> f64 {
        self.inner().secondary_radius()
    }
}

impl From<Circle> for AnyCurve {
    fn from(c: Circle) -> Self {
        AnyCurve::Circle(c)
    }
}

impl From<Ellipse> for AnyCurve {
    fn from(e: Ellipse) -> Self {
        AnyCurve::Ellipse(e)
    }
}

impl From<Helix> for AnyCurve {
    fn from(h: Helix) -> Self {
        AnyCurve::Helix(h)
    }
}
