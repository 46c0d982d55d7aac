pub mod curve;
pub mod spec;

pub use curve::{AnyCurve, Circle, Curve, CurveKind, Ellipse, Helix};
pub use spec::CurveSpec;
