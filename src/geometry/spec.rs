use std::str::FromStr;

use crate::error::SpecError;

use super::curve::{AnyCurve, Circle, CurveKind, Ellipse, Helix};

/// Construction parameters for one curve.
///
/// A spec is what a curve source hands to the store; building it applies
/// the constructor normalization of the target variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveSpec {
    /// Parameters of a [`Circle`].
    Circle { radius: f64 },
    /// Parameters of an [`Ellipse`].
    Ellipse { x_radius: f64, y_radius: f64 },
    /// Parameters of a [`Helix`].
    Helix { radius: f64, step: f64 },
}

impl CurveSpec {
    /// Returns the kind of curve this spec builds.
    #[must_use]
    pub fn kind(&self) -> CurveKind {
        match self {
            CurveSpec::Circle { .. } => CurveKind::Circle,
            CurveSpec::Ellipse { .. } => CurveKind::Ellipse,
            CurveSpec::Helix { .. } => CurveKind::Helix,
        }
    }

    /// Builds the curve described by this spec.
    #[must_use]
    pub fn build(&self) -> AnyCurve {
        match *self {
            CurveSpec::Circle { radius } => Circle::new(radius).into(),
            CurveSpec::Ellipse { x_radius, y_radius } => Ellipse::new(x_radius, y_radius).into(),
            CurveSpec::Helix { radius, step } => Helix::new(radius, step).into(),
        }
    }
}

/// Parses `"<kind> [p1] [p2]"`, e.g. `"ellipse 2 5"`.
///
/// The kind is case-insensitive. Missing parameters take the constructor
/// defaults (1 for every radius and for the helix step). Anything after a
/// `#` is ignored.
impl FromStr for CurveSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let content = s.split('#').next().unwrap_or_default();
        let mut tokens = content.split_whitespace();
        let kind = tokens.next().ok_or(SpecError::Empty)?;

        let params = tokens
            .map(|tok| {
                tok.parse::<f64>()
                    .map_err(|_| SpecError::InvalidNumber(tok.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let param = |i: usize| params.get(i).copied().unwrap_or(1.0);

        let (spec, max) = match kind.to_ascii_lowercase().as_str() {
            "circle" => (CurveSpec::Circle { radius: param(0) }, 1),
            "ellipse" => (
                CurveSpec::Ellipse {
                    x_radius: param(0),
                    y_radius: param(1),
                },
                2,
            ),
            "helix" => (
                CurveSpec::Helix {
                    radius: param(0),
                    step: param(1),
                },
                2,
            ),
            _ => return Err(SpecError::UnknownKind(kind.to_string())),
        };

        if params.len() > max {
            return Err(SpecError::TooManyParameters {
                kind: spec.kind().name(),
                max,
                got: params.len(),
            });
        }
        Ok(spec)
    }
}
