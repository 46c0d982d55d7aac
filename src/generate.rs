//! Curve specification sources.
//!
//! A source produces the ordered list of [`CurveSpec`]s a [`CurveStore`]
//! is filled from. Random generation is always explicitly seeded.
//!
//! [`CurveStore`]: crate::store::CurveStore

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{GeneratorError, Result};
use crate::geometry::{CurveKind, CurveSpec};

/// Something that yields an ordered list of curve specifications.
pub trait SpecSource {
    /// Produces the specifications.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is misconfigured or malformed.
    fn specs(&mut self) -> Result<Vec<CurveSpec>>;
}

/// Parameter ranges for [`RandomSpecs`].
///
/// All parameters are drawn as integers from inclusive ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of curves to generate.
    pub count: usize,
    /// Circle radius range.
    pub circle_radius: RangeInclusive<i32>,
    /// Ellipse x radius range.
    pub ellipse_x_radius: RangeInclusive<i32>,
    /// Ellipse y radius range.
    pub ellipse_y_radius: RangeInclusive<i32>,
    /// Helix radius range.
    pub helix_radius: RangeInclusive<i32>,
    /// Helix step range.
    pub helix_step: RangeInclusive<i32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 10,
            circle_radius: 1..=5,
            ellipse_x_radius: 1..=6,
            ellipse_y_radius: 1..=7,
            helix_radius: 1..=9,
            helix_step: 1..=10,
        }
    }
}

impl GeneratorConfig {
    fn validate(&self) -> std::result::Result<(), GeneratorError> {
        let ranges = [
            ("circle_radius", &self.circle_radius),
            ("ellipse_x_radius", &self.ellipse_x_radius),
            ("ellipse_y_radius", &self.ellipse_y_radius),
            ("helix_radius", &self.helix_radius),
            ("helix_step", &self.helix_step),
        ];
        for (parameter, range) in ranges {
            if range.is_empty() {
                return Err(GeneratorError::InvalidRange {
                    parameter,
                    min: *range.start(),
                    max: *range.end(),
                });
            }
        }
        Ok(())
    }
}

/// Random curve specifications from a seeded generator.
///
/// Each curve's kind is picked uniformly among circle, ellipse and helix.
pub struct RandomSpecs {
    config: GeneratorConfig,
    rng: StdRng,
}

impl RandomSpecs {
    /// Creates a new random source.
    #[must_use]
    pub fn new(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn next_spec(&mut self) -> CurveSpec {
        let Self { config, rng } = self;
        let kind = CurveKind::ALL[rng.random_range(0..CurveKind::ALL.len())];
        let mut draw = |range: &RangeInclusive<i32>| f64::from(rng.random_range(range.clone()));

        match kind {
            CurveKind::Circle => CurveSpec::Circle {
                radius: draw(&config.circle_radius),
            },
            CurveKind::Ellipse => CurveSpec::Ellipse {
                x_radius: draw(&config.ellipse_x_radius),
                y_radius: draw(&config.ellipse_y_radius),
            },
            CurveKind::Helix => CurveSpec::Helix {
                radius: draw(&config.helix_radius),
                step: draw(&config.helix_step),
            },
        }
    }
}

impl SpecSource for RandomSpecs {
    fn specs(&mut self) -> Result<Vec<CurveSpec>> {
        self.config.validate()?;
        let specs: Vec<_> = (0..self.config.count).map(|_| self.next_spec()).collect();
        tracing::debug!(count = specs.len(), "generated random curve specs");
        Ok(specs)
    }
}

/// Curve specifications read from text, one per line.
///
/// Blank lines and lines starting with `#` are skipped. See
/// [`CurveSpec`]'s `FromStr` impl for the line format.
pub struct TextSpecs<'a> {
    text: &'a str,
}

impl<'a> TextSpecs<'a> {
    /// Creates a new text source.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl SpecSource for TextSpecs<'_> {
    fn specs(&mut self) -> Result<Vec<CurveSpec>> {
        let mut specs = Vec::new();
        for (index, line) in self.text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let spec = trimmed.parse::<CurveSpec>().map_err(|source| GeneratorError::Spec {
                line: index + 1,
                source,
            })?;
            specs.push(spec);
        }
        tracing::debug!(count = specs.len(), "parsed curve specs");
        Ok(specs)
    }
}
