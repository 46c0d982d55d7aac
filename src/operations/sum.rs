use crate::error::Result;
use crate::geometry::Curve;
use crate::store::{CurveId, CurveStore};

/// Sums the primary radius over a sequence of curves.
#[derive(Default)]
pub struct SumPrimaryRadius;

impl SumPrimaryRadius {
    /// Creates a new `SumPrimaryRadius` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the sum, adding radii left to right.
    ///
    /// An empty sequence sums to `0.0`.
    ///
    /// # Errors
    ///
    /// Returns an error if any curve is not found.
    pub fn execute(&self, store: &CurveStore, ids: &[CurveId]) -> Result<f64> {
        let mut total = 0.0;
        for &id in ids {
            total += store.curve(id)?.primary_radius();
        }
        Ok(total)
    }
}
