use crate::error::Result;
use crate::geometry::{Curve, CurveKind};
use crate::store::{CurveId, CurveStore};

use super::{FilterByKind, SortByPrimaryRadius, SumPrimaryRadius};

/// Result of a [`RadiusReport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusSummary {
    /// Curves of the requested kind, by ascending primary radius.
    pub sorted: Vec<CurveId>,
    /// Primary radius of each entry of `sorted`.
    pub radii: Vec<f64>,
    /// Sum of `radii`, added left to right.
    pub total: f64,
}

/// Filters a sequence to one kind, sorts it by primary radius and sums the
/// radii.
pub struct RadiusReport {
    kind: CurveKind,
}

impl RadiusReport {
    /// Creates a new `RadiusReport` for curves of `kind`.
    #[must_use]
    pub fn new(kind: CurveKind) -> Self {
        Self { kind }
    }

    /// Executes the report.
    ///
    /// # Errors
    ///
    /// Returns an error if any curve is not found.
    pub fn execute(&self, store: &CurveStore, ids: &[CurveId]) -> Result<RadiusSummary> {
        let filtered = FilterByKind::new(self.kind).execute(store, ids)?;
        let sorted = SortByPrimaryRadius::new().execute(store, &filtered)?;
        let total = SumPrimaryRadius::new().execute(store, &sorted)?;
        let radii = sorted
            .iter()
            .map(|&id| -> Result<f64> { Ok(store.curve(id)?.primary_radius()) })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(kind = %self.kind, count = sorted.len(), total, "radius report");
        Ok(RadiusSummary {
            sorted,
            radii,
            total,
        })
    }
}
