use crate::error::Result;
use crate::geometry::{Curve, CurveKind};
use crate::store::{CurveId, CurveStore};

/// Selects the curves of one variant from a sequence.
pub struct FilterByKind {
    kind: CurveKind,
}

impl FilterByKind {
    /// Creates a new `FilterByKind` operation keeping curves of `kind`.
    #[must_use]
    pub fn new(kind: CurveKind) -> Self {
        Self { kind }
    }

    /// Executes the filter.
    ///
    /// Returns the matching ids in their original relative order. Curves of
    /// other kinds are skipped; no match yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns an error if any curve is not found.
    pub fn execute(&self, store: &CurveStore, ids: &[CurveId]) -> Result<Vec<CurveId>> {
        let mut kept = Vec::new();
        for &id in ids {
            if store.curve(id)?.kind() == self.kind {
                kept.push(id);
            }
        }
        tracing::debug!(kind = %self.kind, total = ids.len(), kept = kept.len(), "filtered curves");
        Ok(kept)
    }
}
