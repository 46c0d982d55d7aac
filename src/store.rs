use slotmap::SlotMap;

use crate::error::StoreError;
use crate::geometry::{AnyCurve, Curve, CurveSpec};

slotmap::new_key_type! {
    /// Unique identifier for a curve in the curve store.
    pub struct CurveId;
}

/// Central arena that owns all curves.
///
/// Every curve is stored once. Filtered or sorted collections are plain
/// sequences of [`CurveId`]s into the store, so several views can refer to
/// the same curve without copying it. Iteration follows insertion order.
#[derive(Debug, Default)]
pub struct CurveStore {
    curves: SlotMap<CurveId, AnyCurve>,
    order: Vec<CurveId>,
}

impl CurveStore {
    /// Creates a new, empty curve store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the curves built from `specs`, in order.
    #[must_use]
    pub fn from_specs<'a>(specs: impl IntoIterator<Item = &'a CurveSpec>) -> Self {
        let mut store = Self::new();
        for spec in specs {
            store.add_spec(spec);
        }
        store
    }

    /// Inserts a curve and returns its ID.
    pub fn add(&mut self, curve: impl Into<AnyCurve>) -> CurveId {
        let curve = curve.into();
        let kind = curve.kind();
        let id = self.curves.insert(curve);
        self.order.push(id);
        tracing::debug!(?id, %kind, "added curve");
        id
    }

    /// Builds the curve described by `spec` and inserts it.
    pub fn add_spec(&mut self, spec: &CurveSpec) -> CurveId {
        self.add(spec.build())
    }

    /// Returns a reference to the curve, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is not in the store.
    pub fn curve(&self, id: CurveId) -> Result<&AnyCurve, StoreError> {
        self.curves.get(id).ok_or(StoreError::CurveNotFound(id))
    }

    /// Removes a curve from the store and returns it.
    ///
    /// Views still holding `id` will fail to resolve it afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is not in the store.
    pub fn remove(&mut self, id: CurveId) -> Result<AnyCurve, StoreError> {
        let curve = self
            .curves
            .remove(id)
            .ok_or(StoreError::CurveNotFound(id))?;
        self.order.retain(|&other| other != id);
        tracing::debug!(?id, "removed curve");
        Ok(curve)
    }

    /// Returns whether `id` refers to a curve in the store.
    #[must_use]
    pub fn contains(&self, id: CurveId) -> bool {
        self.curves.contains_key(id)
    }

    /// Returns all curve IDs in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[CurveId] {
        &self.order
    }

    /// Iterates over all curves in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (CurveId, &AnyCurve)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.curves.get(id).map(|curve| (id, curve)))
    }

    /// Returns the number of curves in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Returns whether the store holds no curves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}
