use crate::error::Result;
use crate::geometry::Curve;
use crate::store::{CurveId, CurveStore};

/// Orders a sequence of curves by ascending primary radius.
#[derive(Default)]
pub struct SortByPrimaryRadius;

impl SortByPrimaryRadius {
    /// Creates a new `SortByPrimaryRadius` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the sort, returning a new sequence.
    ///
    /// The sort is stable: curves with equal radii keep their relative
    /// order. A NaN radius sorts after every number.
    ///
    /// # Errors
    ///
    /// Returns an error if any curve is not found.
    pub fn execute(&self, store: &CurveStore, ids: &[CurveId]) -> Result<Vec<CurveId>> {
        let mut keyed = ids
            .iter()
            .map(|&id| -> Result<(f64, CurveId)> { Ok((store.curve(id)?.primary_radius(), id)) })
            .collect::<Result<Vec<_>>>()?;

        keyed.sort_by(|(a, _), (b, _)| a.total_cmp(b));
        Ok(keyed.into_iter().map(|(_, id)| id).collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Circle, Ellipse, Helix};

    #[test]
    fn sorts_ascending() {
        let mut store = CurveStore::new();
        let a = store.add(Circle::new(3.0));
        let b = store.add(Ellipse::new(2.0, 9.0));
        let c = store.add(Helix::new(-1.0, 4.0));

        let sorted = SortByPrimaryRadius::new().execute(&store, store.ids()).unwrap();
        assert_eq!(sorted, vec![c, b, a]);
    }

    #[test]
    fn stable_under_equal_keys() {
        let mut store = CurveStore::new();
        let a = store.add(Circle::new(2.0));
        let b = store.add(Circle::new(1.0));
        let c = store.add(Circle::new(2.0));
        let d = store.add(Circle::new(-1.0));

        let sorted = SortByPrimaryRadius::new().execute(&store, store.ids()).unwrap();
        assert_eq!(sorted, vec![b, d, a, c]);
    }

    #[test]
    fn idempotent() {
        let mut store = CurveStore::new();
        for r in [5.0, 1.0, 4.0, 1.0, 3.0] {
            store.add(Circle::new(r));
        }
        let op = SortByPrimaryRadius::new();
        let once = op.execute(&store, store.ids()).unwrap();
        let twice = op.execute(&store, &once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn nan_sorts_last() {
        let mut store = CurveStore::new();
        let a = store.add(Circle::new(f64::NAN));
        let b = store.add(Circle::new(2.0));

        let sorted = SortByPrimaryRadius::new().execute(&store, store.ids()).unwrap();
        assert_eq!(sorted, vec![b, a]);
    }

    #[test]
    fn empty_input() {
        let store = CurveStore::new();
        let sorted = SortByPrimaryRadius::new().execute(&store, &[]).unwrap();
        assert!(sorted.is_empty());
    }
}
