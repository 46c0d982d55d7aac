use crate::error::Result;
use crate::geometry::Curve;
use crate::math::{Point3, Vector3};
use crate::store::{CurveId, CurveStore};

/// Position and first derivative of one curve at a fixed parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    /// The sampled curve.
    pub id: CurveId,
    /// Point on the curve.
    pub position: Point3,
    /// First derivative at that point.
    pub derivative: Vector3,
}

/// Samples every curve of a sequence at the same parameter.
pub struct SampleCurves {
    t: f64,
}

impl SampleCurves {
    /// Creates a new `SampleCurves` operation at parameter `t`.
    #[must_use]
    pub fn new(t: f64) -> Self {
        Self { t }
    }

    /// Lazily samples `ids` in order.
    ///
    /// Each item fails independently if its curve is missing from the store.
    pub fn iter<'a>(
        &self,
        store: &'a CurveStore,
        ids: &'a [CurveId],
    ) -> impl Iterator<Item = Result<CurveSample>> + 'a {
        let t = self.t;
        ids.iter().map(move |&id| -> Result<CurveSample> {
            let curve = store.curve(id)?;
            let sample = CurveSample {
                id,
                position: curve.position(t),
                derivative: curve.derivative(t),
            };
            tracing::trace!(?id, t, position = ?sample.position, "sampled curve");
            Ok(sample)
        })
    }

    /// Executes the operation, returning one sample per id in input order.
    ///
    /// # Errors
    ///
    /// Returns an error if any curve is not found.
    pub fn execute(&self, store: &CurveStore, ids: &[CurveId]) -> Result<Vec<CurveSample>> {
        self.iter(store, ids).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{CurvesError, StoreError};
    use crate::geometry::{Circle, Ellipse, Helix};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};

    #[test]
    fn samples_follow_input_order() {
        let mut store = CurveStore::new();
        let a = store.add(Helix::new(2.0, 3.0));
        let b = store.add(Circle::new(1.0));
        let c = store.add(Ellipse::new(2.0, 4.0));

        let samples = SampleCurves::new(FRAC_PI_4).execute(&store, store.ids()).unwrap();
        let ids: Vec<_> = samples.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![a, b, c]);

        let h = &samples[0];
        assert_abs_diff_eq!(
            h.position,
            Point3::new(2.0 * FRAC_1_SQRT_2, 2.0 * FRAC_1_SQRT_2, 3.0),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            h.derivative,
            Vector3::new(-2.0 * FRAC_1_SQRT_2, 2.0 * FRAC_1_SQRT_2, 0.0),
            epsilon = 1e-12
        );

        let e = &samples[2];
        assert_abs_diff_eq!(e.position.y, 4.0 * FRAC_1_SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn empty_sequence_gives_no_samples() {
        let store = CurveStore::new();
        let samples = SampleCurves::new(0.0).execute(&store, &[]).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn lazy_iter_is_restartable() {
        let mut store = CurveStore::new();
        store.add(Circle::new(1.0));
        store.add(Circle::new(2.0));

        let op = SampleCurves::new(1.0);
        let first: Vec<_> = op.iter(&store, store.ids()).map(Result::unwrap).collect();
        let second: Vec<_> = op.iter(&store, store.ids()).map(Result::unwrap).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn missing_curve_is_an_error() {
        let mut store = CurveStore::new();
        let a = store.add(Circle::new(1.0));
        let ids = vec![a];
        store.remove(a).unwrap();

        let err = SampleCurves::new(0.0).execute(&store, &ids).unwrap_err();
        assert!(matches!(
            err,
            CurvesError::Store(StoreError::CurveNotFound(id)) if id == a
        ));
    }
}
