//! Parametric 3D curves (circle, ellipse, helix) and a pipeline that
//! samples, filters, sorts and aggregates a heterogeneous collection of them.
//!
//! ```
//! use geocurves::geometry::{Circle, CurveKind, Ellipse, Helix};
//! use geocurves::operations::RadiusReport;
//! use geocurves::store::CurveStore;
//!
//! let mut store = CurveStore::new();
//! store.add(Circle::new(3.0));
//! store.add(Ellipse::new(2.0, 5.0));
//! store.add(Circle::new(1.0));
//! store.add(Helix::new(4.0, 2.0));
//!
//! let report = RadiusReport::new(CurveKind::Circle)
//!     .execute(&store, store.ids())?;
//! assert_eq!(report.radii, vec![1.0, 3.0]);
//! assert_eq!(report.total, 4.0);
//! # Ok::<(), geocurves::CurvesError>(())
//! ```

pub mod error;
pub mod generate;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod store;

pub use error::{CurvesError, Result};
