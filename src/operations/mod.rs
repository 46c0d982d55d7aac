mod filter;
mod report;
mod sample;
mod sort;
mod sum;

pub use filter::FilterByKind;
pub use report::{RadiusReport, RadiusSummary};
pub use sample::{CurveSample, SampleCurves};
pub use sort::SortByPrimaryRadius;
pub use sum::SumPrimaryRadius;
