use thiserror::Error;

use crate::store::CurveId;

/// Top-level error type for the geocurves crate.
#[derive(Debug, Error)]
pub enum CurvesError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

/// Errors related to the curve store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("curve not found: {0:?}")]
    CurveNotFound(CurveId),
}

/// Errors raised while parsing a curve specification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("empty curve specification")]
    Empty,

    #[error("unknown curve kind: {0}")]
    UnknownKind(String),

    #[error("{kind} takes at most {max} parameters, got {got}")]
    TooManyParameters {
        kind: &'static str,
        max: usize,
        got: usize,
    },

    #[error("invalid number: {0}")]
    InvalidNumber(String),
}

/// Errors raised by curve specification sources.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("invalid range for {parameter}: [{min}, {max}]")]
    InvalidRange {
        parameter: &'static str,
        min: i32,
        max: i32,
    },

    #[error("line {line}: {source}")]
    Spec {
        line: usize,
        #[source]
        source: SpecError,
    },
}

/// Convenience type alias for results using [`CurvesError`].
pub type Result<T> = std::result::Result<T, CurvesError>;
