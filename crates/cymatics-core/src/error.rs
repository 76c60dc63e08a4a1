use thiserror::Error;

/// Geometry name not recognised when parsing a [`crate::GeometryMode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown geometry `{0}` (expected `square` or `circular`)")]
pub struct ParseGeometryError(pub String);

/// Frequency text that cannot drive the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseFrequencyError {
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("frequency must be finite and positive, got {0}")]
    OutOfDomain(f64),
}
