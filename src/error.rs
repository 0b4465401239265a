//! Error types for the rule30rng library.

use thiserror::Error;

/// Errors produced by the rule30rng library.
///
/// Evolution, byte extraction and every draw other than
/// [`intn`](crate::Rule30Rng::intn) are total, so this enum is small.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rule30Error {
    /// A bounded draw was requested with a bound that is zero or negative.
    #[error("bound must be positive, got {0}")]
    InvalidArgument(i64),
    /// The neighborhood radius is not one of the supported rules (1 or 2).
    #[error("unsupported neighborhood radius {0}, expected 1 or 2")]
    UnsupportedRadius(u8),
}
