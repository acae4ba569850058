//! Parse errors for seed-level types.

use thiserror::Error;

/// Returned when a string does not name an intensity level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown intensity '{0}' (expected subtle, medium, or bold)")]
pub struct ParseIntensityError(pub String);
