//! Parse errors for typed variant lookup.
//!
//! Untyped dispatch never errors (see [`crate::registry::dispatch`]); this
//! type only exists for callers that parse a variant id with `FromStr`.

use thiserror::Error;

/// Returned when a string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown variant '{0}'")]
pub struct UnknownVariant(pub String);
