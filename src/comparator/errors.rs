// ============================================================================
// Comparator Errors
// ============================================================================

use crate::numeric::ParseError;
use crate::wire::DecodeError;
use thiserror::Error;

/// Failures while rebuilding a comparator from its wire form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComparatorError {
    /// Embedded value is not a decimal number
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Wire bytes are not a comparator envelope
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Result type alias for comparator decoding
pub type ComparatorResult<T> = Result<T, ComparatorError>;
