// ============================================================================
// Wire Errors
// Failures while decoding comparator envelopes
// ============================================================================

use thiserror::Error;

/// Errors raised when wire bytes do not match the expected envelope shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// Bytes are not a valid protobuf message
    #[error("malformed comparator envelope: {0}")]
    Malformed(#[from] prost::DecodeError),
    /// A required nested message is absent
    #[error("malformed comparator envelope: missing required field `{0}`")]
    MissingField(&'static str),
    /// Named envelope carries a different comparator
    #[error("unknown comparator `{0}`")]
    UnknownComparator(String),
}

/// Result type alias for decoding operations
pub type DecodeResult<T> = Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DecodeError::MissingField("comparable").to_string(),
            "malformed comparator envelope: missing required field `comparable`"
        );
        assert_eq!(
            DecodeError::UnknownComparator("BinaryComparator".to_string()).to_string(),
            "unknown comparator `BinaryComparator`"
        );
    }
}
