// ============================================================================
// Numeric Errors
// Error types for locale-aware decimal parsing
// ============================================================================

use thiserror::Error;

/// Errors that can occur while reading decimal text under a [`Locale`].
///
/// Positions are character offsets into the decoded text, not byte offsets.
///
/// [`Locale`]: super::Locale
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    /// Input was empty
    #[error("invalid decimal: input is empty")]
    Empty,
    /// Input bytes are not UTF-8 text
    #[error("invalid decimal: input is not valid UTF-8")]
    InvalidUtf8,
    /// A character that has no meaning in a number under the active locale
    #[error("invalid decimal: unexpected character {ch:?} at position {position}")]
    UnexpectedChar { ch: char, position: usize },
    /// Grouping separator leads, trails or repeats
    #[error("invalid decimal: misplaced grouping separator at position {position}")]
    MisplacedGrouping { position: usize },
    /// Sign and separators only
    #[error("invalid decimal: no digits")]
    NoDigits,
}

/// Result type alias for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors raised when building a custom [`Locale`](super::Locale).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum LocaleError {
    #[error("decimal and grouping separators must differ (both {0:?})")]
    SeparatorClash(char),
    #[error("symbol {0:?} cannot be an ASCII digit")]
    DigitSymbol(char),
    #[error("separator {0:?} collides with a sign character")]
    SignClash(char),
}
