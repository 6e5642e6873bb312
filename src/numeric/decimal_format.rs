// ============================================================================
// Decimal Format
// Strict locale-aware parsing of decimal text into exact decimals
// ============================================================================

use super::errors::{ParseError, ParseResult};
use super::locale::Locale;
use bigdecimal::BigDecimal;
use std::str::FromStr;

impl Locale {
    /// Parse raw bytes as decimal text under this locale.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidUtf8`] for non-UTF-8 input, otherwise
    /// whatever [`Locale::parse_decimal`] reports.
    pub fn parse_decimal_bytes(&self, bytes: &[u8]) -> ParseResult<BigDecimal> {
        let text = std::str::from_utf8(bytes).map_err(|_| ParseError::InvalidUtf8)?;
        self.parse_decimal(text)
    }

    /// Parse decimal text under this locale.
    ///
    /// Accepted shape: an optional sign (`+`, `-` or the locale minus sign),
    /// integer digits optionally split by the grouping separator, then an
    /// optional decimal separator and fractional digits. The whole input
    /// must be consumed; there is no trimming and no exponent.
    ///
    /// # Examples
    /// - en-US: "1,234.5" -> 1234.5
    /// - de-DE: "-1.234,5" -> -1234.5
    /// - any: "007" -> 7, ".5" -> 0.5, "5." -> 5
    pub fn parse_decimal(&self, text: &str) -> ParseResult<BigDecimal> {
        if text.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut normalized = String::with_capacity(text.len() + 1);
        let mut chars = text.chars().enumerate().peekable();

        match chars.peek() {
            Some(&(_, c)) if self.is_minus(c) => {
                normalized.push('-');
                chars.next();
            },
            Some(&(_, '+')) => {
                chars.next();
            },
            _ => {},
        }

        let mut int_digits = 0usize;
        let mut frac_digits = 0usize;
        let mut in_fraction = false;
        let mut last_was_digit = false;
        // Position of a grouping separator not yet followed by a digit
        let mut pending_group: Option<usize> = None;

        for (position, ch) in chars {
            if ch.is_ascii_digit() {
                normalized.push(ch);
                if in_fraction {
                    frac_digits += 1;
                } else {
                    int_digits += 1;
                }
                last_was_digit = true;
                pending_group = None;
            } else if !in_fraction && self.is_grouping(ch) {
                if !last_was_digit {
                    return Err(ParseError::MisplacedGrouping { position });
                }
                pending_group = Some(position);
                last_was_digit = false;
            } else if !in_fraction && ch == self.decimal_separator() {
                if let Some(position) = pending_group {
                    return Err(ParseError::MisplacedGrouping { position });
                }
                if int_digits == 0 {
                    normalized.push('0');
                }
                normalized.push('.');
                in_fraction = true;
                last_was_digit = false;
            } else {
                return Err(ParseError::UnexpectedChar { ch, position });
            }
        }

        if let Some(position) = pending_group {
            return Err(ParseError::MisplacedGrouping { position });
        }
        if int_digits + frac_digits == 0 {
            return Err(ParseError::NoDigits);
        }
        if in_fraction && frac_digits == 0 {
            normalized.pop();
        }

        BigDecimal::from_str(&normalized).map_err(|_| ParseError::NoDigits)
    }
}
