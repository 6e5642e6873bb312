// ============================================================================
// Numeric Module
// Locale-aware reading of decimal text into exact decimals
// ============================================================================
//
// This module provides:
// - Locale: number-format profile (separators, minus sign) with a built-in
//   table and ambient resolution from the process environment
// - Locale::parse_decimal: strict parser producing arbitrary-precision values
// - ParseError / LocaleError: error types for parsing and profile building
//
// Design principles:
// - No floating-point operations
// - Parsing returns Result (no panics, no partial matches)
// - The locale is an explicit value, never consulted implicitly mid-parse

mod decimal_format;
mod errors;
mod locale;

pub use bigdecimal::BigDecimal;
pub use errors::{LocaleError, ParseError, ParseResult};
pub use locale::Locale;
