// ============================================================================
// Decimal Comparator Library
// Locale-aware arbitrary-precision comparator for byte-oriented filters
// ============================================================================

//! # Decimal Comparator
//!
//! A value comparator for storage-engine filters that reads cell bytes as
//! locale-formatted decimal text and ranks them against a reference number.
//!
//! ## Features
//!
//! - **Exact comparison** with arbitrary-precision decimals (`"007" == "7"`,
//!   `"3.14" == "3.140"`)
//! - **Locale-aware parsing** of signs, grouping and decimal separators
//! - **Non-numeric fallback**: unparseable cells rank below the reference
//!   instead of failing the scan
//! - **Protobuf wire form** compatible with the filter protocol's comparator
//!   envelopes
//!
//! ## Example
//!
//! ```rust
//! use decimal_comparator::prelude::*;
//! use std::cmp::Ordering;
//!
//! // Reference value read under an explicit locale
//! let comparator = DecimalByteComparator::from_bytes_with_locale("1.234,5", Locale::germany())?;
//!
//! assert_eq!(comparator.compare(b"1234,50"), Ordering::Equal);
//! assert_eq!(comparator.compare(b"999"), Ordering::Greater);
//! assert_eq!(comparator.compare(b"N/A"), Ordering::Greater);
//!
//! // Ship it inside a filter definition and read it back
//! let wire = comparator.to_byte_array();
//! let decoded = DecimalByteComparator::parse_from_with_locale(&wire, Locale::germany())?;
//! assert!(decoded.are_serialized_fields_equal(&comparator));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Locale caveat
//!
//! Only the raw bytes are serialized. A decoded comparator re-reads them
//! under the decoding process's locale, which may differ from the one the
//! comparator was built with.

pub mod comparator;
pub mod interfaces;
pub mod numeric;
pub mod utils;
pub mod wire;

// Re-exports for convenience
pub mod prelude {
    pub use crate::comparator::{
        ComparatorError, ComparatorResult, DecimalByteComparator, COMPARATOR_NAME,
    };
    pub use crate::interfaces::ByteArrayComparable;
    pub use crate::numeric::{BigDecimal, Locale, LocaleError, ParseError};
    pub use crate::wire::{ComparatorProto, DecodeError};
}
