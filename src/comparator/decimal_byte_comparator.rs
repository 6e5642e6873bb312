// ============================================================================
// Decimal Byte Comparator
// Compares cell bytes, read as locale-formatted decimal text, to a reference
// ============================================================================

use super::errors::ComparatorResult;
use crate::interfaces::ByteArrayComparable;
use crate::numeric::{BigDecimal, Locale, ParseResult};
use crate::wire::{ComparatorProto, DecimalComparatorProto, DecodeError};
use prost::Message;
use std::cmp::Ordering;
use std::fmt;

/// Comparator name carried in the named envelope of the filter protocol.
///
/// This is the class name peers register the comparator under; it is kept
/// as-is for wire interop.
pub const COMPARATOR_NAME: &str = "org.apache.hadoop.hbase.filter.LongComparator";

/// Width of the big-endian integer form produced by [`DecimalByteComparator::from_i64`]
const INTEGER_WIDTH: usize = std::mem::size_of::<i64>();

/// Orders candidate byte buffers by the decimal number they spell.
///
/// The comparator holds an exact reference value together with the raw bytes
/// it was built from. Candidates are read as decimal text under the locale
/// captured at construction; a candidate that is not a number under that
/// locale ranks below the reference, so "less than" style predicates skip
/// non-numeric cells instead of failing the scan.
///
/// Only the raw bytes travel on the wire. The locale is re-resolved when a
/// comparator is decoded, so text such as `"1,5"` can mean 15 in one process
/// and 1.5 in another.
///
/// # Example
/// ```
/// use decimal_comparator::prelude::*;
/// use std::cmp::Ordering;
///
/// let comparator = DecimalByteComparator::from_i64_with_locale(42, Locale::us());
/// assert_eq!(comparator.compare(b"42"), Ordering::Equal);
/// assert_eq!(comparator.compare(b"41.999"), Ordering::Greater);
/// assert_eq!(comparator.compare(b"n/a"), Ordering::Greater);
/// ```
#[derive(Clone)]
pub struct DecimalByteComparator {
    value: Vec<u8>,
    reference: BigDecimal,
    locale: Locale,
}

impl DecimalByteComparator {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from an integer under the ambient locale.
    ///
    /// The raw bytes are the 8-byte big-endian encoding of `value`.
    pub fn from_i64(value: i64) -> Self {
        Self::from_i64_with_locale(value, Locale::ambient())
    }

    /// Create from an integer with an explicit locale.
    pub fn from_i64_with_locale(value: i64, locale: Locale) -> Self {
        Self {
            value: value.to_be_bytes().to_vec(),
            reference: BigDecimal::from(value),
            locale,
        }
    }

    /// Create from decimal text under the ambient locale.
    ///
    /// # Errors
    /// Returns a [`ParseError`](crate::numeric::ParseError) if `value` is not
    /// a decimal number under the ambient locale.
    pub fn from_bytes(value: impl Into<Vec<u8>>) -> ParseResult<Self> {
        Self::from_bytes_with_locale(value, Locale::ambient())
    }

    /// Create from decimal text with an explicit locale.
    ///
    /// # Errors
    /// Returns a [`ParseError`](crate::numeric::ParseError) if `value` is not
    /// a decimal number under `locale`.
    pub fn from_bytes_with_locale(value: impl Into<Vec<u8>>, locale: Locale) -> ParseResult<Self> {
        let value = value.into();
        let reference = locale.parse_decimal_bytes(&value)?;
        Ok(Self {
            value,
            reference,
            locale,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The exact value candidates are compared against.
    pub fn reference_value(&self) -> &BigDecimal {
        &self.reference
    }

    /// The locale captured at construction.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Rank the reference value against `candidate`.
    ///
    /// `Greater` means the reference is above the candidate. Candidates that
    /// do not parse under this comparator's locale always yield `Greater`.
    #[inline]
    pub fn compare(&self, candidate: &[u8]) -> Ordering {
        self.compare_slice(candidate)
    }

    fn compare_slice(&self, candidate: &[u8]) -> Ordering {
        match self.locale.parse_decimal_bytes(candidate) {
            Ok(that) => self.reference.cmp(&that),
            Err(err) => {
                tracing::trace!("Non-numeric candidate ranks below reference: {}", err);
                Ordering::Greater
            },
        }
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    /// Decode a comparator produced by [`ByteArrayComparable::to_byte_array`],
    /// re-reading its value under the ambient locale.
    ///
    /// # Errors
    /// `Decode` if the bytes are not a comparator envelope, `Parse` if the
    /// embedded value is not a decimal number.
    pub fn parse_from(bytes: &[u8]) -> ComparatorResult<Self> {
        Self::parse_from_with_locale(bytes, Locale::ambient())
    }

    /// Decode a comparator, re-reading its value under `locale`.
    ///
    /// # Errors
    /// See [`DecimalByteComparator::parse_from`].
    pub fn parse_from_with_locale(bytes: &[u8], locale: Locale) -> ComparatorResult<Self> {
        let value = DecimalComparatorProto::decode_value(bytes)?;
        Ok(Self::from_wire_value(value, locale)?)
    }

    /// Wrap this comparator in the named envelope used inside filter definitions.
    pub fn to_comparator_proto(&self) -> ComparatorProto {
        ComparatorProto::new(COMPARATOR_NAME, self.to_byte_array())
    }

    /// Decode a comparator from a named envelope under the ambient locale.
    ///
    /// # Errors
    /// `Decode(UnknownComparator)` if the envelope carries another comparator,
    /// otherwise as [`DecimalByteComparator::parse_from`].
    pub fn from_comparator_proto(proto: &ComparatorProto) -> ComparatorResult<Self> {
        let payload = proto.expect_payload(COMPARATOR_NAME)?;
        Self::parse_from(payload)
    }

    /// Decode a named envelope from its protobuf bytes.
    ///
    /// # Errors
    /// As [`DecimalByteComparator::from_comparator_proto`].
    pub fn from_comparator_bytes(bytes: &[u8]) -> ComparatorResult<Self> {
        let proto = ComparatorProto::decode(bytes).map_err(DecodeError::from)?;
        Self::from_comparator_proto(&proto)
    }

    /// Rebuild from embedded wire bytes.
    ///
    /// Text is read under `locale`. Eight bytes that cannot be text (invalid
    /// UTF-8 or containing a control byte) are the integer form written by
    /// `from_i64` and are restored as that integer. Anything else that fails
    /// to parse is a `ParseError`.
    fn from_wire_value(value: Vec<u8>, locale: Locale) -> ParseResult<Self> {
        let err = match locale.parse_decimal_bytes(&value) {
            Ok(reference) => {
                return Ok(Self {
                    value,
                    reference,
                    locale,
                })
            },
            Err(err) => err,
        };

        match <[u8; INTEGER_WIDTH]>::try_from(value.as_slice()) {
            Ok(fixed) if !is_text(&fixed) => {
                let integer = i64::from_be_bytes(fixed);
                tracing::debug!("Restored integer-form comparator value {}", integer);
                Ok(Self::from_i64_with_locale(integer, locale))
            },
            _ => Err(err),
        }
    }
}

/// Valid UTF-8 without ASCII control bytes.
fn is_text(bytes: &[u8]) -> bool {
    std::str::from_utf8(bytes).is_ok() && !bytes.iter().any(u8::is_ascii_control)
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl ByteArrayComparable for DecimalByteComparator {
    fn value(&self) -> &[u8] {
        &self.value
    }

    fn compare_to_range(&self, buf: &[u8], offset: usize, length: usize) -> Ordering {
        match offset.checked_add(length).and_then(|end| buf.get(offset..end)) {
            Some(candidate) => self.compare_slice(candidate),
            None => {
                tracing::trace!(
                    "Candidate range {}+{} outside buffer of {} bytes",
                    offset,
                    length,
                    buf.len()
                );
                Ordering::Greater
            },
        }
    }

    fn to_byte_array(&self) -> Vec<u8> {
        DecimalComparatorProto::new(self.convert()).encode_to_vec()
    }

    fn name(&self) -> &'static str {
        COMPARATOR_NAME
    }

    fn are_serialized_fields_equal(&self, other: &dyn ByteArrayComparable) -> bool {
        std::ptr::addr_eq(self as *const Self, other as *const dyn ByteArrayComparable)
            || self.value() == other.value()
    }
}

impl fmt::Debug for DecimalByteComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DecimalByteComparator({}, locale={}, raw={:?})",
            self.reference,
            self.locale.tag(),
            self.value
        )
    }
}

impl fmt::Display for DecimalByteComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalByteComparator({})", self.reference)
    }
}

// ============================================================================
// Tests
// ============================================================================
