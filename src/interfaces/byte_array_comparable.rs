// ============================================================================
// Byte-Array Comparable Interface
// Contract shared by every value that a filter compares cell bytes against
// ============================================================================

use crate::wire::ByteArrayComparableProto;
use std::cmp::Ordering;

/// A value that orders candidate byte buffers relative to itself.
///
/// Implementations hold the raw bytes they were built from and decide how a
/// candidate range ranks against them. The result reads as "self compared to
/// candidate": `Greater` means the stored value ranks above the candidate.
///
/// # Thread Safety
/// All implementations must be `Send + Sync` so that one instance can be
/// shared by concurrent scans.
pub trait ByteArrayComparable: Send + Sync {
    /// The raw bytes this comparable was built from.
    fn value(&self) -> &[u8];

    /// Compare against `length` bytes of `buf` starting at `offset`.
    ///
    /// A range that does not fit inside `buf` must not panic.
    fn compare_to_range(&self, buf: &[u8], offset: usize, length: usize) -> Ordering;

    /// Serialized wire form of this comparable.
    fn to_byte_array(&self) -> Vec<u8>;

    /// Name under which this comparable travels in a named envelope.
    fn name(&self) -> &'static str;

    /// Compare against the whole of `candidate`.
    fn compare_to(&self, candidate: &[u8]) -> Ordering {
        self.compare_to_range(candidate, 0, candidate.len())
    }

    /// Generic payload carrying the raw bytes.
    fn convert(&self) -> ByteArrayComparableProto {
        ByteArrayComparableProto::new(self.value())
    }

    /// True if the serialized fields of both comparables are equal.
    ///
    /// Used for testing round-trip fidelity, not for filter logic.
    fn are_serialized_fields_equal(&self, other: &dyn ByteArrayComparable) -> bool {
        self.value() == other.value()
    }
}
