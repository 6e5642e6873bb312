// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod byte_array_comparable;

pub use byte_array_comparable::ByteArrayComparable;
