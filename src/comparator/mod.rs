// ============================================================================
// Comparator Module
// Value comparators evaluated by the row/column filtering layer
// ============================================================================

mod decimal_byte_comparator;
mod errors;

pub use decimal_byte_comparator::{DecimalByteComparator, COMPARATOR_NAME};
pub use errors::{ComparatorError, ComparatorResult};
