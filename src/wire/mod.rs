// ============================================================================
// Wire Module
// Protobuf envelopes for comparators crossing process/storage boundaries
// ============================================================================

mod errors;
mod messages;

pub use errors::{DecodeError, DecodeResult};
pub use messages::{ByteArrayComparableProto, ComparatorProto, DecimalComparatorProto};
