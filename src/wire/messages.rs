// ============================================================================
// Wire Messages
// Protobuf messages shared by every comparator in the filter protocol
// ============================================================================

use super::errors::{DecodeError, DecodeResult};
use prost::Message;

/// Generic payload of any byte-array comparable: its raw bytes
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ByteArrayComparableProto {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub value: Option<Vec<u8>>,
}

impl ByteArrayComparableProto {
    pub fn new(value: &[u8]) -> Self {
        Self {
            value: Some(value.to_vec()),
        }
    }

    /// The raw bytes; an unset field reads as empty.
    pub fn value_bytes(&self) -> &[u8] {
        self.value.as_deref().unwrap_or_default()
    }
}

/// Serialized form of a decimal byte comparator
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DecimalComparatorProto {
    /// Required; prost models it as optional so absence is checked on decode
    #[prost(message, optional, tag = "1")]
    pub comparable: Option<ByteArrayComparableProto>,
}

impl DecimalComparatorProto {
    pub fn new(comparable: ByteArrayComparableProto) -> Self {
        Self {
            comparable: Some(comparable),
        }
    }

    /// Decode the envelope and return the embedded raw bytes.
    ///
    /// # Errors
    /// `Malformed` for invalid protobuf, `MissingField` when the nested
    /// comparable is absent.
    pub fn decode_value(bytes: &[u8]) -> DecodeResult<Vec<u8>> {
        let proto = Self::decode(bytes)?;
        let comparable = proto
            .comparable
            .ok_or(DecodeError::MissingField("comparable"))?;
        Ok(comparable.value.unwrap_or_default())
    }
}

/// Named envelope carrying any comparator inside a filter definition
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ComparatorProto {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(bytes = "vec", optional, tag = "2")]
    pub serialized_comparator: Option<Vec<u8>>,
}

impl ComparatorProto {
    pub fn new(name: impl Into<String>, serialized: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            serialized_comparator: Some(serialized),
        }
    }

    /// Check the comparator name and return the serialized payload.
    ///
    /// # Errors
    /// `UnknownComparator` when `name` does not match `expected`.
    pub fn expect_payload(&self, expected: &str) -> DecodeResult<&[u8]> {
        if self.name != expected {
            return Err(DecodeError::UnknownComparator(self.name.clone()));
        }
        Ok(self.serialized_comparator.as_deref().unwrap_or_default())
    }
}
