//! Error taxonomy for wrapper construction, encoding, and decoding.

use buffer::BufferError;
use thiserror::Error;

/// A field violated a stated invariant at construction time.
///
/// Raised eagerly, before any byte is written; no partial wrapper is
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// A bounded text field exceeds its declared maximum byte length.
    #[error("{field} is too long (max {max}, was {length})")]
    TextTooLong {
        /// The offending field name.
        field: &'static str,
        /// Actual byte length.
        length: usize,
        /// Declared maximum byte length.
        max: usize,
    },

    /// A structured payload serialized to more bytes than the wire allows.
    #[error("payload of {length} bytes exceeds maximum of {max}")]
    PayloadTooLong {
        /// Serialized byte length.
        length: usize,
        /// Maximum payload byte length.
        max: usize,
    },
}

/// Malformed or truncated input encountered while decoding.
///
/// Aborts the in-flight decode. The buffer's cursor position after such a
/// failure is undefined; the buffer must not be reused for another attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// A wire-level primitive failed to decode.
    #[error(transparent)]
    Buffer(#[from] BufferError),

    /// A variant id outside the declared set.
    #[error("unknown {name} variant id: {id}")]
    UnknownVariant {
        /// The variant set's name.
        name: &'static str,
        /// The undeclared wire id.
        id: i32,
    },

    /// A payload length prefix exceeds the maximum payload size.
    #[error("payload of {length} bytes exceeds maximum of {max}")]
    PayloadTooLong {
        /// The claimed payload byte length.
        length: usize,
        /// Maximum payload byte length.
        max: usize,
    },

    /// The structured-payload sub-codec rejected its byte range.
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

/// Errors surfaced while encoding an already-constructed wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EncodeError {
    /// A field invariant no longer holds (bounded text re-checked at the
    /// wire boundary).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The structured-payload sub-codec failed to serialize.
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

/// An opaque failure from the pluggable structured-payload sub-codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("payload codec: {reason}")]
pub struct PayloadError {
    /// Sub-codec specific description.
    pub reason: String,
}

impl PayloadError {
    /// Creates a payload error with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
