//! Error types for byte-cursor operations.

use thiserror::Error;

/// Result type for buffer operations.
pub type BufResult<T> = Result<T, BufferError>;

/// Errors that can occur while reading or writing wire-level primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BufferError {
    /// Attempted to read past the end of the input.
    #[error("attempted to read {requested} bytes but only {available} available")]
    UnexpectedEof {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// A variable-length integer used more continuation bytes than allowed.
    #[error("varint exceeds {max_bytes} bytes")]
    VarIntTooLong {
        /// Maximum encoded length for this integer width.
        max_bytes: usize,
    },

    /// A length prefix decoded to a negative value.
    #[error("negative length prefix: {length}")]
    NegativeLength {
        /// The decoded length.
        length: i32,
    },

    /// A length prefix exceeds the bound supplied by the caller.
    #[error("string of {length} bytes exceeds maximum of {max}")]
    StringTooLong {
        /// Actual byte length.
        length: usize,
        /// Caller-supplied maximum byte length.
        max: usize,
    },

    /// A length prefix exceeds the bytes remaining in the input.
    #[error("length prefix {length} exceeds {available} remaining bytes")]
    LengthExceedsInput {
        /// The decoded length.
        length: usize,
        /// Bytes remaining in the input.
        available: usize,
    },

    /// String bytes were not valid UTF-8.
    #[error("string bytes are not valid UTF-8")]
    InvalidUtf8,
}
