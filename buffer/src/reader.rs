//! Byte-cursor reader with bounded operations.

use crate::error::{BufResult, BufferError};

const VAR_I32_MAX_BYTES: usize = 5;
const VAR_I64_MAX_BYTES: usize = 10;

/// A cursor-based reader for decoding wire-level primitives.
///
/// All read operations are bounds-checked and return errors on failure.
/// The reader never panics on malformed input. Every successful read
/// advances the cursor; there is no backtracking API. After a failed
/// read the cursor position is unspecified and the reader must not be
/// reused for a subsequent decode attempt.
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` over a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> BufResult<u8> {
        let bytes = self.take(1)?;
        Ok(bytes[0])
    }

    /// Reads a single signed byte.
    pub fn read_i8(&mut self) -> BufResult<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Reads a one-byte boolean. Zero is `false`, anything else is `true`.
    pub fn read_bool(&mut self) -> BufResult<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads a big-endian `u16`.
    pub fn read_u16(&mut self) -> BufResult<u16> {
        Ok(u16::from_be_bytes(self.take_array::<2>()?))
    }

    /// Reads a big-endian `i16`.
    pub fn read_i16(&mut self) -> BufResult<i16> {
        Ok(i16::from_be_bytes(self.take_array::<2>()?))
    }

    /// Reads a big-endian `u32`.
    pub fn read_u32(&mut self) -> BufResult<u32> {
        Ok(u32::from_be_bytes(self.take_array::<4>()?))
    }

    /// Reads a big-endian `i32`.
    pub fn read_i32(&mut self) -> BufResult<i32> {
        Ok(i32::from_be_bytes(self.take_array::<4>()?))
    }

    /// Reads a big-endian `i64`.
    pub fn read_i64(&mut self) -> BufResult<i64> {
        Ok(i64::from_be_bytes(self.take_array::<8>()?))
    }

    /// Reads a big-endian `f32`.
    pub fn read_f32(&mut self) -> BufResult<f32> {
        Ok(f32::from_be_bytes(self.take_array::<4>()?))
    }

    /// Reads a big-endian `f64`.
    pub fn read_f64(&mut self) -> BufResult<f64> {
        Ok(f64::from_be_bytes(self.take_array::<8>()?))
    }

    /// Reads a variable-length `i32` (7 payload bits per byte).
    ///
    /// At most five encoded bytes are consumed; a fifth byte with the
    /// continuation bit set is [`BufferError::VarIntTooLong`].
    pub fn read_var_i32(&mut self) -> BufResult<i32> {
        let mut value = 0u32;
        for shift in (0..VAR_I32_MAX_BYTES as u32 * 7).step_by(7) {
            let byte = self.read_u8()?;
            value |= u32::from(byte & 0x7F) << shift;
            if byte & 0x80 == 0 {
                return Ok(value as i32);
            }
        }
        Err(BufferError::VarIntTooLong {
            max_bytes: VAR_I32_MAX_BYTES,
        })
    }

    /// Reads a variable-length `i64` (7 payload bits per byte, at most ten bytes).
    pub fn read_var_i64(&mut self) -> BufResult<i64> {
        let mut value = 0u64;
        for shift in (0..VAR_I64_MAX_BYTES as u32 * 7).step_by(7) {
            let byte = self.read_u8()?;
            value |= u64::from(byte & 0x7F) << shift;
            if byte & 0x80 == 0 {
                return Ok(value as i64);
            }
        }
        Err(BufferError::VarIntTooLong {
            max_bytes: VAR_I64_MAX_BYTES,
        })
    }

    /// Reads a length-prefixed UTF-8 string of at most `max_len` bytes.
    ///
    /// The length prefix is a variable-length `i32`. A negative prefix, a
    /// prefix exceeding `max_len`, or a prefix exceeding the remaining input
    /// is an error; the value is never truncated.
    pub fn read_string(&mut self, max_len: usize) -> BufResult<String> {
        let length = self.read_var_i32()?;
        if length < 0 {
            return Err(BufferError::NegativeLength { length });
        }
        let length = length as usize;
        if length > max_len {
            return Err(BufferError::StringTooLong {
                length,
                max: max_len,
            });
        }
        if length > self.remaining() {
            return Err(BufferError::LengthExceedsInput {
                length,
                available: self.remaining(),
            });
        }
        let bytes = self.take(length)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| BufferError::InvalidUtf8)
    }

    /// Reads `len` raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> BufResult<&'a [u8]> {
        self.take(len)
    }

    /// Consumes and returns all remaining bytes.
    pub fn read_remaining(&mut self) -> &'a [u8] {
        let rest = &self.data[self.pos..];
        self.pos = self.data.len();
        rest
    }

    fn take(&mut self, len: usize) -> BufResult<&'a [u8]> {
        if len > self.remaining() {
            return Err(BufferError::UnexpectedEof {
                requested: len,
                available: self.remaining(),
            });
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> BufResult<[u8; N]> {
        let bytes = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }
}
