//! Bounded byte-cursor primitives for the pktwire codec.
//!
//! This crate provides [`ByteWriter`] and [`ByteReader`] for encoding and
//! decoding wire-level scalars: booleans, fixed-width big-endian integers,
//! variable-length integers, and length-prefixed bounded strings.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are bounds-checked; string lengths
//!   are validated against caller-supplied maxima on both sides.
//! - **No domain knowledge** - This crate knows nothing about packets,
//!   versions, or payload shapes.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use buffer::{ByteWriter, ByteReader};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_bool(true);
//! writer.write_var_i32(300);
//! writer.write_string("hello", 32).unwrap();
//!
//! let bytes = writer.finish();
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert!(reader.read_bool().unwrap());
//! assert_eq!(reader.read_var_i32().unwrap(), 300);
//! assert_eq!(reader.read_string(32).unwrap(), "hello");
//! ```

mod error;
mod reader;
mod writer;

pub use error::{BufResult, BufferError};
pub use reader::ByteReader;
pub use writer::ByteWriter;
