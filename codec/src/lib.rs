//! Typed packet wrappers and versioned encode/decode for the pktwire codec.
//!
//! This is the main codec crate. It ties together the byte cursor, the
//! protocol version model, and the packet type registry to provide the
//! typed read/write/copy contract for wire packets.
//!
//! # Features
//!
//! - Version-gated field groups: one code path serves every modeled wire
//!   format, selected by the per-connection version context
//! - Eager construction-time validation of field invariants
//! - Pluggable structured-payload sub-codec ([`PayloadCodec`])
//! - Concrete wrappers: [`ResourcePackSend`], [`EntityAnimation`]
//!
//! # Design Principles
//!
//! - **Correctness first** - Round-trip and version-gating invariants are
//!   documented and tested.
//! - **No ambient state** - Decode and encode are pure functions of the
//!   context, field state, and buffer contents.
//! - **Malformed input fails loudly** - Truncated streams, oversized length
//!   prefixes, and undeclared variant ids are decode errors, never panics.

mod animation;
mod error;
mod payload;
mod resource_pack;
mod types;
mod wrapper;

pub use animation::{AnimationType, EntityAnimation, ENTITY_ANIMATION};
pub use error::{DecodeError, EncodeError, PayloadError, ValidationError};
#[cfg(feature = "json")]
pub use payload::JsonTextCodec;
pub use payload::{read_payload, write_payload, PayloadCodec, Text, MAX_PAYLOAD_LEN};
pub use resource_pack::{ResourcePackSend, RESOURCE_PACK_SEND};
pub use types::EntityId;
pub use wrapper::{decode_wire_enum, CodecContext, PacketWrapper};
