//! The typed read/write/copy contract for packet wrappers.

use buffer::{ByteReader, ByteWriter};
use proto::{ProtocolVersion, WireEnum};
use registry::PacketType;

use crate::error::{DecodeError, EncodeError};
use crate::payload::PayloadCodec;

/// Per-connection context supplied by the transport layer.
///
/// Carries the negotiated peer protocol version and the pluggable
/// structured-payload sub-codec. The context must be available before the
/// first decode or encode call; the codec keeps no ambient equivalent.
pub struct CodecContext<'a> {
    /// The negotiated protocol version for this connection.
    pub version: ProtocolVersion,
    /// Serializer for opaque structured payloads.
    pub payloads: &'a dyn PayloadCodec,
}

impl<'a> CodecContext<'a> {
    /// Creates a context for one connection.
    #[must_use]
    pub const fn new(version: ProtocolVersion, payloads: &'a dyn PayloadCodec) -> Self {
        Self { version, payloads }
    }
}

impl std::fmt::Debug for CodecContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodecContext")
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

/// A typed in-memory representation of exactly one wire packet.
///
/// `decode` and `encode` are pure functions of the context, the field state,
/// and the buffer contents; they consult the context's version at each
/// conditional field group, so one code path serves every modeled wire
/// format. A wrapper is single-use: it is not reused across distinct wire
/// messages.
pub trait PacketWrapper: Sized {
    /// The registry descriptor for this wrapper.
    const PACKET_TYPE: &'static PacketType;

    /// Populates a wrapper from the bound buffer at the context's version.
    ///
    /// On failure the reader's cursor position is undefined and the reader
    /// must not be reused.
    fn decode(reader: &mut ByteReader<'_>, ctx: &CodecContext<'_>) -> Result<Self, DecodeError>;

    /// Writes this wrapper's fields at the context's version.
    ///
    /// Fields undefined at the context's version are omitted entirely -
    /// zero bytes, not defaults.
    fn encode(&self, writer: &mut ByteWriter, ctx: &CodecContext<'_>) -> Result<(), EncodeError>;

    /// Replaces this wrapper's fields with deep copies of `source`'s.
    ///
    /// Mutating either wrapper's substructures afterwards never affects
    /// the other.
    fn copy_from(&mut self, source: &Self);

    /// Convenience accessor for the registry descriptor.
    #[must_use]
    fn packet_type(&self) -> &'static PacketType {
        Self::PACKET_TYPE
    }
}

/// Resolves a decoded integer id to a declared variant case.
///
/// Out-of-range ids are a [`DecodeError::UnknownVariant`], never an index.
pub fn decode_wire_enum<E: WireEnum>(id: i32) -> Result<E, DecodeError> {
    E::from_wire_id(id).ok_or(DecodeError::UnknownVariant { name: E::NAME, id })
}
