//! Clientbound resource pack send packet.

use buffer::{ByteReader, ByteWriter};
use proto::{Direction, Phase, ProtocolVersion};
use registry::{PacketType, VersionedId};

use crate::error::{DecodeError, EncodeError, ValidationError};
use crate::payload::{read_payload, write_payload, Text};
use crate::wrapper::{CodecContext, PacketWrapper};

static RESOURCE_PACK_SEND_IDS: &[VersionedId] = &[
    VersionedId::new(ProtocolVersion::V1_12_2, 0x34),
    VersionedId::new(ProtocolVersion::V1_16, 0x39),
    VersionedId::new(ProtocolVersion::V1_17, 0x3C),
];

/// Registry descriptor for [`ResourcePackSend`].
pub static RESOURCE_PACK_SEND: PacketType = PacketType::new(
    "resource_pack_send",
    Phase::Play,
    Direction::Clientbound,
    RESOURCE_PACK_SEND_IDS,
);

/// Asks the client to download and apply a resource pack.
///
/// Wire layout: `[string url][string hash]`, and from 1.16 onward
/// `[bool required][bool has_prompt][payload prompt?]`. Below 1.16 the
/// gated group is absent from the stream entirely; `required` then decodes
/// to `false` and `prompt` to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePackSend {
    url: String,
    hash: String,
    required: bool,
    prompt: Option<Text>,
}

impl ResourcePackSend {
    /// Maximum byte length of the pack hash.
    pub const MAX_HASH_LENGTH: usize = 40;
    /// Maximum byte length of the pack URL.
    pub const MAX_URL_LENGTH: usize = 32_767;

    /// First version carrying the `required`/`prompt` field group.
    const GATED_SINCE: ProtocolVersion = ProtocolVersion::V1_16;

    /// Constructs an outbound wrapper, validating every field invariant
    /// before any byte can be written.
    pub fn new(
        url: impl Into<String>,
        hash: impl Into<String>,
        required: bool,
        prompt: Option<Text>,
    ) -> Result<Self, ValidationError> {
        let url = url.into();
        let hash = hash.into();
        if url.len() > Self::MAX_URL_LENGTH {
            return Err(ValidationError::TextTooLong {
                field: "url",
                length: url.len(),
                max: Self::MAX_URL_LENGTH,
            });
        }
        if hash.len() > Self::MAX_HASH_LENGTH {
            return Err(ValidationError::TextTooLong {
                field: "hash",
                length: hash.len(),
                max: Self::MAX_HASH_LENGTH,
            });
        }
        Ok(Self {
            url,
            hash,
            required,
            prompt,
        })
    }

    /// The resource pack URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The pack's SHA-1 hash, at most 40 bytes.
    #[must_use]
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Whether the client must accept the pack (always `false` below 1.16).
    #[must_use]
    pub const fn required(&self) -> bool {
        self.required
    }

    /// Optional prompt shown to the client (1.16+ only).
    #[must_use]
    pub const fn prompt(&self) -> Option<&Text> {
        self.prompt.as_ref()
    }
}

impl PacketWrapper for ResourcePackSend {
    const PACKET_TYPE: &'static PacketType = &RESOURCE_PACK_SEND;

    fn decode(reader: &mut ByteReader<'_>, ctx: &CodecContext<'_>) -> Result<Self, DecodeError> {
        let url = reader.read_string(Self::MAX_URL_LENGTH)?;
        let hash = reader.read_string(Self::MAX_HASH_LENGTH)?;
        let mut required = false;
        let mut prompt = None;
        if ctx.version.newer_than_or_eq(Self::GATED_SINCE) {
            required = reader.read_bool()?;
            let has_prompt = reader.read_bool()?;
            if has_prompt {
                prompt = Some(read_payload(reader, ctx.payloads)?);
            }
        }
        Ok(Self {
            url,
            hash,
            required,
            prompt,
        })
    }

    fn encode(&self, writer: &mut ByteWriter, ctx: &CodecContext<'_>) -> Result<(), EncodeError> {
        write_bounded(writer, "url", &self.url, Self::MAX_URL_LENGTH)?;
        write_bounded(writer, "hash", &self.hash, Self::MAX_HASH_LENGTH)?;
        if ctx.version.newer_than_or_eq(Self::GATED_SINCE) {
            writer.write_bool(self.required);
            writer.write_bool(self.prompt.is_some());
            if let Some(prompt) = &self.prompt {
                write_payload(writer, ctx.payloads, prompt)?;
            }
        }
        Ok(())
    }

    fn copy_from(&mut self, source: &Self) {
        self.url.clone_from(&source.url);
        self.hash.clone_from(&source.hash);
        self.required = source.required;
        self.prompt.clone_from(&source.prompt);
    }
}

fn write_bounded(
    writer: &mut ByteWriter,
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), EncodeError> {
    writer
        .write_string(value, max)
        .map_err(|_| ValidationError::TextTooLong {
            field,
            length: value.len(),
            max,
        })?;
    Ok(())
}
