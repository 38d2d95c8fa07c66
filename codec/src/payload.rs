//! Structured payloads and the pluggable sub-codec boundary.

use buffer::{BufferError, ByteReader, ByteWriter};
use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, EncodeError, PayloadError, ValidationError};

/// Maximum serialized byte length of a structured payload on the wire.
pub const MAX_PAYLOAD_LEN: usize = 262_144;

/// An opaque tree-shaped rich-text value.
///
/// The codec never interprets the tree beyond owning it; serialization to
/// and from bytes is delegated to a [`PayloadCodec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    /// Literal text of this node.
    pub text: String,
    /// Child nodes appended after this node's text.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<Text>,
}

impl Text {
    /// Creates a leaf node.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            extra: Vec::new(),
        }
    }

    /// Appends a child node.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.extra.push(child);
        self
    }
}

/// Pluggable serializer for [`Text`] payloads.
///
/// The wire layer frames the payload as a var-int length prefix followed by
/// raw bytes; the internal format of those bytes is entirely the
/// sub-codec's business.
pub trait PayloadCodec: Send + Sync {
    /// Serializes a payload tree to bytes.
    fn encode(&self, payload: &Text) -> Result<Vec<u8>, PayloadError>;

    /// Parses a payload tree from bytes.
    fn decode(&self, bytes: &[u8]) -> Result<Text, PayloadError>;
}

/// JSON payload sub-codec backed by `serde_json`.
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTextCodec;

#[cfg(feature = "json")]
impl PayloadCodec for JsonTextCodec {
    fn encode(&self, payload: &Text) -> Result<Vec<u8>, PayloadError> {
        serde_json::to_vec(payload).map_err(|err| PayloadError::new(err.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Text, PayloadError> {
        serde_json::from_slice(bytes).map_err(|err| PayloadError::new(err.to_string()))
    }
}

/// Writes a length-prefixed payload using the sub-codec.
pub fn write_payload(
    writer: &mut ByteWriter,
    payloads: &dyn PayloadCodec,
    payload: &Text,
) -> Result<(), EncodeError> {
    let bytes = payloads.encode(payload)?;
    if bytes.len() > MAX_PAYLOAD_LEN {
        return Err(ValidationError::PayloadTooLong {
            length: bytes.len(),
            max: MAX_PAYLOAD_LEN,
        }
        .into());
    }
    writer.write_var_i32(bytes.len() as i32);
    writer.write_bytes(&bytes);
    Ok(())
}

/// Reads a length-prefixed payload using the sub-codec.
pub fn read_payload(
    reader: &mut ByteReader<'_>,
    payloads: &dyn PayloadCodec,
) -> Result<Text, DecodeError> {
    let length = reader.read_var_i32()?;
    if length < 0 {
        return Err(BufferError::NegativeLength { length }.into());
    }
    let length = length as usize;
    if length > MAX_PAYLOAD_LEN {
        return Err(DecodeError::PayloadTooLong {
            length,
            max: MAX_PAYLOAD_LEN,
        });
    }
    let bytes = reader.read_bytes(length)?;
    Ok(payloads.decode(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stub for paths that must fail before the sub-codec is consulted.
    struct UnreachablePayloads;

    impl PayloadCodec for UnreachablePayloads {
        fn encode(&self, _payload: &Text) -> Result<Vec<u8>, PayloadError> {
            panic!("sub-codec must not be reached")
        }

        fn decode(&self, _bytes: &[u8]) -> Result<Text, PayloadError> {
            panic!("sub-codec must not be reached")
        }
    }

    #[test]
    fn negative_payload_length_prefix_is_rejected() {
        let mut writer = ByteWriter::new();
        writer.write_var_i32(-1);
        let bytes = writer.finish();

        let mut reader = ByteReader::new(&bytes);
        let err = read_payload(&mut reader, &UnreachablePayloads).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Buffer(BufferError::NegativeLength { length: -1 })
        );
    }

    #[test]
    fn over_bound_payload_length_prefix_is_rejected() {
        let mut writer = ByteWriter::new();
        writer.write_var_i32(MAX_PAYLOAD_LEN as i32 + 1);
        let bytes = writer.finish();

        let mut reader = ByteReader::new(&bytes);
        let err = read_payload(&mut reader, &UnreachablePayloads).unwrap_err();
        assert_eq!(
            err,
            DecodeError::PayloadTooLong {
                length: MAX_PAYLOAD_LEN + 1,
                max: MAX_PAYLOAD_LEN,
            }
        );
    }

    #[test]
    fn text_tree_construction() {
        let tree = Text::plain("root")
            .child(Text::plain("left"))
            .child(Text::plain("right"));
        assert_eq!(tree.text, "root");
        assert_eq!(tree.extra.len(), 2);
    }

    #[cfg(feature = "json")]
    mod json {
        use super::*;

        #[test]
        fn json_codec_roundtrip() {
            let codec = JsonTextCodec;
            let tree = Text::plain("hello").child(Text::plain("world"));
            let bytes = codec.encode(&tree).unwrap();
            assert_eq!(codec.decode(&bytes).unwrap(), tree);
        }

        #[test]
        fn json_codec_rejects_garbage() {
            let codec = JsonTextCodec;
            let err = codec.decode(b"{not json").unwrap_err();
            assert!(!err.reason.is_empty());
        }

        #[test]
        fn leaf_serializes_without_extra_key() {
            let codec = JsonTextCodec;
            let bytes = codec.encode(&Text::plain("x")).unwrap();
            let json = String::from_utf8(bytes).unwrap();
            assert_eq!(json, r#"{"text":"x"}"#);
        }

        #[test]
        fn framed_payload_roundtrip() {
            let codec = JsonTextCodec;
            let tree = Text::plain("prompt");

            let mut writer = ByteWriter::new();
            write_payload(&mut writer, &codec, &tree).unwrap();
            let bytes = writer.finish();

            let mut reader = ByteReader::new(&bytes);
            assert_eq!(read_payload(&mut reader, &codec).unwrap(), tree);
            assert!(reader.is_empty());
        }

        #[test]
        fn framed_payload_rejects_truncation() {
            let codec = JsonTextCodec;
            let mut writer = ByteWriter::new();
            write_payload(&mut writer, &codec, &Text::plain("prompt")).unwrap();
            let mut bytes = writer.finish();
            bytes.truncate(bytes.len() - 1);

            let mut reader = ByteReader::new(&bytes);
            let err = read_payload(&mut reader, &codec).unwrap_err();
            assert!(matches!(err, DecodeError::Buffer(_)));
        }
    }
}
