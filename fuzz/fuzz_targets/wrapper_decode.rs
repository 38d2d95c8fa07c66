#![no_main]

use buffer::{ByteReader, ByteWriter};
use codec::{CodecContext, EntityAnimation, JsonTextCodec, PacketWrapper, ResourcePackSend};
use libfuzzer_sys::fuzz_target;
use proto::ProtocolVersion;

const VERSIONS: [ProtocolVersion; 4] = [
    ProtocolVersion::V1_12_2,
    ProtocolVersion::V1_16,
    ProtocolVersion::V1_17,
    ProtocolVersion::V1_20_1,
];

fuzz_target!(|data: &[u8]| {
    let payloads = JsonTextCodec;

    for version in VERSIONS {
        let ctx = CodecContext::new(version, &payloads);

        // Whatever decodes must re-encode without error, and the re-encoded
        // bytes must decode back to an equal wrapper.
        let mut reader = ByteReader::new(data);
        if let Ok(packet) = ResourcePackSend::decode(&mut reader, &ctx) {
            let mut writer = ByteWriter::new();
            packet.encode(&mut writer, &ctx).unwrap();
            let bytes = writer.finish();
            let mut reader = ByteReader::new(&bytes);
            let again = ResourcePackSend::decode(&mut reader, &ctx).unwrap();
            assert_eq!(packet, again);
        }

        let mut reader = ByteReader::new(data);
        if let Ok(packet) = EntityAnimation::decode(&mut reader, &ctx) {
            let mut writer = ByteWriter::new();
            packet.encode(&mut writer, &ctx).unwrap();
            let bytes = writer.finish();
            let mut reader = ByteReader::new(&bytes);
            let again = EntityAnimation::decode(&mut reader, &ctx).unwrap();
            assert_eq!(packet, again);
        }
    }
});
