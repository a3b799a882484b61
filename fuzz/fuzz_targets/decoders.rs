#![no_main]

use codec::CodecOptions;
use libfuzzer_sys::fuzz_target;
use packing::ByteReader;

fuzz_target!(|data: &[u8]| {
    let strict = CodecOptions::strict();

    let _ = codec::decode_vector(data);
    let _ = codec::decode_quaternion(data);
    let _ = codec::decode_quaternion_with(data, &strict);
    let _ = codec::decode_relative_position(data);
    if let Some((head, tail)) = data.split_first() {
        let _ = codec::decode_velocity(tail, f32::from(*head));
    }

    // Vectors are bit-exact, so any 12 bytes must re-encode unchanged.
    if let Ok(v) = codec::decode_vector(data) {
        assert_eq!(&codec::encode_vector(v)[..], &data[..12]);
    }

    // Relative positions decode to whole numbers and re-encode unchanged.
    if let Ok(v) = codec::decode_relative_position(data) {
        assert_eq!(&codec::encode_relative_position(v)[..], &data[..6]);
    }

    // Mixed streaming reads over the same buffer.
    let mut reader = ByteReader::new(data);
    while !reader.is_empty() {
        let ok = match reader.bytes_remaining() % 3 {
            0 => codec::read_quaternion(&mut reader).is_ok(),
            1 => codec::read_relative_position(&mut reader).is_ok(),
            _ => codec::read_vector(&mut reader).is_ok(),
        };
        if !ok {
            break;
        }
    }
});
