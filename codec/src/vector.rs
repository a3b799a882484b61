//! Uncompressed 12-byte vector codec.
//!
//! Used where precision matters more than bandwidth, e.g. absolute world
//! positions. The round trip is bit-identical.

use packing::{ByteReader, ByteWriter};

use crate::error::CodecResult;
use crate::layout::{fixed_bytes, VECTOR_ENCODED_LEN};
use crate::types::Vec3;

/// Appends `v` as three little-endian `f32`.
pub fn write_vector(writer: &mut ByteWriter, v: Vec3) {
    writer.write_f32(v.x);
    writer.write_f32(v.y);
    writer.write_f32(v.z);
}

/// Reads a vector written by [`write_vector`].
pub fn read_vector(reader: &mut ByteReader<'_>) -> CodecResult<Vec3> {
    reader.ensure(VECTOR_ENCODED_LEN)?;
    let x = reader.read_f32()?;
    let y = reader.read_f32()?;
    let z = reader.read_f32()?;
    Ok(Vec3 { x, y, z })
}

/// Encodes `v` into 12 bytes.
#[must_use]
pub fn encode_vector(v: Vec3) -> [u8; VECTOR_ENCODED_LEN] {
    let mut writer = ByteWriter::with_capacity(VECTOR_ENCODED_LEN);
    write_vector(&mut writer, v);
    fixed_bytes(&writer)
}

/// Decodes a vector from the first 12 bytes of `bytes`.
pub fn decode_vector(bytes: &[u8]) -> CodecResult<Vec3> {
    read_vector(&mut ByteReader::new(bytes))
}
