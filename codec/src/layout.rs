//! Encoded sizes of every codec.
//!
//! These byte counts are the wire contract; a change to any of them is a
//! change to the format.

use packing::ByteWriter;

/// Uncompressed vector: three little-endian `f32`.
pub const VECTOR_ENCODED_LEN: usize = 12;

/// Smallest-three quaternion: `u8` index followed by three `i16`.
pub const QUATERNION_ENCODED_LEN: usize = 7;

/// Velocity: three `i16` scaled by the caller's maximum velocity.
pub const VELOCITY_ENCODED_LEN: usize = 6;

/// Relative position: three `i16` in the native signed 16-bit domain.
pub const RELATIVE_POSITION_ENCODED_LEN: usize = 6;

/// Copies a writer holding exactly `N` bytes into an array.
pub(crate) fn fixed_bytes<const N: usize>(writer: &ByteWriter) -> [u8; N] {
    debug_assert_eq!(writer.bytes_written(), N, "encoded layout size");
    let mut out = [0u8; N];
    out.copy_from_slice(writer.as_bytes());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_bytes_copies_in_order() {
        let mut writer = ByteWriter::new();
        writer.write_u8(1);
        writer.write_i16(0x0302);
        let out: [u8; 3] = fixed_bytes(&writer);
        assert_eq!(out, [1, 2, 3]);
    }
}
