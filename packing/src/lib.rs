//! Little-endian byte packing primitives for the tqc transform codec.
//!
//! This crate provides [`ByteWriter`] and [`ByteReader`] for laying out
//! fixed-width numeric fields back to back, plus [`concat`] for joining
//! already-encoded byte sequences.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Fixed byte order** - Every multi-byte field is little-endian, on every host.
//! - **No padding** - Fields are packed with no alignment or separators.
//! - **Bounded reads** - All reads are bounds-checked and return structured errors.
//!
//! # Example
//!
//! ```
//! use packing::{ByteReader, ByteWriter};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_u8(3);
//! writer.write_i16(-1234);
//! writer.write_f32(0.5);
//!
//! let bytes = writer.finish();
//! assert_eq!(bytes.len(), 7);
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert_eq!(reader.read_u8().unwrap(), 3);
//! assert_eq!(reader.read_i16().unwrap(), -1234);
//! assert_eq!(reader.read_f32().unwrap(), 0.5);
//! ```

mod error;
mod reader;
mod writer;

pub use error::{PackError, PackResult};
pub use reader::ByteReader;
pub use writer::{concat, ByteWriter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roundtrip() {
        let writer = ByteWriter::new();
        let bytes = writer.finish();
        assert!(bytes.is_empty());

        let reader = ByteReader::new(&bytes);
        assert!(reader.is_empty());
    }

    #[test]
    fn mixed_roundtrip() {
        let mut writer = ByteWriter::new();
        writer.write_u8(0xFF);
        writer.write_u16(0xBEEF);
        writer.write_i16(-32768);
        writer.write_f32(-0.0);
        let bytes = writer.finish();
        assert_eq!(bytes.len(), 9);

        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.read_u8().unwrap(), 0xFF);
        assert_eq!(reader.read_u16().unwrap(), 0xBEEF);
        assert_eq!(reader.read_i16().unwrap(), -32768);
        assert_eq!(reader.read_f32().unwrap().to_bits(), (-0.0f32).to_bits());
        assert!(reader.is_empty());
    }

    #[test]
    fn concat_matches_writer() {
        let mut writer = ByteWriter::new();
        writer.write_f32(1.0);
        writer.write_f32(2.0);
        writer.write_f32(3.0);

        let joined = concat(&[
            &1.0f32.to_le_bytes(),
            &2.0f32.to_le_bytes(),
            &3.0f32.to_le_bytes(),
        ]);
        assert_eq!(joined, writer.finish());
    }
}
