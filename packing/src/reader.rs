//! Byte-level reader with bounded operations.

use crate::error::{PackError, PackResult};

/// A byte-level reader for decoding little-endian fixed-width fields.
///
/// All read operations are bounds-checked and return errors on failure.
/// The reader never panics on short input.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn bytes_remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes_remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the unread tail of the buffer.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos.min(self.data.len())..]
    }

    /// Checks that `bytes` more bytes can be read without consuming them.
    pub const fn ensure(&self, bytes: usize) -> PackResult<()> {
        let available = self.bytes_remaining();
        if bytes > available {
            return Err(PackError::UnexpectedEof {
                requested: bytes,
                available,
            });
        }
        Ok(())
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> PackResult<u8> {
        let [value] = self.read_array::<1>()?;
        Ok(value)
    }

    /// Reads a `u16` (little-endian).
    pub fn read_u16(&mut self) -> PackResult<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    /// Reads an `i16` (little-endian, two's complement).
    pub fn read_i16(&mut self) -> PackResult<i16> {
        Ok(i16::from_le_bytes(self.read_array()?))
    }

    /// Reinterprets the next four bytes as the IEEE-754 bits of an `f32`.
    pub fn read_f32(&mut self) -> PackResult<f32> {
        Ok(f32::from_le_bytes(self.read_array()?))
    }

    /// Reads exactly `N` bytes.
    pub fn read_array<const N: usize>(&mut self) -> PackResult<[u8; N]> {
        self.ensure(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }
}
