//! Smallest-three quaternion codec (7 bytes).
//!
//! A unit quaternion satisfies `x² + y² + z² + w² = 1`, so the component with
//! the largest magnitude can be rebuilt from the other three once its sign is
//! known. The encoder flips the whole quaternion so that component is
//! non-negative (`q` and `-q` are the same rotation), writes its index, and
//! quantizes the remaining three into `i16` codes over `[-1/√2, 1/√2]`.
//!
//! Layout: `0: u8 index`, `1..7: i16 x3` (remaining components in ascending
//! index order, little-endian).

use packing::{ByteReader, ByteWriter};

use crate::error::{CodecResult, DomainReason};
use crate::layout::{fixed_bytes, QUATERNION_ENCODED_LEN};
use crate::options::CodecOptions;
use crate::quant::{
    dequantize_quaternion_component, quantize_quaternion_component,
    quantize_quaternion_component_with,
};
use crate::types::Quat;

/// Returns the index of the largest-magnitude component and whether it is
/// non-negative.
///
/// Ties keep the earliest index. An all-zero quaternion selects index 0.
#[must_use]
pub fn largest_component(q: Quat) -> (u8, bool) {
    let mut largest = 0.0f32;
    let mut index = 0u8;
    let mut positive = true;
    for (i, value) in (0u8..).zip(q.to_array()) {
        if value.abs() > largest.abs() {
            largest = value;
            index = i;
            positive = value > 0.0;
        }
    }
    (index, positive)
}

/// The three components other than `index`, flipped when the omitted one is
/// negative, in ascending index order.
fn smallest_three(q: Quat, index: u8, positive: bool) -> [f64; 3] {
    let mut out = [0.0; 3];
    let rest = (0u8..)
        .zip(q.to_array())
        .filter(|&(i, _)| i != index)
        .map(|(_, value)| if positive { value } else { -value });
    for (slot, value) in out.iter_mut().zip(rest) {
        *slot = f64::from(value);
    }
    out
}

/// Appends the smallest-three encoding of `q`.
pub fn write_quaternion(writer: &mut ByteWriter, q: Quat) {
    let (index, positive) = largest_component(q);
    writer.write_u8(index);
    for value in smallest_three(q, index, positive) {
        writer.write_i16(quantize_quaternion_component(value));
    }
}

/// Appends the smallest-three encoding of `q` under `options`.
///
/// Nothing is written when an error is returned.
pub fn write_quaternion_with(
    writer: &mut ByteWriter,
    q: Quat,
    options: &CodecOptions,
) -> CodecResult<()> {
    if options.check_quaternion_domain {
        validate_unit(q, options.unit_tolerance)?;
    }
    let (index, positive) = largest_component(q);
    let mut codes = [0i16; 3];
    for (code, value) in codes.iter_mut().zip(smallest_three(q, index, positive)) {
        *code = quantize_quaternion_component_with(value, options.overflow)?;
    }
    writer.write_u8(index);
    for code in codes {
        writer.write_i16(code);
    }
    Ok(())
}

fn validate_unit(q: Quat, tolerance: f32) -> CodecResult<()> {
    if !q.is_finite() {
        return Err(DomainReason::NonFinite.into());
    }
    let norm = q.norm();
    if (norm - 1.0).abs() > tolerance {
        return Err(DomainReason::NotUnit { norm }.into());
    }
    Ok(())
}

/// Encodes `q` into 7 bytes.
#[must_use]
pub fn encode_quaternion(q: Quat) -> [u8; QUATERNION_ENCODED_LEN] {
    let mut writer = ByteWriter::with_capacity(QUATERNION_ENCODED_LEN);
    write_quaternion(&mut writer, q);
    fixed_bytes(&writer)
}

/// Encodes `q` into 7 bytes under `options`.
pub fn encode_quaternion_with(
    q: Quat,
    options: &CodecOptions,
) -> CodecResult<[u8; QUATERNION_ENCODED_LEN]> {
    let mut writer = ByteWriter::with_capacity(QUATERNION_ENCODED_LEN);
    write_quaternion_with(&mut writer, q, options)?;
    Ok(fixed_bytes(&writer))
}

/// Decoded quaternion plus the radicand its omitted component came from.
struct Reconstructed {
    quat: Quat,
    radicand: f64,
}

fn read_reconstructed(reader: &mut ByteReader<'_>) -> CodecResult<Reconstructed> {
    reader.ensure(QUATERNION_ENCODED_LEN)?;
    let index = reader.read_u8()?;
    let a = dequantize_quaternion_component(reader.read_i16()?);
    let b = dequantize_quaternion_component(reader.read_i16()?);
    let c = dequantize_quaternion_component(reader.read_i16()?);
    if index > 3 {
        return Err(DomainReason::InvalidComponentIndex { index }.into());
    }

    let radicand = 1.0 - a * a - b * b - c * c;
    // NaN when the radicand is negative; only checked by `read_quaternion_with`.
    let omitted = radicand.sqrt() as f32;

    let mut rest = [a, b, c].into_iter();
    let mut components = [0.0f32; 4];
    for (i, slot) in (0u8..).zip(components.iter_mut()) {
        *slot = if i == index {
            omitted
        } else {
            rest.next().map_or(f32::NAN, |value| value as f32)
        };
    }

    Ok(Reconstructed {
        quat: components.into(),
        radicand,
    })
}

/// Reads a quaternion written by [`write_quaternion`].
///
/// The reconstructed component is always non-negative. A radicand below zero
/// (malformed input) is not reported and yields a NaN component.
pub fn read_quaternion(reader: &mut ByteReader<'_>) -> CodecResult<Quat> {
    read_reconstructed(reader).map(|r| r.quat)
}

/// Reads a quaternion under `options`.
pub fn read_quaternion_with(
    reader: &mut ByteReader<'_>,
    options: &CodecOptions,
) -> CodecResult<Quat> {
    let Reconstructed { quat, radicand } = read_reconstructed(reader)?;
    if options.check_quaternion_domain && radicand < 0.0 {
        return Err(DomainReason::NegativeRadicand { radicand }.into());
    }
    Ok(quat)
}

/// Decodes a quaternion from the first 7 bytes of `bytes`.
pub fn decode_quaternion(bytes: &[u8]) -> CodecResult<Quat> {
    read_quaternion(&mut ByteReader::new(bytes))
}

/// Decodes a quaternion from the first 7 bytes of `bytes` under `options`.
pub fn decode_quaternion_with(bytes: &[u8], options: &CodecOptions) -> CodecResult<Quat> {
    read_quaternion_with(&mut ByteReader::new(bytes), options)
}
