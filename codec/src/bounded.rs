//! Bounded-range 6-byte codecs: velocity and relative position.
//!
//! Both write three `i16` codes. Velocity scales `[-max_velocity, max_velocity]`
//! onto the full `i16` range; the caller must pass the same `max_velocity` to
//! the decoder. Relative position uses the `i16` domain itself, so in-range
//! input is simply truncated.

use packing::{ByteReader, ByteWriter};

use crate::error::CodecResult;
use crate::layout::{fixed_bytes, RELATIVE_POSITION_ENCODED_LEN, VELOCITY_ENCODED_LEN};
use crate::options::{CodecOptions, OverflowPolicy};
use crate::quant::{quantize_to_i16, quantize_to_i16_with, validate_range};
use crate::types::Vec3;

/// Decoder divisor for velocity codes.
const VELOCITY_SCALE: f32 = i16::MAX as f32;

/// Lower bound of the relative position domain.
pub const RELATIVE_POSITION_MIN: f32 = i16::MIN as f32;

/// Upper bound of the relative position domain.
pub const RELATIVE_POSITION_MAX: f32 = i16::MAX as f32;

fn write_codes(writer: &mut ByteWriter, codes: [i16; 3]) {
    for code in codes {
        writer.write_i16(code);
    }
}

fn read_codes(reader: &mut ByteReader<'_>) -> CodecResult<[i16; 3]> {
    reader.ensure(3 * 2)?;
    Ok([reader.read_i16()?, reader.read_i16()?, reader.read_i16()?])
}

fn quantize_all(v: Vec3, min: f32, max: f32) -> [i16; 3] {
    let (min, max) = (f64::from(min), f64::from(max));
    v.to_array()
        .map(|component| quantize_to_i16(f64::from(component), min, max))
}

fn quantize_all_with(
    v: Vec3,
    min: f32,
    max: f32,
    policy: OverflowPolicy,
) -> CodecResult<[i16; 3]> {
    let (min, max) = (f64::from(min), f64::from(max));
    let mut codes = [0i16; 3];
    for (code, component) in codes.iter_mut().zip(v.to_array()) {
        *code = quantize_to_i16_with(f64::from(component), min, max, policy)?;
    }
    Ok(codes)
}

// Velocity

/// Appends `v` quantized over `[-max_velocity, max_velocity]`.
pub fn write_velocity(writer: &mut ByteWriter, v: Vec3, max_velocity: f32) {
    write_codes(writer, quantize_all(v, -max_velocity, max_velocity));
}

/// Appends `v` quantized over `[-max_velocity, max_velocity]` under `options`.
///
/// Nothing is written when an error is returned.
pub fn write_velocity_with(
    writer: &mut ByteWriter,
    v: Vec3,
    max_velocity: f32,
    options: &CodecOptions,
) -> CodecResult<()> {
    let codes = quantize_all_with(v, -max_velocity, max_velocity, options.overflow)?;
    write_codes(writer, codes);
    Ok(())
}

/// Reads a velocity written with the same `max_velocity`.
pub fn read_velocity(reader: &mut ByteReader<'_>, max_velocity: f32) -> CodecResult<Vec3> {
    let codes = read_codes(reader)?;
    Ok(codes
        .map(|code| f32::from(code) * max_velocity / VELOCITY_SCALE)
        .into())
}

/// Encodes a velocity into 6 bytes.
///
/// Components outside `[-max_velocity, max_velocity]` wrap around.
#[must_use]
pub fn encode_velocity(v: Vec3, max_velocity: f32) -> [u8; VELOCITY_ENCODED_LEN] {
    let mut writer = ByteWriter::with_capacity(VELOCITY_ENCODED_LEN);
    write_velocity(&mut writer, v, max_velocity);
    fixed_bytes(&writer)
}

/// Encodes a velocity into 6 bytes under `options`.
pub fn encode_velocity_with(
    v: Vec3,
    max_velocity: f32,
    options: &CodecOptions,
) -> CodecResult<[u8; VELOCITY_ENCODED_LEN]> {
    let mut writer = ByteWriter::with_capacity(VELOCITY_ENCODED_LEN);
    write_velocity_with(&mut writer, v, max_velocity, options)?;
    Ok(fixed_bytes(&writer))
}

/// Decodes a velocity from the first 6 bytes of `bytes`.
pub fn decode_velocity(bytes: &[u8], max_velocity: f32) -> CodecResult<Vec3> {
    read_velocity(&mut ByteReader::new(bytes), max_velocity)
}

/// Checks that `max_velocity` describes a usable range.
pub fn validate_max_velocity(max_velocity: f32) -> CodecResult<()> {
    validate_range(-f64::from(max_velocity), f64::from(max_velocity))
}

// Relative position

/// Appends `v` truncated into the `i16` domain.
pub fn write_relative_position(writer: &mut ByteWriter, v: Vec3) {
    write_codes(
        writer,
        quantize_all(v, RELATIVE_POSITION_MIN, RELATIVE_POSITION_MAX),
    );
}

/// Appends `v` truncated into the `i16` domain under `options`.
///
/// Nothing is written when an error is returned.
pub fn write_relative_position_with(
    writer: &mut ByteWriter,
    v: Vec3,
    options: &CodecOptions,
) -> CodecResult<()> {
    let codes = quantize_all_with(
        v,
        RELATIVE_POSITION_MIN,
        RELATIVE_POSITION_MAX,
        options.overflow,
    )?;
    write_codes(writer, codes);
    Ok(())
}

/// Reads a relative position written by [`write_relative_position`].
pub fn read_relative_position(reader: &mut ByteReader<'_>) -> CodecResult<Vec3> {
    let codes = read_codes(reader)?;
    Ok(codes.map(f32::from).into())
}

/// Encodes a relative position into 6 bytes.
///
/// Components outside `[-32768, 32767]` wrap around.
#[must_use]
pub fn encode_relative_position(v: Vec3) -> [u8; RELATIVE_POSITION_ENCODED_LEN] {
    let mut writer = ByteWriter::with_capacity(RELATIVE_POSITION_ENCODED_LEN);
    write_relative_position(&mut writer, v);
    fixed_bytes(&writer)
}

/// Encodes a relative position into 6 bytes under `options`.
pub fn encode_relative_position_with(
    v: Vec3,
    options: &CodecOptions,
) -> CodecResult<[u8; RELATIVE_POSITION_ENCODED_LEN]> {
    let mut writer = ByteWriter::with_capacity(RELATIVE_POSITION_ENCODED_LEN);
    write_relative_position_with(&mut writer, v, options)?;
    Ok(fixed_bytes(&writer))
}

/// Decodes a relative position from the first 6 bytes of `bytes`.
pub fn decode_relative_position(bytes: &[u8]) -> CodecResult<Vec3> {
    read_relative_position(&mut ByteReader::new(bytes))
}
