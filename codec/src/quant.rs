//! Quantization primitives.
//!
//! Every quantizer maps `value` in `[min, max]` linearly onto the code range of
//! its integer width and then **truncates toward zero**. Truncation (rather
//! than rounding) is part of the wire format and must not change.
//!
//! Narrowing goes through one truncating cast per width ([`truncate_to_u8`],
//! [`truncate_to_u16`], [`truncate_to_i16`]). Out-of-range inputs are not
//! clamped: the cast keeps the low bits of the truncated value, so a code that
//! does not fit wraps around modulo 2^8 or 2^16. Use the `*_with` variants and
//! an [`OverflowPolicy`] to saturate or reject instead.

use std::f64::consts::FRAC_1_SQRT_2;

use crate::error::{CodecError, CodecResult};
use crate::options::OverflowPolicy;

/// Code range of an 8-bit unsigned quantizer (`u8::MAX`).
pub const U8_RANGE: f64 = u8::MAX as f64;

/// Code range of a 16-bit quantizer (`u16::MAX`), unsigned or signed.
pub const U16_RANGE: f64 = u16::MAX as f64;

/// Offset that shifts `[0, U16_RANGE]` onto `[i16::MIN, i16::MAX]`.
pub const I16_OFFSET: f64 = i16::MIN as f64;

/// Largest magnitude of a non-dominant component of a unit quaternion.
///
/// If `|c|` is the largest of four components with `x² + y² + z² + w² = 1`,
/// any other component `a` satisfies `2a² <= a² + c² <= 1`, so `|a| <= 1/√2`.
pub const QUATERNION_COMPONENT_MAX: f64 = FRAC_1_SQRT_2;

/// Code that `QUATERNION_COMPONENT_MAX` maps to (`i16::MAX`).
pub const QUATERNION_SCALE: f64 = i16::MAX as f64;

/// Truncates toward zero and keeps the low 8 bits.
///
/// Values beyond the `i64` range saturate there first; NaN becomes 0.
#[must_use]
pub fn truncate_to_u8(value: f64) -> u8 {
    (value as i64) as u8
}

/// Truncates toward zero and keeps the low 16 bits.
///
/// Values beyond the `i64` range saturate there first; NaN becomes 0.
#[must_use]
pub fn truncate_to_u16(value: f64) -> u16 {
    (value as i64) as u16
}

/// Truncates toward zero and keeps the low 16 bits as two's complement.
///
/// Values beyond the `i64` range saturate there first; NaN becomes 0.
/// `32768.9` becomes `-32768`; `-32769.5` becomes `32767`.
#[must_use]
pub fn truncate_to_i16(value: f64) -> i16 {
    (value as i64) as i16
}

/// Truncates toward zero, clamping to `[i16::MIN, i16::MAX]`. NaN becomes 0.
#[must_use]
pub fn saturate_to_i16(value: f64) -> i16 {
    value as i16
}

#[inline]
fn normalize(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min)
}

/// Quantizes `value` in `[min, max]` to `[0, 255]`.
#[must_use]
pub fn quantize_to_u8(value: f64, min: f64, max: f64) -> u8 {
    truncate_to_u8(normalize(value, min, max) * U8_RANGE)
}

/// Quantizes `value` in `[min, max]` to `[0, 65535]`.
#[must_use]
pub fn quantize_to_u16(value: f64, min: f64, max: f64) -> u16 {
    truncate_to_u16(normalize(value, min, max) * U16_RANGE)
}

/// Quantizes `value` in `[min, max]` to `[-32768, 32767]`.
///
/// The offset is added before truncating, so codes below zero round toward
/// zero: with `[-10, 10]`, `-4.0` maps to `-13107.5` and then to `-13107`.
#[must_use]
pub fn quantize_to_i16(value: f64, min: f64, max: f64) -> i16 {
    truncate_to_i16(scale_to_i16(value, min, max))
}

#[inline]
fn scale_to_i16(value: f64, min: f64, max: f64) -> f64 {
    normalize(value, min, max) * U16_RANGE + I16_OFFSET
}

/// Quantizes `value` in `[min, max]` to `[-32768, 32767]` under `policy`.
///
/// [`OverflowPolicy::Reject`] additionally requires a finite, non-empty range.
pub fn quantize_to_i16_with(
    value: f64,
    min: f64,
    max: f64,
    policy: OverflowPolicy,
) -> CodecResult<i16> {
    let scaled = scale_to_i16(value, min, max);
    match policy {
        OverflowPolicy::Wrap => Ok(truncate_to_i16(scaled)),
        OverflowPolicy::Saturate => Ok(saturate_to_i16(scaled)),
        OverflowPolicy::Reject => {
            validate_range(min, max)?;
            if !(min..=max).contains(&value) {
                return Err(CodecError::ValueOutOfRange { value, min, max });
            }
            Ok(truncate_to_i16(scaled))
        }
    }
}

/// Checks that `[min, max]` is finite and non-empty.
pub fn validate_range(min: f64, max: f64) -> CodecResult<()> {
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        Err(CodecError::InvalidRange { min, max })
    }
}

/// Inverse of [`quantize_to_u8`], up to one quantization step.
#[must_use]
pub fn dequantize_u8(code: u8, min: f64, max: f64) -> f64 {
    min + f64::from(code) / U8_RANGE * (max - min)
}

/// Inverse of [`quantize_to_u16`], up to one quantization step.
#[must_use]
pub fn dequantize_u16(code: u16, min: f64, max: f64) -> f64 {
    min + f64::from(code) / U16_RANGE * (max - min)
}

/// Inverse of [`quantize_to_i16`], up to one quantization step.
#[must_use]
pub fn dequantize_i16(code: i16, min: f64, max: f64) -> f64 {
    min + (f64::from(code) - I16_OFFSET) / U16_RANGE * (max - min)
}

/// Quantizes a non-dominant unit-quaternion component in
/// `[-1/√2, 1/√2]` to `[-32767, 32767]`.
#[must_use]
pub fn quantize_quaternion_component(value: f64) -> i16 {
    truncate_to_i16(value / QUATERNION_COMPONENT_MAX * QUATERNION_SCALE)
}

/// Quantizes a quaternion component under `policy`.
///
/// [`OverflowPolicy::Reject`] reports components whose code does not fit in
/// an `i16`, i.e. exactly the inputs that [`OverflowPolicy::Wrap`] would wrap.
pub fn quantize_quaternion_component_with(value: f64, policy: OverflowPolicy) -> CodecResult<i16> {
    let scaled = value / QUATERNION_COMPONENT_MAX * QUATERNION_SCALE;
    match policy {
        OverflowPolicy::Wrap => Ok(truncate_to_i16(scaled)),
        OverflowPolicy::Saturate => Ok(saturate_to_i16(scaled)),
        OverflowPolicy::Reject => {
            let code = scaled.trunc();
            if code.is_nan() || code < f64::from(i16::MIN) || code > f64::from(i16::MAX) {
                return Err(CodecError::ValueOutOfRange {
                    value,
                    min: -QUATERNION_COMPONENT_MAX,
                    max: QUATERNION_COMPONENT_MAX,
                });
            }
            Ok(truncate_to_i16(scaled))
        }
    }
}

/// Inverse of [`quantize_quaternion_component`].
#[must_use]
pub fn dequantize_quaternion_component(code: i16) -> f64 {
    f64::from(code) * QUATERNION_COMPONENT_MAX / QUATERNION_SCALE
}
