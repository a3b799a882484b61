//! Encoding and inspection tools for the tqc transform codec.
//!
//! This crate backs the `tqc-tools` binary:
//!
//! - Encode component values to hex for a chosen codec
//! - Decode hex back into values as JSON or plain text
//! - Report the round-trip error of a value through a codec
//!
//! # Design Principles
//!
//! - **Same code paths as production** - Every command goes through the
//!   public `codec` entry points, options included.
//! - **Human-readable output** - Make it easy to see what the codec is doing.

use std::fmt::Write as _;

use anyhow::{anyhow, bail, ensure, Context, Result};
use clap::ValueEnum;
use codec::{CodecOptions, OverflowPolicy, Quat, Vec3};
use serde::Serialize;
use tracing::debug;

/// The codec a command operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueKind {
    Vector,
    Quaternion,
    Velocity,
    RelativePosition,
}

impl ValueKind {
    /// Number of float components the value has.
    #[must_use]
    pub const fn component_count(self) -> usize {
        match self {
            Self::Quaternion => 4,
            Self::Vector | Self::Velocity | Self::RelativePosition => 3,
        }
    }

    /// Encoded size in bytes.
    #[must_use]
    pub const fn encoded_len(self) -> usize {
        match self {
            Self::Vector => codec::VECTOR_ENCODED_LEN,
            Self::Quaternion => codec::QUATERNION_ENCODED_LEN,
            Self::Velocity => codec::VELOCITY_ENCODED_LEN,
            Self::RelativePosition => codec::RELATIVE_POSITION_ENCODED_LEN,
        }
    }
}

/// A decoded value, serialized as its component object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DecodedComponents {
    Vector(Vec3),
    Quaternion(Quat),
}

impl DecodedComponents {
    /// Components in index order.
    #[must_use]
    pub fn to_vec(self) -> Vec<f32> {
        match self {
            Self::Vector(v) => v.to_array().to_vec(),
            Self::Quaternion(q) => q.to_array().to_vec(),
        }
    }
}

/// Output of a decode command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedValue {
    pub kind: ValueKind,
    pub hex: String,
    pub value: DecodedComponents,
}

/// Output of a roundtrip command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundtripReport {
    pub kind: ValueKind,
    pub hex: String,
    pub original: Vec<f32>,
    pub decoded: Vec<f32>,
    pub abs_error: Vec<f32>,
}

/// Builds codec options from the CLI policy flags.
#[must_use]
pub fn options_from_flags(strict: bool, saturate: bool) -> CodecOptions {
    if strict {
        CodecOptions::strict()
    } else if saturate {
        CodecOptions::saturating()
    } else {
        CodecOptions::wire_compatible()
    }
}

fn require_max_velocity(kind: ValueKind, max_velocity: Option<f32>) -> Result<f32> {
    max_velocity.ok_or_else(|| anyhow!("{kind:?} requires --max-velocity"))
}

fn vec3(components: &[f32]) -> Vec3 {
    Vec3::new(components[0], components[1], components[2])
}

/// Encodes `components` with the codec for `kind`.
pub fn encode_components(
    kind: ValueKind,
    components: &[f32],
    max_velocity: Option<f32>,
    options: &CodecOptions,
) -> Result<Vec<u8>> {
    ensure!(
        components.len() == kind.component_count(),
        "{kind:?} takes {} components, got {}",
        kind.component_count(),
        components.len()
    );

    let bytes = match kind {
        ValueKind::Vector => codec::encode_vector(vec3(components)).to_vec(),
        ValueKind::Quaternion => {
            let q = Quat::new(components[0], components[1], components[2], components[3]);
            codec::encode_quaternion_with(q, options)?.to_vec()
        }
        ValueKind::Velocity => {
            let max = require_max_velocity(kind, max_velocity)?;
            if options.overflow == OverflowPolicy::Reject {
                codec::validate_max_velocity(max)?;
            }
            codec::encode_velocity_with(vec3(components), max, options)?.to_vec()
        }
        ValueKind::RelativePosition => {
            codec::encode_relative_position_with(vec3(components), options)?.to_vec()
        }
    };
    debug!(?kind, len = bytes.len(), overflow = ?options.overflow, "encoded value");
    Ok(bytes)
}

/// Decodes `bytes` with the codec for `kind`.
pub fn decode_bytes(
    kind: ValueKind,
    bytes: &[u8],
    max_velocity: Option<f32>,
    options: &CodecOptions,
) -> Result<DecodedValue> {
    if bytes.len() > kind.encoded_len() {
        bail!(
            "{kind:?} is {} bytes, got {}",
            kind.encoded_len(),
            bytes.len()
        );
    }

    let value = match kind {
        ValueKind::Vector => DecodedComponents::Vector(codec::decode_vector(bytes)?),
        ValueKind::Quaternion => {
            DecodedComponents::Quaternion(codec::decode_quaternion_with(bytes, options)?)
        }
        ValueKind::Velocity => {
            let max = require_max_velocity(kind, max_velocity)?;
            DecodedComponents::Vector(codec::decode_velocity(bytes, max)?)
        }
        ValueKind::RelativePosition => {
            DecodedComponents::Vector(codec::decode_relative_position(bytes)?)
        }
    };
    debug!(?kind, len = bytes.len(), "decoded value");
    Ok(DecodedValue {
        kind,
        hex: hex::encode(bytes),
        value,
    })
}

/// Decodes a hex string with the codec for `kind`.
///
/// Whitespace in `input` is ignored.
pub fn decode_hex(
    kind: ValueKind,
    input: &str,
    max_velocity: Option<f32>,
    options: &CodecOptions,
) -> Result<DecodedValue> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = hex::decode(&cleaned).with_context(|| format!("parse hex {input:?}"))?;
    decode_bytes(kind, &bytes, max_velocity, options)
}

/// Encodes and decodes `components`, reporting the per-component error.
///
/// Quaternion errors are measured against the sign-aligned input, since the
/// codec always reconstructs the dominant component as non-negative.
pub fn roundtrip(
    kind: ValueKind,
    components: &[f32],
    max_velocity: Option<f32>,
    options: &CodecOptions,
) -> Result<RoundtripReport> {
    let bytes = encode_components(kind, components, max_velocity, options)?;
    let decoded = decode_bytes(kind, &bytes, max_velocity, options)?;

    let mut original = components.to_vec();
    if kind == ValueKind::Quaternion {
        let q = Quat::new(components[0], components[1], components[2], components[3]);
        let (_, positive) = codec::largest_component(q);
        if !positive {
            original.iter_mut().for_each(|c| *c = -*c);
        }
    }

    let decoded = decoded.value.to_vec();
    let abs_error = original
        .iter()
        .zip(&decoded)
        .map(|(want, got)| (got - want).abs())
        .collect();
    Ok(RoundtripReport {
        kind,
        hex: hex::encode(&bytes),
        original,
        decoded,
        abs_error,
    })
}

fn format_components(components: &[f32]) -> String {
    let parts: Vec<String> = components.iter().map(|c| format!("{c}")).collect();
    format!("({})", parts.join(", "))
}

/// Plain-text rendering of a decode result.
#[must_use]
pub fn format_decode_pretty(value: &DecodedValue) -> String {
    format!(
        "{:?} [{}] = {}",
        value.kind,
        value.hex,
        format_components(&value.value.to_vec())
    )
}

/// Plain-text rendering of a roundtrip report.
#[must_use]
pub fn format_roundtrip_pretty(report: &RoundtripReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "kind:     {:?}", report.kind);
    let _ = writeln!(out, "encoded:  {} ({} bytes)", report.hex, report.hex.len() / 2);
    let _ = writeln!(out, "original: {}", format_components(&report.original));
    let _ = writeln!(out, "decoded:  {}", format_components(&report.decoded));
    let _ = write!(out, "error:    {}", format_components(&report.abs_error));
    out
}
