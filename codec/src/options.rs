//! Options for the checked encode/decode entry points.

/// How a value that falls outside its quantization range is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Truncate and keep the low bits of the code. Matches existing encoders.
    #[default]
    Wrap,
    /// Clamp the code to the nearest representable value.
    Saturate,
    /// Report [`CodecError::ValueOutOfRange`](crate::CodecError::ValueOutOfRange).
    Reject,
}

/// Options for the `*_with` codec entry points.
///
/// The default options are wire-compatible: the `*_with` functions produce
/// exactly the bytes of their plain counterparts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodecOptions {
    /// Handling of out-of-range inputs during quantization.
    pub overflow: OverflowPolicy,
    /// Validate unit norm on quaternion encode and a non-negative radicand on
    /// quaternion decode.
    pub check_quaternion_domain: bool,
    /// Allowed `|norm - 1|` for quaternion inputs when domain checks are on.
    pub unit_tolerance: f32,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self::wire_compatible()
    }
}

impl CodecOptions {
    /// Options that reproduce the existing encoders bit for bit.
    #[must_use]
    pub const fn wire_compatible() -> Self {
        Self {
            overflow: OverflowPolicy::Wrap,
            check_quaternion_domain: false,
            unit_tolerance: 1e-3,
        }
    }

    /// Options that reject out-of-range values and malformed quaternions.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            overflow: OverflowPolicy::Reject,
            check_quaternion_domain: true,
            unit_tolerance: 1e-3,
        }
    }

    /// Options that clamp out-of-range values instead of wrapping.
    #[must_use]
    pub const fn saturating() -> Self {
        Self {
            overflow: OverflowPolicy::Saturate,
            check_quaternion_domain: false,
            unit_tolerance: 1e-3,
        }
    }

    /// Returns a copy with a different overflow policy.
    #[must_use]
    pub const fn overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}
