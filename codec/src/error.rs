//! Error types for codec operations.

use std::fmt;

use packing::PackError;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding transform values.
///
/// The wire-compatible entry points only ever report [`BufferTooShort`] and
/// [`InvalidQuaternionDomain`] with [`DomainReason::InvalidComponentIndex`];
/// the remaining kinds come from the option-taking entry points.
///
/// [`BufferTooShort`]: CodecError::BufferTooShort
/// [`InvalidQuaternionDomain`]: CodecError::InvalidQuaternionDomain
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CodecError {
    /// Input buffer is shorter than the encoded layout.
    BufferTooShort { needed: usize, available: usize },

    /// Input value lies outside the declared quantization range.
    ValueOutOfRange { value: f64, min: f64, max: f64 },

    /// Quantization range is empty or not finite.
    InvalidRange { min: f64, max: f64 },

    /// Quaternion input or encoding cannot describe a unit quaternion.
    InvalidQuaternionDomain(DomainReason),
}

/// Details for quaternion domain errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainReason {
    /// The omitted-component index byte is not in `0..=3`.
    InvalidComponentIndex { index: u8 },
    /// The three transmitted components leave no room for the omitted one.
    NegativeRadicand { radicand: f64 },
    /// The input quaternion is not of unit length.
    NotUnit { norm: f32 },
    /// The input quaternion has a NaN or infinite component.
    NonFinite,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooShort { needed, available } => {
                write!(f, "buffer too short: need {needed} bytes, have {available}")
            }
            Self::ValueOutOfRange { value, min, max } => {
                write!(f, "value {value} outside quantization range [{min}, {max}]")
            }
            Self::InvalidRange { min, max } => {
                write!(f, "invalid quantization range [{min}, {max}]")
            }
            Self::InvalidQuaternionDomain(reason) => {
                write!(f, "invalid quaternion: {reason}")
            }
        }
    }
}

impl fmt::Display for DomainReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidComponentIndex { index } => {
                write!(f, "component index {index} is not in 0..=3")
            }
            Self::NegativeRadicand { radicand } => {
                write!(f, "omitted component radicand {radicand} is negative")
            }
            Self::NotUnit { norm } => write!(f, "norm {norm} is not 1"),
            Self::NonFinite => write!(f, "component is not finite"),
        }
    }
}

impl std::error::Error for CodecError {}

impl From<PackError> for CodecError {
    fn from(err: PackError) -> Self {
        match err {
            PackError::UnexpectedEof {
                requested,
                available,
            } => Self::BufferTooShort {
                needed: requested,
                available,
            },
        }
    }
}

impl From<DomainReason> for CodecError {
    fn from(reason: DomainReason) -> Self {
        Self::InvalidQuaternionDomain(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_buffer_too_short() {
        let err = CodecError::BufferTooShort {
            needed: 7,
            available: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("need 7"));
        assert!(msg.contains("have 3"));
    }

    #[test]
    fn error_display_value_out_of_range() {
        let err = CodecError::ValueOutOfRange {
            value: 12.5,
            min: -10.0,
            max: 10.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("12.5"));
        assert!(msg.contains("[-10, 10]"));
    }

    #[test]
    fn error_display_domain() {
        let err = CodecError::from(DomainReason::InvalidComponentIndex { index: 9 });
        let msg = err.to_string();
        assert!(msg.contains("quaternion"));
        assert!(msg.contains('9'));
    }

    #[test]
    fn pack_error_maps_to_buffer_too_short() {
        let err = CodecError::from(PackError::UnexpectedEof {
            requested: 12,
            available: 5,
        });
        assert_eq!(
            err,
            CodecError::BufferTooShort {
                needed: 12,
                available: 5
            }
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<CodecError>();
    }
}
