//! Error types for byte packing operations.

use std::fmt;

/// Result type for byte packing operations.
pub type PackResult<T> = Result<T, PackError>;

/// Errors that can occur while reading packed bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    /// Attempted to read past the end of the buffer.
    UnexpectedEof {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes but only {available} bytes available"
                )
            }
        }
    }
}

impl std::error::Error for PackError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_unexpected_eof() {
        let err = PackError::UnexpectedEof {
            requested: 4,
            available: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("4 bytes"), "should mention requested bytes");
        assert!(msg.contains("3 bytes"), "should mention available bytes");
        assert!(msg.contains("read"), "should mention read operation");
    }

    #[test]
    fn error_equality() {
        let err1 = PackError::UnexpectedEof {
            requested: 2,
            available: 1,
        };
        let err2 = PackError::UnexpectedEof {
            requested: 2,
            available: 1,
        };
        let err3 = PackError::UnexpectedEof {
            requested: 2,
            available: 0,
        };
        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync>() {}
        assert_error::<PackError>();
    }
}
