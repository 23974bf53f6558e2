//! Error types for Rocca-S operations.

use thiserror::Error;

/// Result type alias for Rocca-S operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during Rocca-S operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid key length (must be 32 bytes).
    #[error("invalid key length: {len} bytes (must be 32 bytes)")]
    InvalidKeyLength {
        /// Length of the key that was supplied.
        len: usize,
    },

    /// Invalid nonce length (must be 16 bytes).
    #[error("invalid nonce length: {len} bytes (must be 16 bytes)")]
    InvalidNonceLength {
        /// Length of the nonce that was supplied.
        len: usize,
    },

    /// Ciphertext shorter than the authentication tag.
    #[error("ciphertext too short: {len} bytes (must be at least 32 bytes)")]
    CiphertextTooShort {
        /// Length of the ciphertext that was supplied.
        len: usize,
    },

    /// Output buffer does not have the length the operation produces.
    #[error("invalid output buffer length: {actual} bytes (must be {expected} bytes)")]
    InvalidOutputLength {
        /// Length the output buffer must have.
        expected: usize,
        /// Length of the output buffer that was supplied.
        actual: usize,
    },

    /// Authentication tag verification failed.
    #[error("authentication tag verification failed")]
    AuthenticationFailed,

    /// The CPU provides no supported AES instructions.
    #[error("no hardware AES acceleration available on this platform")]
    UnsupportedPlatform,
}

impl Error {
    /// Returns `true` for errors caused by a buffer of the wrong length.
    ///
    /// These are raised before any processing happens, so output buffers are left
    /// untouched.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidKeyLength { .. }
                | Error::InvalidNonceLength { .. }
                | Error::CiphertextTooShort { .. }
                | Error::InvalidOutputLength { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::InvalidKeyLength { len: 31 }.to_string(),
            "invalid key length: 31 bytes (must be 32 bytes)"
        );
        assert_eq!(
            Error::InvalidOutputLength {
                expected: 40,
                actual: 39
            }
            .to_string(),
            "invalid output buffer length: 39 bytes (must be 40 bytes)"
        );
        assert_eq!(
            Error::AuthenticationFailed.to_string(),
            "authentication tag verification failed"
        );
    }

    #[test]
    fn test_error_categories() {
        assert!(Error::InvalidKeyLength { len: 0 }.is_invalid_argument());
        assert!(Error::InvalidNonceLength { len: 17 }.is_invalid_argument());
        assert!(Error::CiphertextTooShort { len: 31 }.is_invalid_argument());
        assert!(Error::InvalidOutputLength {
            expected: 1,
            actual: 0
        }
        .is_invalid_argument());
        assert!(!Error::AuthenticationFailed.is_invalid_argument());
        assert!(!Error::UnsupportedPlatform.is_invalid_argument());
    }
}
