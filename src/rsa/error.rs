// RSA Error Types
// Every failure the key generator and codec can report

use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors returned by key generation, encryption and decryption
#[derive(Debug, Error)]
pub enum RsaError {
    /// Requested size is odd or too small to be meaningful
    #[error("invalid bit length: {bits}")]
    InvalidBitLength { bits: u32 },

    /// Prime/inverse retries ran past the configured bound
    #[error("key generation failed after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },

    /// The random source could not produce bytes
    #[error("entropy unavailable: {0}")]
    EntropyUnavailable(#[from] rand::Error),

    /// Message does not fit a block of the key's size
    #[error("message too long: {len} bytes, at most {max} allowed")]
    MessageTooLong { len: usize, max: usize },

    /// Ciphertext is not exactly as long as the modulus
    #[error("ciphertext length mismatch: expected {expected} bytes, got {actual}")]
    CiphertextLengthMismatch { expected: usize, actual: usize },

    /// Decrypted block does not start with 0x00 0x02
    #[error("invalid padding")]
    PaddingSignatureInvalid,

    /// No 0x00 byte after the random padding
    #[error("invalid padding: terminator not found")]
    PaddingTerminatorMissing,

    /// An integer needs more bytes than the fixed width allows
    #[error("integer does not fit in {width} bytes")]
    IntegerTooWide { width: usize },

    /// String decryption produced bytes that are not UTF-8
    #[error("decrypted message is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

/// Result type for RSA operations
pub type Result<T> = std::result::Result<T, RsaError>;
