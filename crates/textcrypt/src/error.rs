//! Error type for the text encryption pipeline.
//!
//! The block and digest engines underneath are total functions; every
//! failure mode lives at this framing layer.

use thiserror::Error;

/// Errors produced while framing, encoding or decoding ciphertext.
#[derive(Debug, Error)]
pub enum Error {
    /// The plaintext exceeds what the one-byte block count can record.
    #[error("plaintext is {0} bytes; the length footer caps messages at 4080 bytes")]
    PlaintextTooLong(usize),
    /// The ciphertext is not valid base64.
    #[error("ciphertext is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The decoded ciphertext is shorter than one block plus the footer.
    #[error("ciphertext is {0} bytes; expected at least one block and a two-byte footer")]
    Truncated(usize),
    /// The decoded payload is not a whole number of blocks.
    #[error("ciphertext payload of {0} bytes is not a multiple of the block size")]
    Misaligned(usize),
    /// The footer's tail byte is not a valid remainder of the block size.
    #[error("footer tail byte {0} is not below the block size")]
    BadFooter(u8),
    /// The footer records more plaintext bytes than the payload holds.
    #[error("footer records {recorded} plaintext bytes but the payload holds {available}")]
    LengthMismatch {
        /// Byte count recovered from the footer.
        recorded: usize,
        /// Payload capacity in bytes.
        available: usize,
    },
    /// The decrypted bytes are not valid UTF-8, usually a wrong passphrase.
    #[error("decrypted bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
