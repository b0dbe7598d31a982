//! Password-based text encryption.
//!
//! A passphrase of any length is hashed down to a 16-byte cipher key, the
//! UTF-8 plaintext is split into 16-byte blocks that are each encrypted
//! independently under that key, and the result is framed with a two-byte
//! length footer and rendered as base64.
//!
//! The construction is unauthenticated and unchained: equal plaintext
//! blocks under the same passphrase produce equal ciphertext blocks, and
//! nothing detects tampering beyond the UTF-8 check on decryption. Treat it
//! as an obfuscation format with a fixed wire layout, not as a modern AEAD.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod key;
mod pipeline;

pub use aes_core::Aes128Key;
pub use crate::error::{Error, Result};
pub use crate::key::derive_key;
pub use crate::pipeline::{decrypt, encrypt, BLOCK_BYTES, MAX_PLAINTEXT_BYTES};
