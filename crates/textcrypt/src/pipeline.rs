//! Block chunking, length framing and the base64 wire form.
//!
//! Wire layout: `blocks || tail_block || footer`, where every block is one
//! independently encrypted 16-byte unit, `tail_block` carries the
//! zero-padded final partial block (emitted even when the plaintext length
//! is a multiple of the block size), and the two footer bytes record the
//! original byte length as `(length / 16, length % 16)`. The whole sequence
//! is rendered as standard base64.

use aes_core::{decrypt_block, encrypt_block, expand_key, Block};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{Error, Result};
use crate::key::derive_key;

/// Block size of the underlying cipher in bytes.
pub const BLOCK_BYTES: usize = 16;

/// Footer bytes appended after the encrypted blocks.
const FOOTER_BYTES: usize = 2;

/// Longest plaintext the footer's one-byte block count can record.
pub const MAX_PLAINTEXT_BYTES: usize = 255 * BLOCK_BYTES;

/// Encrypts `text` under `passphrase` and renders the result as base64.
///
/// The key schedule is expanded once and reused for every block. Returns
/// [`Error::PlaintextTooLong`] when `text` exceeds
/// [`MAX_PLAINTEXT_BYTES`]; past that point the footer cannot record the
/// length and decryption would silently truncate.
pub fn encrypt(text: &str, passphrase: &str) -> Result<String> {
    let data = text.as_bytes();
    if data.len() > MAX_PLAINTEXT_BYTES {
        return Err(Error::PlaintextTooLong(data.len()));
    }

    let schedule = expand_key(&derive_key(passphrase));
    let full_blocks = data.len() / BLOCK_BYTES;
    let tail_len = data.len() % BLOCK_BYTES;

    let mut out = Vec::with_capacity((full_blocks + 1) * BLOCK_BYTES + FOOTER_BYTES);
    for chunk in data.chunks_exact(BLOCK_BYTES) {
        let block: Block = chunk.try_into().expect("chunk of one block");
        out.extend_from_slice(&encrypt_block(&block, &schedule));
    }

    let mut tail = [0u8; BLOCK_BYTES];
    tail[..tail_len].copy_from_slice(&data[full_blocks * BLOCK_BYTES..]);
    out.extend_from_slice(&encrypt_block(&tail, &schedule));

    out.push(full_blocks as u8);
    out.push(tail_len as u8);

    Ok(STANDARD.encode(out))
}

/// Decrypts base64 `ciphertext` produced by [`encrypt`] under `passphrase`.
///
/// Rejects ciphertext that fails base64 decoding, is shorter than one block
/// plus the footer, has a payload that is not whole blocks, or carries a
/// footer inconsistent with the payload. A wrong passphrase usually
/// surfaces as [`Error::Utf8`] once the garbage bytes fail validation.
pub fn decrypt(ciphertext: &str, passphrase: &str) -> Result<String> {
    let bytes = STANDARD.decode(ciphertext.trim())?;
    if bytes.len() < BLOCK_BYTES + FOOTER_BYTES {
        return Err(Error::Truncated(bytes.len()));
    }

    let (payload, footer) = bytes.split_at(bytes.len() - FOOTER_BYTES);
    if payload.len() % BLOCK_BYTES != 0 {
        return Err(Error::Misaligned(payload.len()));
    }
    if footer[1] as usize >= BLOCK_BYTES {
        return Err(Error::BadFooter(footer[1]));
    }
    let recorded = footer[0] as usize * BLOCK_BYTES + footer[1] as usize;
    if recorded > payload.len() {
        return Err(Error::LengthMismatch {
            recorded,
            available: payload.len(),
        });
    }

    let schedule = expand_key(&derive_key(passphrase));
    let mut plain = Vec::with_capacity(payload.len());
    for chunk in payload.chunks_exact(BLOCK_BYTES) {
        let block: Block = chunk.try_into().expect("chunk of one block");
        plain.extend_from_slice(&decrypt_block(&block, &schedule));
    }
    plain.truncate(recorded);

    Ok(String::from_utf8(plain)?)
}
