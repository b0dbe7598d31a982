//! MD5 message digest implemented from RFC 1321.
//!
//! MD5 is not collision resistant and must not guard integrity or
//! authenticity. It is provided here because the text-encryption pipeline
//! derives its cipher key from a passphrase hash, where only the fixed
//! 128-bit output size matters.
//!
//! Input of any byte length, including empty, is valid; the digest is a
//! total function with no error surface.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compress;

use crate::compress::{transform, INIT};

/// Bytes per compression chunk (512 bits).
const CHUNK_BYTES: usize = 64;

/// Offset within a final chunk where the encoded bit length begins.
const LENGTH_OFFSET: usize = 56;

/// Computes the MD5 digest of `message` as 16 raw bytes.
///
/// The four state words are serialized little-endian, matching the standard
/// rendering.
pub fn digest(message: &[u8]) -> [u8; 16] {
    let mut state = INIT;

    let mut chunks = message.chunks_exact(CHUNK_BYTES);
    for chunk in &mut chunks {
        let block = chunk.try_into().expect("chunk of 64 bytes");
        transform(&mut state, block);
    }
    for block in final_chunks(chunks.remainder(), message.len()) {
        transform(&mut state, &block);
    }

    let mut out = [0u8; 16];
    for (bytes, word) in out.chunks_exact_mut(4).zip(state.iter()) {
        bytes.copy_from_slice(&word.to_le_bytes());
    }
    out
}

/// Computes the MD5 digest of `message` as 32 lowercase hex characters.
pub fn hex_digest(message: &[u8]) -> String {
    hex::encode(digest(message))
}

/// Builds the one or two padded chunks that terminate the message.
///
/// A single set bit (0x80) follows the remaining data, then zeros up to the
/// 64-bit little-endian bit length. When fewer than eight bytes remain after
/// the marker, the length spills into a second all-zero chunk.
fn final_chunks(rest: &[u8], message_len: usize) -> Vec<[u8; CHUNK_BYTES]> {
    let bit_length = (message_len as u64).wrapping_mul(8).to_le_bytes();

    let mut first = [0u8; CHUNK_BYTES];
    first[..rest.len()].copy_from_slice(rest);
    first[rest.len()] = 0x80;

    if rest.len() < LENGTH_OFFSET {
        first[LENGTH_OFFSET..].copy_from_slice(&bit_length);
        vec![first]
    } else {
        let mut second = [0u8; CHUNK_BYTES];
        second[LENGTH_OFFSET..].copy_from_slice(&bit_length);
        vec![first, second]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc_1321_test_suite() {
        assert_eq!(hex_digest(b""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(hex_digest(b"a"), "0cc175b9c0f1b6a831c399e269772661");
        assert_eq!(hex_digest(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(hex_digest(b"message digest"), "f96b697d7cb7938d525a2f31aaf161d0");
        assert_eq!(
            hex_digest(b"abcdefghijklmnopqrstuvwxyz"),
            "c3fcd3d76192e4007dfb496cca67e13b"
        );
        assert_eq!(
            hex_digest(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789"),
            "d174ab98d277d9f5a5611c2c9f419d9f"
        );
        assert_eq!(
            hex_digest(
                b"12345678901234567890123456789012345678901234567890123456789012345678901234567890"
            ),
            "57edf4a22be3c955ac49da2e2107b67a"
        );
    }

    // Lengths around the 56-byte threshold exercise both final-chunk
    // shapes: 55 fits marker and length in one chunk, 56 and 57 push the
    // length into a second chunk, 64 leaves an empty remainder.
    #[test]
    fn padding_branches_match_reference_digests() {
        let cases: [(usize, &str); 8] = [
            (55, "ef1772b6dff9a122358552954ad0df65"),
            (56, "3b0c8ac703f828b04c6c197006d17218"),
            (57, "652b906d60af96844ebd21b674f35e93"),
            (63, "b06521f39153d618550606be297466d5"),
            (64, "014842d480b571495a4a0363793f7367"),
            (65, "c743a45e0d2e6a95cb859adae0248435"),
            (119, "8a7bd0732ed6a28ce75f6dabc90e1613"),
            (128, "e510683b3f5ffe4093d021808bc6ff70"),
        ];
        for (len, expected) in cases {
            assert_eq!(hex_digest(&vec![b'a'; len]), expected, "length {len}");
        }
    }

    #[test]
    fn digest_bytes_round_trip_through_hex() {
        let raw = digest(b"abc");
        assert_eq!(hex::encode(raw), hex_digest(b"abc"));
        assert_eq!(raw.len(), 16);
    }

    #[test]
    fn digest_is_deterministic() {
        let message = b"the same input hashes the same way";
        assert_eq!(digest(message), digest(message));
    }
}
