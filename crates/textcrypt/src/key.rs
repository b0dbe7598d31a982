//! Passphrase-to-key derivation.

use aes_core::Aes128Key;

/// Derives the 16-byte cipher key for a passphrase of any length.
///
/// The passphrase is hashed with MD5 and the key is built from the ASCII
/// value of every second character of the 32-character hex rendering, so
/// each key byte is one of `b'0'..=b'9'` or `b'a'..=b'f'`. The scheme
/// performs no key stretching; it is kept for wire compatibility, not
/// security.
pub fn derive_key(passphrase: &str) -> Aes128Key {
    let hash = md5_core::hex_digest(passphrase.as_bytes());
    let hex = hash.as_bytes();

    let mut key = [0u8; 16];
    for (i, byte) in key.iter_mut().enumerate() {
        *byte = hex[2 * i];
    }
    Aes128Key::from(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_every_second_hex_character() {
        // md5("secret") = 5ebe2294ecd0e0f08eab7690d2a6ee69
        assert_eq!(&derive_key("secret").0, b"5b29edef8a79dae6");
    }

    #[test]
    fn empty_passphrase_still_yields_a_full_key() {
        // md5("") = d41d8cd98f00b204e9800998ecf8427e
        assert_eq!(&derive_key("").0, b"d18d80b0e809ef47");
    }

    #[test]
    fn distinct_passphrases_derive_distinct_keys() {
        assert_ne!(derive_key("alpha").0, derive_key("beta").0);
    }
}
