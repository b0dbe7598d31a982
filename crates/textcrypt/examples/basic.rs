//! Encrypts a short message, decrypts it back, and prints both forms.

use textcrypt::{decrypt, derive_key, encrypt};

fn main() {
    let passphrase = "correct horse battery staple";
    let message = "meet me at the usual place at nine";

    let key = derive_key(passphrase);
    println!("derived key bytes: {:?}", key.0);

    let ciphertext = encrypt(message, passphrase).expect("message is under the length cap");
    println!("ciphertext: {ciphertext}");

    let recovered = decrypt(&ciphertext, passphrase).expect("ciphertext round-trips");
    assert_eq!(recovered, message);
    println!("recovered: {recovered}");
}
