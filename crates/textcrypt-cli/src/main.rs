//! Command-line interface for `textcrypt`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use textcrypt::{decrypt, derive_key, encrypt};

/// Password-based text encryption CLI.
#[derive(Parser)]
#[command(
    name = "textcrypt",
    version,
    author,
    about = "Encrypt UTF-8 text with a passphrase-derived AES-128 key"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text to a base64 ciphertext.
    Encrypt {
        /// Passphrase of any length; the cipher key is derived from its hash.
        #[arg(long, value_name = "PASSPHRASE")]
        key: String,
        /// Plaintext given inline.
        #[arg(long, conflicts_with = "input")]
        text: Option<String>,
        /// Read the plaintext from a file instead.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Write the ciphertext to a file instead of stdout.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Decrypt a base64 ciphertext back to text.
    Decrypt {
        /// Passphrase the ciphertext was encrypted under.
        #[arg(long, value_name = "PASSPHRASE")]
        key: String,
        /// Ciphertext given inline.
        #[arg(long, conflicts_with = "input")]
        text: Option<String>,
        /// Read the ciphertext from a file instead.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Write the plaintext to a file instead of stdout.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print the MD5 digest of text or a file as hex.
    Digest {
        /// Message given inline.
        #[arg(long, conflicts_with = "input")]
        text: Option<String>,
        /// Read the message bytes from a file instead.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Show the cipher key derived from a passphrase.
    Key {
        /// Passphrase to derive from.
        #[arg(long, value_name = "PASSPHRASE")]
        key: String,
    },
    /// Run a local demo: random passphrase and message, encrypt, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Encrypt {
            key,
            text,
            input,
            output,
        } => cmd_encrypt(&key, text, input.as_deref(), output.as_deref()),
        Commands::Decrypt {
            key,
            text,
            input,
            output,
        } => cmd_decrypt(&key, text, input.as_deref(), output.as_deref()),
        Commands::Digest { text, input } => cmd_digest(text, input.as_deref()),
        Commands::Key { key } => cmd_key(&key),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_encrypt(
    key: &str,
    text: Option<String>,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let plaintext = read_text(text, input)?;
    let ciphertext = encrypt(&plaintext, key).context("encrypt")?;
    write_text(output, &ciphertext)
}

fn cmd_decrypt(
    key: &str,
    text: Option<String>,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let ciphertext = read_text(text, input)?;
    let plaintext = decrypt(&ciphertext, key).context("decrypt")?;
    write_text(output, &plaintext)
}

fn cmd_digest(text: Option<String>, input: Option<&Path>) -> Result<()> {
    let message = match (text, input) {
        (Some(text), None) => text.into_bytes(),
        (None, Some(path)) => fs::read(path).with_context(|| format!("read {}", path.display()))?,
        _ => bail!("provide exactly one of --text or --input"),
    };
    println!("{}", md5_core::hex_digest(&message));
    Ok(())
}

fn cmd_key(key: &str) -> Result<()> {
    println!("{}", hex::encode(derive_key(key).0));
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);

    let mut passphrase_bytes = [0u8; 8];
    rng.fill_bytes(&mut passphrase_bytes);
    let passphrase = hex::encode(passphrase_bytes);

    let mut message_bytes = [0u8; 24];
    rng.fill_bytes(&mut message_bytes);
    let message = hex::encode(message_bytes);

    let ciphertext = encrypt(&message, &passphrase)?;
    let recovered = decrypt(&ciphertext, &passphrase)?;

    println!("demo passphrase: {passphrase}");
    println!("derived key: {}", hex::encode(derive_key(&passphrase).0));
    println!("plaintext: {message}");
    println!("ciphertext: {ciphertext}");
    println!("decrypted: {recovered}");
    if recovered != message {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn read_text(text: Option<String>, input: Option<&Path>) -> Result<String> {
    match (text, input) {
        (Some(text), None) => Ok(text),
        (None, Some(path)) => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
        }
        _ => bail!("provide exactly one of --text or --input"),
    }
}

fn write_text(output: Option<&Path>, contents: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, contents).with_context(|| format!("write {}", path.display())),
        None => {
            println!("{contents}");
            Ok(())
        }
    }
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
