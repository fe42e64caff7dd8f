use anyhow::{bail, Context, Result};
use log::info;

use textbook_rsa::{decrypt_to_string, encrypt_string, generate_keys};

const DEFAULT_KEY_SIZE: u32 = 2048;
const DEFAULT_MESSAGE: &str = "My name is Alex and I'm a sausage.";

fn main() -> Result<()> {
    env_logger::init();

    // Usage: textbook-rsa [BITS] [MESSAGE]
    let mut args = std::env::args().skip(1);
    let bits = match args.next() {
        Some(arg) => arg
            .parse::<u32>()
            .with_context(|| format!("invalid key size: {}", arg))?,
        None => DEFAULT_KEY_SIZE,
    };
    let message = args.next().unwrap_or_else(|| DEFAULT_MESSAGE.to_string());
    if args.next().is_some() {
        bail!("usage: textbook-rsa [BITS] [MESSAGE]");
    }

    info!("generating {}-bit key pair", bits);
    let (public, private) = generate_keys(bits).context("key generation failed")?;

    println!("{}", message);

    let ciphertext = encrypt_string(&public, &message).context("encryption failed")?;
    println!("{}", hex::encode(&ciphertext));

    let plaintext = decrypt_to_string(&private, &ciphertext).context("decryption failed")?;
    println!("{}", plaintext);

    Ok(())
}
