//! Textbook RSA: key generation and PKCS#1 v1.5 encryption on top of
//! `num-bigint`.
//!
//! ```no_run
//! let (public, private) = textbook_rsa::generate_keys(2048)?;
//! let ciphertext = public.encrypt(b"attack at dawn")?;
//! assert_eq!(private.decrypt(&ciphertext)?, b"attack at dawn");
//! # Ok::<(), textbook_rsa::RsaError>(())
//! ```
//!
//! Padding validation is not constant-time. Do not expose decryption
//! errors to untrusted parties.

pub mod rsa;

pub use self::rsa::{
    decrypt, decrypt_to_string, encrypt, encrypt_string, encrypt_with, generate_keys,
    generate_keys_with, os_entropy, EntropySource, KeyGenConfig, PrivateKey, PublicKey, Result,
    RsaError, PUBLIC_EXPONENT,
};
