// RSA Encryption Implementation
// Implements RSA encryption with PKCS#1 v1.5 padding

use super::bigint::{from_bytes, mod_pow, to_bytes_fixed};
use super::entropy::{os_entropy, EntropySource};
use super::error::{Result, RsaError};
use super::keygen::PublicKey;
use super::padding::pad_pkcs1_v15;

/// Encrypt bytes using RSA public key, padding with OS randomness.
/// Returns exactly `key_len()` bytes of ciphertext.
pub fn encrypt(public_key: &PublicKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    encrypt_with(public_key, plaintext, &mut os_entropy())
}

/// Encrypt bytes, drawing padding from `source`
pub fn encrypt_with<E: EntropySource + ?Sized>(
    public_key: &PublicKey,
    plaintext: &[u8],
    source: &mut E,
) -> Result<Vec<u8>> {
    let key_len = public_key.key_len();

    // Apply PKCS#1 v1.5 padding
    let block = pad_pkcs1_v15(plaintext, key_len, source)?;

    // Compute c = m^e mod n
    let m = from_bytes(&block);
    let c = mod_pow(&m, public_key.e(), public_key.n());

    to_bytes_fixed(&c, key_len).ok_or(RsaError::IntegerTooWide { width: key_len })
}

/// Encrypt a string using RSA public key
pub fn encrypt_string(public_key: &PublicKey, plaintext: &str) -> Result<Vec<u8>> {
    encrypt(public_key, plaintext.as_bytes())
}
