// RSA Decryption Implementation
// Raw modular exponentiation with the private exponent, then unpadding

use super::bigint::{from_bytes, mod_pow, to_bytes_fixed};
use super::error::{Result, RsaError};
use super::keygen::PrivateKey;
use super::padding::unpad_pkcs1_v15;

/// Decrypt ciphertext bytes using RSA private key
/// Returns the original message bytes
pub fn decrypt(private_key: &PrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
    // Validate ciphertext size
    let key_len = private_key.key_len();
    if ciphertext.len() != key_len {
        return Err(RsaError::CiphertextLengthMismatch {
            expected: key_len,
            actual: ciphertext.len(),
        });
    }

    // m = c^d mod n
    let c = from_bytes(ciphertext);
    let m = mod_pow(&c, private_key.d(), private_key.n());

    let block = to_bytes_fixed(&m, key_len).ok_or(RsaError::IntegerTooWide { width: key_len })?;

    Ok(unpad_pkcs1_v15(&block)?.to_vec())
}

/// Decrypt ciphertext to a string
pub fn decrypt_to_string(private_key: &PrivateKey, ciphertext: &[u8]) -> Result<String> {
    let plaintext = decrypt(private_key, ciphertext)?;
    Ok(String::from_utf8(plaintext)?)
}
