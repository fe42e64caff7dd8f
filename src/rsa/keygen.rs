// RSA Key Generation
// Produces matched public/private key pairs from two random primes

use log::{debug, warn};

use super::bigint::{bit_length, byte_length, from_u64, mod_inverse, RsaBigInt};
use super::entropy::{os_entropy, EntropySource};
use super::error::{Result, RsaError};
use super::padding::PKCS1_OVERHEAD;

/// Fixed public exponent
pub const PUBLIC_EXPONENT: u64 = 65537;

/// Smallest modulus size accepted by the generator
pub const MIN_BIT_LENGTH: u32 = 512;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    n: RsaBigInt, // Modulus
    e: RsaBigInt, // Public exponent
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    n: RsaBigInt, // Modulus (same value as the public key's)
    d: RsaBigInt, // Private exponent
}

impl PublicKey {
    pub fn new(n: RsaBigInt, e: RsaBigInt) -> Self {
        Self { n, e }
    }

    pub fn n(&self) -> &RsaBigInt {
        &self.n
    }

    pub fn e(&self) -> &RsaBigInt {
        &self.e
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        bit_length(&self.n)
    }

    /// Modulus size in bytes; also the ciphertext size
    pub fn key_len(&self) -> usize {
        byte_length(&self.n)
    }

    /// Longest message [`encrypt`](Self::encrypt) accepts
    pub fn max_message_len(&self) -> usize {
        self.key_len().saturating_sub(PKCS1_OVERHEAD)
    }

    /// Encrypt a message using this public key
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        super::encrypt::encrypt(self, plaintext)
    }
}

impl PrivateKey {
    pub fn new(n: RsaBigInt, d: RsaBigInt) -> Self {
        Self { n, d }
    }

    pub fn n(&self) -> &RsaBigInt {
        &self.n
    }

    pub fn d(&self) -> &RsaBigInt {
        &self.d
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        bit_length(&self.n)
    }

    pub fn key_len(&self) -> usize {
        byte_length(&self.n)
    }

    /// Decrypt a ciphertext using this private key
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        super::decrypt::decrypt(self, ciphertext)
    }
}

/// Key generation settings
#[derive(Clone, Debug)]
pub struct KeyGenConfig {
    pub bit_length: u32,
    /// Attempts (prime pairs drawn) before giving up
    pub max_attempts: u32,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            bit_length: 2048,
            max_attempts: 10,
        }
    }
}

impl KeyGenConfig {
    pub fn with_bit_length(mut self, bits: u32) -> Self {
        self.bit_length = bits;
        self
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }
}

/// Generate an RSA key pair whose modulus has exactly `bit_length` bits,
/// drawing primes from the OS entropy source
pub fn generate_keys(bit_length: u32) -> Result<(PublicKey, PrivateKey)> {
    let config = KeyGenConfig::default().with_bit_length(bit_length);
    generate_keys_with(&config, &mut os_entropy())
}

/// Generate an RSA key pair with explicit settings and prime supply.
///
/// Each attempt draws fresh `p` and `q`. An attempt is discarded when
/// `p == q`, when `p * q` misses the requested length, or when `e` has no
/// inverse modulo `(p-1)(q-1)`.
pub fn generate_keys_with<E: EntropySource + ?Sized>(
    config: &KeyGenConfig,
    source: &mut E,
) -> Result<(PublicKey, PrivateKey)> {
    let bits = config.bit_length;
    if bits < MIN_BIT_LENGTH || bits % 2 != 0 {
        return Err(RsaError::InvalidBitLength { bits });
    }

    let e = from_u64(PUBLIC_EXPONENT);
    let half_bits = bits / 2;

    for attempt in 1..=config.max_attempts {
        let p = source.random_prime(half_bits)?;
        let q = source.random_prime(half_bits)?;

        if p == q {
            debug!("attempt {}: p == q, retrying", attempt);
            continue;
        }

        let n = &p * &q;
        if bit_length(&n) != bits as u64 {
            debug!(
                "attempt {}: modulus has {} bits, wanted {}",
                attempt,
                bit_length(&n),
                bits
            );
            continue;
        }

        // φ(n) = (p-1)(q-1)
        let phi_n = (p - 1u8) * (q - 1u8);

        let d = match mod_inverse(&e, &phi_n) {
            Some(d) => d,
            None => {
                debug!("attempt {}: e shares a factor with phi(n), retrying", attempt);
                continue;
            }
        };

        debug!("generated {}-bit key pair after {} attempt(s)", bits, attempt);
        return Ok((PublicKey::new(n.clone(), e), PrivateKey::new(n, d)));
    }

    warn!(
        "key generation gave up after {} attempts",
        config.max_attempts
    );
    Err(RsaError::GenerationExhausted {
        attempts: config.max_attempts,
    })
}
