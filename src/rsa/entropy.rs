// Entropy Source
// Random bytes and random primes for key generation and padding

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use super::bigint::RsaBigInt;
use super::error::Result;
use super::prime;

/// Supplier of cryptographically secure randomness.
///
/// Implementations must be usable from any thread that owns them; the
/// default source, [`os_entropy`], is stateless and can be created freely.
pub trait EntropySource {
    /// Fill `dest` with random bytes, or fail with
    /// [`RsaError::EntropyUnavailable`](super::error::RsaError::EntropyUnavailable).
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()>;

    /// A probable prime of exactly `bits` bits with the top bit set.
    fn random_prime(&mut self, bits: u32) -> Result<RsaBigInt> {
        prime::random_prime(self, bits, prime::DEFAULT_ROUNDS)
    }
}

/// Adapter turning any `rand` CSPRNG into an [`EntropySource`]
#[derive(Debug, Clone, Default)]
pub struct RandEntropy<R> {
    rng: R,
}

impl<R: RngCore + CryptoRng> RandEntropy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore + CryptoRng> EntropySource for RandEntropy<R> {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        self.rng.try_fill_bytes(dest)?;
        Ok(())
    }
}

/// The operating system's entropy pool
pub type OsEntropy = RandEntropy<OsRng>;

/// Handle to the process-wide OS entropy source
pub fn os_entropy() -> OsEntropy {
    RandEntropy::new(OsRng)
}

/// Draw a single byte in 0x01..=0xFF, resampling zeros
pub fn random_nonzero_byte<E: EntropySource + ?Sized>(source: &mut E) -> Result<u8> {
    let mut byte = [0u8; 1];
    loop {
        source.fill_bytes(&mut byte)?;
        if byte[0] != 0x00 {
            return Ok(byte[0]);
        }
    }
}
