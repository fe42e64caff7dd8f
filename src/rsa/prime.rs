// Probable Prime Generation
// Miller-Rabin over candidates drawn from an entropy source

use log::trace;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use super::bigint::{byte_length, from_bytes, mod_pow, RsaBigInt};
use super::entropy::EntropySource;
use super::error::{Result, RsaError};

/// Miller-Rabin rounds used by [`EntropySource::random_prime`]
pub const DEFAULT_ROUNDS: u32 = 20;

/// Candidates divisible by an odd number below this are rejected
/// before any modular exponentiation
const TRIAL_DIVISION_LIMIT: u32 = 1000;

/// Miller-Rabin primality test
/// Returns true if n is probably prime; witnesses come from `source`
pub fn is_probable_prime<E: EntropySource + ?Sized>(
    n: &RsaBigInt,
    rounds: u32,
    source: &mut E,
) -> Result<bool> {
    let two = RsaBigInt::from(2u8);
    if *n < two {
        return Ok(false);
    }
    if *n == two || *n == RsaBigInt::from(3u8) {
        return Ok(true);
    }
    if n.is_even() {
        return Ok(false);
    }

    // Small n: its smallest odd divisor decides
    let small = n.to_u32().filter(|&v| v < TRIAL_DIVISION_LIMIT);

    for divisor in (3..TRIAL_DIVISION_LIMIT).step_by(2) {
        if small == Some(divisor) {
            return Ok(true);
        }
        if (n % divisor).is_zero() {
            return Ok(false);
        }
    }

    // Write n-1 as d * 2^s with d odd
    let n_minus_one = n - 1u8;
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    let mut buf = vec![0u8; byte_length(n)];
    let witness_span = n - 3u8;

    'witness: for _ in 0..rounds {
        // Random witness a in [2, n-2]
        source.fill_bytes(&mut buf)?;
        let a = from_bytes(&buf) % &witness_span + &two;

        let mut x = mod_pow(&a, &d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = mod_pow(&x, &two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }

        // Composite
        return Ok(false);
    }

    Ok(true)
}

/// Generate a random probable prime of exactly `bits` bits.
///
/// The top two bits are forced on, so the product of two such primes
/// always has exactly `2 * bits` bits.
pub fn random_prime<E: EntropySource + ?Sized>(
    source: &mut E,
    bits: u32,
    rounds: u32,
) -> Result<RsaBigInt> {
    if bits < 2 {
        return Err(RsaError::InvalidBitLength { bits });
    }

    let len = ((bits + 7) / 8) as usize;
    let top = match bits % 8 {
        0 => 8,
        b => b,
    };
    let mut buf = vec![0u8; len];
    let mut candidates = 0u64;

    loop {
        source.fill_bytes(&mut buf)?;
        candidates += 1;

        // Clear bits above the requested length
        buf[0] &= ((1u16 << top) - 1) as u8;
        if top >= 2 {
            buf[0] |= 3u8 << (top - 2);
        } else {
            buf[0] |= 1;
            buf[1] |= 0x80;
        }
        buf[len - 1] |= 1;

        let candidate = from_bytes(&buf);
        if is_probable_prime(&candidate, rounds, source)? {
            trace!("found {}-bit prime after {} candidates", bits, candidates);
            return Ok(candidate);
        }
    }
}
