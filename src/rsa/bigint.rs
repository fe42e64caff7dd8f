// RSA Big Integer Operations
// Wrapper around num-bigint for the arithmetic the key generator and codec need

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Create a big integer from bytes (big-endian, unsigned)
pub fn from_bytes(bytes: &[u8]) -> RsaBigInt {
    RsaBigInt::from_bytes_be(bytes)
}

/// Serialize to exactly `width` big-endian bytes, restoring the leading
/// zero bytes that `to_bytes_be` drops.
///
/// Returns `None` if `n` needs more than `width` bytes.
pub fn to_bytes_fixed(n: &RsaBigInt, width: usize) -> Option<Vec<u8>> {
    let mut out = vec![0u8; width];
    if n.is_zero() {
        return Some(out);
    }

    let raw = n.to_bytes_be();
    if raw.len() > width {
        return None;
    }
    out[width - raw.len()..].copy_from_slice(&raw);
    Some(out)
}

/// Number of significant bits; zero for zero
pub fn bit_length(n: &RsaBigInt) -> u64 {
    n.bits()
}

/// Number of bytes needed to hold `bit_length(n)` bits, rounded up
pub fn byte_length(n: &RsaBigInt) -> usize {
    ((bit_length(n) + 7) / 8) as usize
}

/// Modular exponentiation: base^exp mod modulus
/// A zero modulus yields zero instead of panicking
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_zero() || modulus.is_one() {
        return RsaBigInt::zero();
    }
    base.modpow(exp, modulus)
}

/// Compute modular inverse: a^(-1) mod m
/// Returns None if gcd(a, m) != 1 or m is zero
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> Option<RsaBigInt> {
    if m.is_zero() {
        return None;
    }

    // Extended Euclid needs signed coefficients
    let a = BigInt::from_biguint(Sign::Plus, a.clone());
    let m = BigInt::from_biguint(Sign::Plus, m.clone());
    let egcd = a.extended_gcd(&m);

    if !egcd.gcd.is_one() {
        return None;
    }

    // x may be negative; bring it into [0, m)
    egcd.x.mod_floor(&m).to_biguint()
}
