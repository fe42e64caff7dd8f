// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod decrypt;
pub mod encrypt;
pub mod entropy;
pub mod error;
pub mod keygen;
pub mod padding;
pub mod prime;

pub use decrypt::{decrypt, decrypt_to_string};
pub use encrypt::{encrypt, encrypt_string, encrypt_with};
pub use entropy::{os_entropy, EntropySource, OsEntropy, RandEntropy};
pub use error::{Result, RsaError};
pub use keygen::{
    generate_keys, generate_keys_with, KeyGenConfig, PrivateKey, PublicKey, PUBLIC_EXPONENT,
};
pub use padding::{pad_pkcs1_v15, unpad_pkcs1_v15};
