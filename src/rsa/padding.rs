// PKCS#1 v1.5 Padding
// Encryption block (type 2) construction and validation

use super::entropy::{random_nonzero_byte, EntropySource};
use super::error::{Result, RsaError};

/// Bytes of overhead in an encryption block: 0x00 0x02, 8 padding bytes, 0x00
pub const PKCS1_OVERHEAD: usize = 11;

/// Block type byte for public-key encryption
const BLOCK_TYPE_ENCRYPT: u8 = 0x02;

/// Build a `key_len`-byte encryption block.
///
/// Format: 0x00 || 0x02 || PS || 0x00 || data,
/// where PS is at least 8 non-zero random bytes.
pub fn pad_pkcs1_v15<E: EntropySource + ?Sized>(
    data: &[u8],
    key_len: usize,
    source: &mut E,
) -> Result<Vec<u8>> {
    let max = key_len.saturating_sub(PKCS1_OVERHEAD);
    if key_len < PKCS1_OVERHEAD || data.len() > max {
        return Err(RsaError::MessageTooLong {
            len: data.len(),
            max,
        });
    }

    let ps_len = key_len - data.len() - 3;

    let mut block = Vec::with_capacity(key_len);
    block.push(0x00);
    block.push(BLOCK_TYPE_ENCRYPT);
    for _ in 0..ps_len {
        block.push(random_nonzero_byte(source)?);
    }
    block.push(0x00);
    block.extend_from_slice(data);

    Ok(block)
}

/// Strip the padding from a decrypted block and return the message.
///
/// Not constant-time: the signature check exits early and the
/// terminator is found by a sequential scan.
pub fn unpad_pkcs1_v15(block: &[u8]) -> Result<&[u8]> {
    if block.len() < 2 || block[0] != 0x00 || block[1] != BLOCK_TYPE_ENCRYPT {
        return Err(RsaError::PaddingSignatureInvalid);
    }

    let terminator = block[2..]
        .iter()
        .position(|&b| b == 0x00)
        .map(|pos| pos + 2)
        .ok_or(RsaError::PaddingTerminatorMissing)?;

    Ok(&block[terminator + 1..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::entropy::tests::{seeded, BrokenEntropy, ScriptedEntropy};

    #[test]
    fn test_pad_pkcs1_v15() {
        let data = b"Hello";
        let padded = pad_pkcs1_v15(data, 64, &mut seeded(1)).unwrap();
        assert_eq!(padded.len(), 64); // 512 bits = 64 bytes

        // Check structure
        assert_eq!(padded[0], 0x00);
        assert_eq!(padded[1], 0x02);
        assert_eq!(padded[padded.len() - data.len() - 1], 0x00);
        assert_eq!(&padded[padded.len() - data.len()..], data);

        // Check that padding bytes are non-zero
        for &byte in &padded[2..padded.len() - data.len() - 1] {
            assert_ne!(byte, 0x00);
        }
    }

    #[test]
    fn test_pad_resamples_zero_bytes() {
        // Every other byte offered is zero
        let bytes = (0..200).map(|i| if i % 2 == 0 { 0x00 } else { 0x7f }).collect();
        let mut source = ScriptedEntropy { bytes, pos: 0 };

        let padded = pad_pkcs1_v15(b"", 16, &mut source).unwrap();
        assert_eq!(padded.len(), 16);
        assert!(padded[2..15].iter().all(|&b| b == 0x7f));
        assert_eq!(padded[15], 0x00);
        // 13 padding bytes, each after one rejected zero
        assert_eq!(source.pos, 26);
    }

    #[test]
    fn test_pad_max_size() {
        // Maximum data size for 512-bit key: 64 - 11 = 53 bytes
        let data = vec![0u8; 53];
        let padded = pad_pkcs1_v15(&data, 64, &mut seeded(2)).unwrap();
        assert_eq!(padded.len(), 64);
        assert!(padded[2..10].iter().all(|&b| b != 0x00));
        assert_eq!(padded[10], 0x00);
    }

    #[test]
    fn test_pad_too_large() {
        // 54 bytes is too large for 512-bit key
        let data = vec![0u8; 54];
        let result = pad_pkcs1_v15(&data, 64, &mut seeded(3));
        assert!(matches!(
            result,
            Err(RsaError::MessageTooLong { len: 54, max: 53 })
        ));
    }

    #[test]
    fn test_overhead_matches_block_layout() {
        // Longest message leaves exactly the header, 8 padding bytes and the terminator
        let padded = pad_pkcs1_v15(&[0x11u8; 5], 5 + PKCS1_OVERHEAD, &mut seeded(7)).unwrap();
        assert_eq!(padded.len(), 16);
        assert_eq!(padded[10], 0x00);
        assert!(padded[2..10].iter().all(|&b| b != 0x00));
    }

    #[test]
    fn test_pad_tiny_key() {
        let result = pad_pkcs1_v15(b"", 10, &mut seeded(4));
        assert!(matches!(result, Err(RsaError::MessageTooLong { len: 0, max: 0 })));
    }

    #[test]
    fn test_pad_without_entropy() {
        let result = pad_pkcs1_v15(b"x", 64, &mut BrokenEntropy);
        assert!(matches!(result, Err(RsaError::EntropyUnavailable(_))));
    }

    #[test]
    fn test_unpad_pkcs1_v15() {
        let original = b"Test data";
        let padded = pad_pkcs1_v15(original, 64, &mut seeded(5)).unwrap();
        assert_eq!(unpad_pkcs1_v15(&padded).unwrap(), original);
    }

    #[test]
    fn test_unpad_empty_message() {
        let padded = pad_pkcs1_v15(b"", 64, &mut seeded(6)).unwrap();
        assert!(unpad_pkcs1_v15(&padded).unwrap().is_empty());
    }

    #[test]
    fn test_unpad_short_padding_accepted() {
        // Fewer than 8 padding bytes is still well-formed on the way back
        let block = [0x00, 0x02, 0xaa, 0x00, 0x01, 0x02];
        assert_eq!(unpad_pkcs1_v15(&block).unwrap(), &[0x01u8, 0x02]);
    }

    #[test]
    fn test_invalid_signature() {
        let wrong_type = [0x00, 0x03, 0xff, 0x00, 0x01];
        assert!(matches!(
            unpad_pkcs1_v15(&wrong_type),
            Err(RsaError::PaddingSignatureInvalid)
        ));

        let wrong_lead = [0x01, 0x02, 0xff, 0x00, 0x01];
        assert!(matches!(
            unpad_pkcs1_v15(&wrong_lead),
            Err(RsaError::PaddingSignatureInvalid)
        ));

        assert!(matches!(
            unpad_pkcs1_v15(&[0x00]),
            Err(RsaError::PaddingSignatureInvalid)
        ));
    }

    #[test]
    fn test_invalid_separator() {
        let block = [0x00, 0x02, 0xff, 0xff, 0x01, 0x02, 0x03]; // No separator
        assert!(matches!(
            unpad_pkcs1_v15(&block),
            Err(RsaError::PaddingTerminatorMissing)
        ));
    }
}
