//! Digest truncation and compact text encoding.
//!
//! A GID is the first `bitspace / 8` bytes of a digest, encoded as uppercase
//! RFC 4648 base-32 with the padding stripped. Keeping the truncation and the
//! encoding in one place means the minting path and the configuration
//! validation cannot drift apart.

use crate::{GidError, GidResult};
use data_encoding::BASE32_NOPAD;
use sgid_types::Gid;

/// Validate a digest truncation length.
///
/// The bitspace must be a positive multiple of 8 that does not exceed
/// `digest_bits`.
pub fn validate_bitspace(bits: u32, digest_bits: u32) -> GidResult<()> {
    if bits == 0 || bits % 8 != 0 || bits > digest_bits {
        return Err(GidError::InvalidBitspace { bits, digest_bits });
    }
    Ok(())
}

/// Truncate `digest` to `bitspace_bits` and encode the kept bytes as a GID.
pub fn encode(digest: &[u8], bitspace_bits: u32) -> GidResult<Gid> {
    let digest_bits = digest.len() as u32 * 8;
    validate_bitspace(bitspace_bits, digest_bits)?;

    let kept = (bitspace_bits / 8) as usize;
    let token = BASE32_NOPAD.encode(&digest[..kept]);
    Ok(Gid::new(token)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_eight_bytes_as_thirteen_symbols() {
        // 64 bits / 5 bits per base-32 symbol = 12.8, so 13 symbols unpadded.
        let digest = [0u8; 32];
        let gid = encode(&digest, 64).unwrap();
        assert_eq!(gid.symbol_count(), 13);
        assert_eq!(gid.as_str(), "AAAAAAAAAAAAA");
    }

    #[test]
    fn truncates_before_encoding() {
        let mut digest = [0u8; 32];
        digest[8] = 0xff;
        // Bytes beyond the bitspace must not influence the token.
        let gid = encode(&digest, 64).unwrap();
        assert_eq!(gid, encode(&[0u8; 32], 64).unwrap());
    }

    #[test]
    fn output_stays_in_uppercase_base32_alphabet() {
        let digest: Vec<u8> = (0u8..32).collect();
        let gid = encode(&digest, 128).unwrap();
        assert!(gid
            .as_str()
            .chars()
            .all(|c| matches!(c, 'A'..='Z' | '2'..='7')));
        assert!(!gid.as_str().contains('='));
    }

    #[test]
    fn rejects_invalid_bitspace() {
        let digest = [0u8; 32];
        for bits in [0, 4, 60, 264] {
            let err = encode(&digest, bits).expect_err("bitspace should be rejected");
            assert!(matches!(err, GidError::InvalidBitspace { .. }), "bits={bits}");
        }
    }

    #[test]
    fn full_digest_width_is_allowed() {
        let digest = [0xabu8; 32];
        let gid = encode(&digest, 256).unwrap();
        // ceil(256 / 5) = 52 symbols.
        assert_eq!(gid.symbol_count(), 52);
    }
}
