//! Cryptographic Helpers
//!
//! Small primitives used by the session token layer:
//! - CSPRNG byte generation
//! - HMAC-SHA256 signing and constant-time verification
//! - URL-safe Base64 without padding for cookie values

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

// ============================================================================
// Random
// ============================================================================

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    OsRng.fill_bytes(&mut buf);
    buf
}

// ============================================================================
// HMAC-SHA256
// ============================================================================

/// Compute an HMAC-SHA256 tag over `data`
pub fn sign_hmac(key: &[u8], data: &[u8]) -> Vec<u8> {
    // HMAC accepts keys of any length
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Verify an HMAC-SHA256 tag in constant time
pub fn verify_hmac(key: &[u8], data: &[u8], tag: &[u8]) -> bool {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.verify_slice(tag).is_ok()
}

// ============================================================================
// Base64
// ============================================================================

/// Encode bytes to URL-safe Base64 without padding (cookie-safe)
pub fn to_base64_url(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Decode URL-safe unpadded Base64 to bytes
pub fn from_base64_url(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(s)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes_length() {
        assert_eq!(random_bytes(16).len(), 16);
        assert_eq!(random_bytes(32).len(), 32);
    }

    #[test]
    fn test_random_bytes_distinct() {
        // Two draws colliding would mean the RNG is broken
        assert_ne!(random_bytes(32), random_bytes(32));
    }

    #[test]
    fn test_hmac_sign_and_verify() {
        let key = b"test_signing_key";
        let data = b"session_id_payload";

        let tag = sign_hmac(key, data);
        assert_eq!(tag.len(), 32);
        assert!(verify_hmac(key, data, &tag));
    }

    #[test]
    fn test_hmac_rejects_wrong_key() {
        let tag = sign_hmac(b"key_one", b"payload");
        assert!(!verify_hmac(b"key_two", b"payload", &tag));
    }

    #[test]
    fn test_hmac_rejects_tampered_data() {
        let key = b"test_signing_key";
        let tag = sign_hmac(key, b"payload");
        assert!(!verify_hmac(key, b"payload_modified", &tag));
    }

    #[test]
    fn test_hmac_rejects_truncated_tag() {
        let key = b"test_signing_key";
        let tag = sign_hmac(key, b"payload");
        assert!(!verify_hmac(key, b"payload", &tag[..16]));
    }

    #[test]
    fn test_hmac_known_vector() {
        // RFC 4231 test case 2
        let key = b"Jefe";
        let data = b"what do ya want for nothing?";
        let expected =
            hex::decode("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
                .unwrap();
        assert_eq!(sign_hmac(key, data), expected);
    }

    #[test]
    fn test_base64_url_roundtrip() {
        let data = random_bytes(32);
        let encoded = to_base64_url(&data);
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('='));
        assert_eq!(from_base64_url(&encoded).unwrap(), data);
    }

    #[test]
    fn test_base64_url_invalid_input() {
        assert!(from_base64_url("not valid base64!!!").is_err());
    }
}
