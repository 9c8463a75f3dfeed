//! Session Token Signing
//!
//! The cookie token is `"{session_id}.{base64url(hmac_sha256(session_id))}"`.
//! The session ID alone carries no authority; a token with a bad or missing
//! signature never reaches the session store.

use uuid::Uuid;

/// Issue a signed token for a session ID
pub fn issue(session_id: Uuid, secret: &[u8]) -> String {
    let id = session_id.to_string();
    let tag = platform::crypto::sign_hmac(secret, id.as_bytes());
    format!("{}.{}", id, platform::crypto::to_base64_url(&tag))
}

/// Verify a token and recover the session ID
///
/// Returns `None` for any malformed, unsigned, or tampered token. HMAC
/// comparison is constant time.
pub fn parse(token: &str, secret: &[u8]) -> Option<Uuid> {
    let (id, signature) = token.split_once('.')?;
    let tag = platform::crypto::from_base64_url(signature).ok()?;

    if !platform::crypto::verify_hmac(secret, id.as_bytes(), &tag) {
        return None;
    }

    Uuid::parse_str(id).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

    #[test]
    fn test_issue_and_parse() {
        let session_id = Uuid::new_v4();
        let token = issue(session_id, SECRET);
        assert_eq!(parse(&token, SECRET), Some(session_id));
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let token = issue(Uuid::new_v4(), SECRET);
        assert_eq!(parse(&token, b"another_secret_another_secret!!!"), None);
    }

    #[test]
    fn test_rejects_tampered_id() {
        let session_id = Uuid::new_v4();
        let token = issue(session_id, SECRET);
        let (_, signature) = token.split_once('.').unwrap();
        let forged = format!("{}.{}", Uuid::new_v4(), signature);
        assert_eq!(parse(&forged, SECRET), None);
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        assert_eq!(parse("", SECRET), None);
        assert_eq!(parse("no-dot-here", SECRET), None);
        assert_eq!(parse("not-a-uuid.!!invalid-base64!!", SECRET), None);
        // Bare session ID without a signature carries no authority
        assert_eq!(parse(&Uuid::new_v4().to_string(), SECRET), None);
    }
}
