//! Session Cookie Construction and Extraction
//!
//! Builds `Set-Cookie` header values for session tokens and pulls a named
//! cookie back out of a request's `Cookie` header. No domain knowledge;
//! the token payload is an opaque string to this module.

use http::HeaderMap;

// ============================================================================
// Cookie Attributes
// ============================================================================

/// SameSite attribute for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Cookie attribute configuration
///
/// The `Secure` flag is a deployment concern; local development over plain
/// HTTP needs it off, anything else keeps it on.
#[derive(Debug, Clone)]
pub struct CookieConfig {
    /// Cookie name
    pub name: String,
    /// Path attribute
    pub path: String,
    /// Max-Age in seconds
    pub max_age_secs: u64,
    /// Secure attribute (HTTPS only)
    pub secure: bool,
    /// SameSite attribute
    pub same_site: SameSite,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session_token".to_string(),
            path: "/".to_string(),
            max_age_secs: 60 * 60 * 24, // 24 hours
            secure: true,
            same_site: SameSite::Lax,
        }
    }
}

impl CookieConfig {
    /// Build a `Set-Cookie` value carrying the given token
    ///
    /// Always HttpOnly; the token must never be readable from script.
    pub fn build_set_cookie(&self, token: &str) -> String {
        let mut cookie = format!(
            "{}={}; Path={}; Max-Age={}; HttpOnly; SameSite={}",
            self.name,
            token,
            self.path,
            self.max_age_secs,
            self.same_site.as_str()
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }

    /// Build a `Set-Cookie` value that removes the cookie
    ///
    /// Attributes other than Max-Age must match the set variant or some
    /// browsers keep the original cookie alive.
    pub fn build_delete_cookie(&self) -> String {
        let mut cookie = format!(
            "{}=; Path={}; Max-Age=0; HttpOnly; SameSite={}",
            self.name,
            self.path,
            self.same_site.as_str()
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

// ============================================================================
// Cookie Extraction
// ============================================================================

/// Extract a named cookie value from request headers
///
/// Handles multiple `Cookie` headers and multiple `name=value` pairs per
/// header. Returns `None` when absent.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(http::header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key.trim() == name).then(|| value.trim().to_string())
        })
        .next()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_build_set_cookie() {
        let config = CookieConfig::default();
        let cookie = config.build_set_cookie("abc123");

        assert!(cookie.starts_with("session_token=abc123"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Secure"));
    }

    #[test]
    fn test_build_set_cookie_insecure() {
        let config = CookieConfig {
            secure: false,
            ..CookieConfig::default()
        };
        let cookie = config.build_set_cookie("abc123");
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_build_delete_cookie() {
        let config = CookieConfig::default();
        let cookie = config.build_delete_cookie();

        assert!(cookie.starts_with("session_token=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Secure"));
    }

    #[test]
    fn test_extract_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            http::header::COOKIE,
            HeaderValue::from_static("session_token=xyz789; other=value"),
        );

        assert_eq!(
            extract_cookie(&headers, "session_token"),
            Some("xyz789".to_string())
        );
        assert_eq!(extract_cookie(&headers, "other"), Some("value".to_string()));
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_extract_cookie_multiple_headers() {
        let mut headers = HeaderMap::new();
        headers.append(http::header::COOKIE, HeaderValue::from_static("a=1"));
        headers.append(
            http::header::COOKIE,
            HeaderValue::from_static("session_token=tok"),
        );

        assert_eq!(
            extract_cookie(&headers, "session_token"),
            Some("tok".to_string())
        );
    }

    #[test]
    fn test_extract_cookie_no_header() {
        let headers = HeaderMap::new();
        assert_eq!(extract_cookie(&headers, "session_token"), None);
    }
}
