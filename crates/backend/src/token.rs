//! Bearer tokens forwarded to the backends.
//!
//! Tokens are issued by the music and traffic backends; this service never
//! inspects their contents.

use sha2::{Digest, Sha256};

/// An opaque bearer token taken from the caller's `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Parse an `Authorization` header value of the form `Bearer <token>`.
    ///
    /// The scheme is matched case-insensitively. Returns `None` for other
    /// schemes or an empty token.
    pub fn from_header_value(value: &str) -> Option<Self> {
        let (scheme, token) = value.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("bearer") {
            return None;
        }
        let token = token.trim();
        if token.is_empty() {
            None
        } else {
            Some(Self(token.to_string()))
        }
    }

    /// The raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `Authorization` header value for this token.
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }

    /// Stable fingerprint used to partition cached responses per caller.
    pub fn fingerprint(&self) -> String {
        format!("{:x}", Sha256::digest(self.0.as_bytes()))
    }
}

// Never print the token itself.
impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bearer_header() {
        let token = BearerToken::from_header_value("Bearer abc.def").unwrap();
        assert_eq!(token.as_str(), "abc.def");
        assert_eq!(token.header_value(), "Bearer abc.def");
    }

    #[test]
    fn scheme_is_case_insensitive() {
        assert!(BearerToken::from_header_value("bearer xyz").is_some());
    }

    #[test]
    fn rejects_other_schemes_and_empty_tokens() {
        assert!(BearerToken::from_header_value("Basic dXNlcjpwYXNz").is_none());
        assert!(BearerToken::from_header_value("Bearer   ").is_none());
        assert!(BearerToken::from_header_value("Bearer").is_none());
    }

    #[test]
    fn fingerprint_differs_per_token_and_hides_value() {
        let a = BearerToken::new("token-a");
        let b = BearerToken::new("token-b");
        assert_ne!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);
        assert!(!format!("{a:?}").contains("token-a"));
    }
}
