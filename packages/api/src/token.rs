//! # Bearer token inspection
//!
//! The backend issues JWTs. The client only needs the `exp` claim to decide
//! whether a stored token is worth presenting, so the payload segment is
//! base64url-decoded and read as JSON. The signature is never checked here;
//! the backend remains the authority and answers 401 for bad tokens.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token payload is not JSON: {0}")]
    Payload(#[from] serde_json::Error),
}

/// The claims the client reads.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Claims {
    /// Expiry, seconds since the epoch.
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub id: Option<String>,
}

impl Claims {
    /// A token without `exp` never expires client-side.
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.exp.is_some_and(|exp| exp <= now_secs)
    }
}

pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::Malformed);
    };
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

pub fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
pub(crate) fn make_token(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"id":"u1","exp":{exp}}}"#));
    format!("{header}.{payload}.c2lnbmF0dXJl")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_exp() {
        let claims = decode_claims(&make_token(1_700_000_000)).unwrap();
        assert_eq!(claims.exp, Some(1_700_000_000));
        assert_eq!(claims.id.as_deref(), Some("u1"));
        assert!(claims.is_expired(1_700_000_001));
        assert!(claims.is_expired(1_700_000_000));
        assert!(!claims.is_expired(1_699_999_999));
    }

    #[test]
    fn test_missing_exp_never_expires() {
        assert!(!Claims::default().is_expired(i64::MAX));
    }

    #[test]
    fn test_malformed_tokens() {
        assert!(matches!(decode_claims("abc"), Err(TokenError::Malformed)));
        assert!(matches!(decode_claims("a.b.c.d"), Err(TokenError::Malformed)));
        assert!(matches!(decode_claims("a.!!!.c"), Err(TokenError::Encoding(_))));
        let not_json = URL_SAFE_NO_PAD.encode("plain");
        assert!(matches!(decode_claims(&format!("a.{not_json}.c")), Err(TokenError::Payload(_))));
    }
}
