use base64::Engine as _;
use chrono::{DateTime, Utc};

use crate::error::SessionError;

/// Decode the JWT `exp` claim without verifying the signature.
///
/// Display only. The client never acts on this; expiry is detected when the
/// server answers 401.
///
/// # Errors
///
/// Returns `SessionError::TokenDecode` if the token is not a three-part JWT or
/// the `exp` claim is missing or unparseable.
pub fn decode_expiry(jwt: &str) -> Result<DateTime<Utc>, SessionError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(SessionError::TokenDecode("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| SessionError::TokenDecode(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| SessionError::TokenDecode(format!("JSON parse failed: {e}")))?;
    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| SessionError::TokenDecode("missing exp claim".into()))?;
    DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| SessionError::TokenDecode("invalid exp timestamp".into()))
}

/// True when the token carries an `exp` claim in the past.
/// Undecodable tokens are not considered expired.
#[must_use]
pub fn looks_expired(jwt: &str) -> bool {
    decode_expiry(jwt).is_ok_and(|exp| exp <= Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_jwt(payload: &str) -> String {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let header = engine.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = engine.encode(payload);
        let signature = engine.encode("fake_sig");
        format!("{header}.{payload}.{signature}")
    }

    #[test]
    fn decodes_future_expiry() {
        let exp = Utc::now().timestamp() + 3600;
        let jwt = make_jwt(&format!(r#"{{"sub":"4","exp":{exp}}}"#));
        assert_eq!(decode_expiry(&jwt).expect("decode").timestamp(), exp);
        assert!(!looks_expired(&jwt));
    }

    #[test]
    fn past_expiry_looks_expired() {
        let exp = Utc::now().timestamp() - 60;
        let jwt = make_jwt(&format!(r#"{{"exp":{exp}}}"#));
        assert!(looks_expired(&jwt));
    }

    #[test]
    fn rejects_opaque_token() {
        let err = decode_expiry("opaque-token").unwrap_err();
        assert!(err.to_string().contains("invalid JWT format"));
        assert!(!looks_expired("opaque-token"));
    }

    #[test]
    fn rejects_missing_exp() {
        let err = decode_expiry(&make_jwt(r#"{"sub":"4"}"#)).unwrap_err();
        assert!(err.to_string().contains("missing exp claim"));
    }

    #[test]
    fn rejects_bad_base64() {
        let err = decode_expiry("header.!!!invalid!!!.signature").unwrap_err();
        assert!(err.to_string().contains("base64 decode failed"));
    }
}
