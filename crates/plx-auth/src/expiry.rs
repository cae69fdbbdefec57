use base64::Engine as _;

use crate::error::AuthError;

/// Decode a JWT `exp` claim without verifying the signature.
///
/// Portal tokens are usually JWTs; opaque API tokens return an error, which
/// callers treat as "expiry unknown".
///
/// # Errors
///
/// Returns `AuthError::Other` if the JWT format is invalid or the `exp` claim
/// is missing or cannot be parsed.
pub fn decode_expiry(jwt: &str) -> Result<chrono::DateTime<chrono::Utc>, AuthError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::Other("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| AuthError::Other(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::Other(format!("JSON parse failed: {e}")))?;
    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| AuthError::Other("missing exp claim".into()))?;
    chrono::DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| AuthError::Other("invalid exp timestamp".into()))
}

/// `Some(true)` if the token is a JWT whose `exp` is in the past,
/// `None` if the token carries no readable expiry.
#[must_use]
pub fn is_expired(token: &str) -> Option<bool> {
    decode_expiry(token)
        .ok()
        .map(|expires_at| expires_at <= chrono::Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_jwt_with_exp(exp: i64) -> String {
        let header = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256"}"#);
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .encode(format!(r#"{{"sub":"user_123","exp":{exp}}}"#));
        let signature = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode("fake_sig");
        format!("{header}.{payload}.{signature}")
    }

    #[test]
    fn decode_expiry_valid_jwt() {
        let future_exp = chrono::Utc::now().timestamp() + 3600;
        let jwt = make_jwt_with_exp(future_exp);
        let dt = decode_expiry(&jwt).expect("should decode");
        assert_eq!(dt.timestamp(), future_exp);
        assert_eq!(is_expired(&jwt), Some(false));
    }

    #[test]
    fn expired_jwt_is_reported() {
        let jwt = make_jwt_with_exp(chrono::Utc::now().timestamp() - 3600);
        assert_eq!(is_expired(&jwt), Some(true));
    }

    #[test]
    fn opaque_token_has_unknown_expiry() {
        assert_eq!(is_expired("plx_live_abcdef"), None);
        let err = decode_expiry("plx_live_abcdef").unwrap_err();
        assert!(err.to_string().contains("invalid JWT format"));
    }

    #[test]
    fn decode_expiry_missing_exp_claim() {
        let header = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256"}"#);
        let payload =
            base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"sub":"user_123"}"#);
        let jwt = format!("{header}.{payload}.sig");
        let err = decode_expiry(&jwt).unwrap_err();
        assert!(err.to_string().contains("missing exp claim"));
    }

    #[test]
    fn decode_expiry_bad_base64() {
        let err = decode_expiry("header.!!!invalid!!!.signature").unwrap_err();
        assert!(err.to_string().contains("base64 decode failed"));
    }
}
