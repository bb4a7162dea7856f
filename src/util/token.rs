//! Unverified access-token payload decoding.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client only reads claims for presentation (greeting name) and for
//! deciding when to refresh. The signature is never checked here; the server
//! verifies the bearer token on every API call, so nothing decoded in this
//! module is an authorization source.
//!
//! ERROR HANDLING
//! ==============
//! Malformed tokens produce [`DecodeError`] values. Callers treat any decode
//! failure exactly like "no identity available".

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::{Map, Value};

/// Greeting fallback when no identity can be derived.
pub const PLACEHOLDER_NAME: &str = "there";

/// Claims consulted for the display name, first match wins.
const DISPLAY_NAME_CLAIMS: [&[&str]; 5] =
    [&["username"], &["user", "username"], &["name"], &["preferred_username"], &["sub"]];

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// Error returned by [`decode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("token has no payload segment")]
    MissingPayload,
    #[error("token payload is not base64: {0}")]
    Base64(String),
    #[error("token payload is not JSON: {0}")]
    Json(String),
    #[error("token payload is not a JSON object")]
    NotAnObject,
}

/// Decoded (unverified) token claims.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Raw claim lookup by dotted path segments.
    #[must_use]
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        rest.iter().try_fold(self.0.get(*first)?, |value, key| value.get(*key))
    }

    /// Best-effort display identity.
    ///
    /// Order: `username`, `user.username`, `name`, `preferred_username`, `sub`.
    /// Null, empty, `false` and zero claims are skipped.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        DISPLAY_NAME_CLAIMS
            .iter()
            .find_map(|path| self.get_path(path).and_then(claim_text))
    }

    /// `exp` as unix seconds, if present and numeric.
    #[must_use]
    pub fn expires_at(&self) -> Option<i64> {
        match self.0.get("exp")? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(seconds_from_f64)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>().ok().or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(seconds_from_f64))
            }
            _ => None,
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn seconds_from_f64(value: f64) -> i64 {
    value.floor() as i64
}

fn claim_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f.abs() > 0.0) => Some(number_text(n)),
        Value::Bool(true) => Some("true".to_owned()),
        _ => None,
    }
}

/// Whole floats print without a fraction, so `7.0` reads as `7`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::float_cmp)]
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => (f as i64).to_string(),
        _ => n.to_string(),
    }
}

/// Decode the payload segment of a JWT-shaped token without verifying it.
///
/// # Errors
///
/// Returns [`DecodeError`] if the token has no payload segment, the segment is
/// not base64, or it does not hold a JSON object.
pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    let payload = token.trim().split('.').nth(1).filter(|p| !p.is_empty()).ok_or(DecodeError::MissingPayload)?;
    let bytes = URL_SAFE_LENIENT
        .decode(payload)
        .or_else(|_| STANDARD_LENIENT.decode(payload))
        .map_err(|e| DecodeError::Base64(e.to_string()))?;
    match serde_json::from_slice::<Value>(&bytes).map_err(|e| DecodeError::Json(e.to_string()))? {
        Value::Object(map) => Ok(Claims(map)),
        _ => Err(DecodeError::NotAnObject),
    }
}

/// Display identity of `token`; `None` when absent or undecodable.
#[must_use]
pub fn display_name(token: &str) -> Option<String> {
    decode(token).ok().and_then(|claims| claims.display_name())
}

/// Display identity of an optional token, falling back to [`PLACEHOLDER_NAME`].
#[must_use]
pub fn display_name_or_placeholder(token: Option<&str>) -> String {
    token.and_then(display_name).unwrap_or_else(|| PLACEHOLDER_NAME.to_owned())
}

/// Build an unsigned JWT-shaped token carrying `claims`.
#[cfg(test)]
pub(crate) fn unsigned_token(claims: &Value) -> String {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}
