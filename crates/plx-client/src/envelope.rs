//! List payload normalization.
//!
//! List endpoints answer either with a bare JSON array or with an object that
//! wraps the array under a resource-specific key (`{"secrets": [...]}`) or a
//! generic one (`data`, `items`). Both shapes come out as a `Vec`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

const GENERIC_KEYS: [&str; 2] = ["data", "items"];

/// Extract a list of `T` from a list payload.
///
/// `null` and an object without any recognised key are an empty list.
///
/// # Errors
///
/// Returns [`ApiError::Parse`] if the payload is a scalar or an element does
/// not deserialize as `T`.
pub fn extract_list<T: DeserializeOwned>(payload: Value, key: &str) -> Result<Vec<T>, ApiError> {
    let items = match payload {
        Value::Null => return Ok(Vec::new()),
        Value::Array(_) => payload,
        Value::Object(mut map) => {
            let found = std::iter::once(key)
                .chain(GENERIC_KEYS)
                .find_map(|k| match map.remove(k) {
                    Some(v @ Value::Array(_)) => Some(v),
                    _ => None,
                });
            match found {
                Some(items) => items,
                None => return Ok(Vec::new()),
            }
        }
        other => {
            return Err(ApiError::Parse(format!(
                "expected a list for '{key}', got {other}"
            )));
        }
    };
    serde_json::from_value(items).map_err(|e| ApiError::Parse(format!("{key}: {e}")))
}
