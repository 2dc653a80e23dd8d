//! Shared HTTP response helpers.
//!
//! Centralizes status checks so the gateway and individual endpoints stay
//! focused on request construction and response mapping.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **401 Unauthorized** → [`ClientError::Unauthorized`]
/// - **Any other non-success status** → [`ClientError::Rejected`] carrying
///   the server's `detail` message when the body has one.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let detail = extract_detail(&body);
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ClientError::Unauthorized { detail });
    }
    Err(ClientError::Rejected {
        status: status.as_u16(),
        detail,
    })
}

/// Decode a JSON body, reporting the target type on failure.
pub async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| {
        ClientError::Decode(format!(
            "expected {}: {e}",
            std::any::type_name::<T>()
                .rsplit("::")
                .next()
                .unwrap_or("value")
        ))
    })
}

/// Pull a human-readable message out of an error body.
///
/// `{"detail": "text"}` yields the text verbatim. A list of validation
/// entries (`{"detail": [{"loc": [...], "msg": "..."}]}`) yields their
/// messages joined with `"; "`. Anything else yields `None`.
#[must_use]
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) => {
            let messages = items
                .iter()
                .filter_map(|item| {
                    let msg = item.get("msg")?.as_str()?;
                    let field = item
                        .get("loc")
                        .and_then(Value::as_array)
                        .and_then(|loc| loc.last())
                        .and_then(Value::as_str);
                    Some(field.map_or_else(|| msg.to_string(), |f| format!("{f}: {msg}")))
                })
                .collect::<Vec<_>>();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        Value::Object(_) => Some(value["detail"].to_string()),
        _ => None,
    }
}
