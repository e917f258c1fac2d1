//! Error normalization for calls to the profile service.
//!
//! Every failure is classified here exactly once. Callers only ever read
//! `user_message()`; nobody outside this module looks at status codes.

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Shown for any 5xx response.
pub const SERVER_ERROR_MESSAGE: &str = "server error, try again later";

/// Shown when no response was received at all.
pub const NETWORK_ERROR_MESSAGE: &str = "cannot reach server";

/// Errors that can occur while talking to the profile service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received (connection refused, DNS, timeout).
    #[error("{msg}", msg = NETWORK_ERROR_MESSAGE)]
    Network,

    /// The server answered with a 5xx status. Details are logged, not shown.
    #[error("{msg}", msg = SERVER_ERROR_MESSAGE)]
    Server { status: u16 },

    /// Any other failure; `message` is the server-provided payload.
    #[error("{message}")]
    Client { status: Option<u16>, message: String },

    /// The selected image could not be read from disk.
    #[error("failed to read image '{}': {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// The message surfaced through the alert.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Short classification string for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Network => "network_error",
            ApiError::Server { .. } => "server_error",
            ApiError::Client { .. } => "client_error",
            ApiError::Image { .. } => "image_error",
        }
    }

    /// Classifies a reqwest failure that happened before any response arrived.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_builder() {
            return ApiError::Client {
                status: None,
                message: err.to_string(),
            };
        }
        tracing::warn!(error = %err, "profile service unreachable");
        ApiError::Network
    }

    /// Classifies a non-success response.
    pub(crate) fn from_response(status: StatusCode, body: &[u8]) -> Self {
        if status.is_server_error() {
            tracing::error!(
                status = status.as_u16(),
                body = %String::from_utf8_lossy(body),
                "profile service returned a server error"
            );
            return ApiError::Server {
                status: status.as_u16(),
            };
        }

        ApiError::Client {
            status: Some(status.as_u16()),
            message: payload_message(status, body),
        }
    }
}

/// Extracts the message the server put in an error payload.
///
/// Accepts `{"message": ".."}`, `{"error": ".."}`, a bare JSON string or
/// plain text. An empty body falls back to the status reason.
fn payload_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
        let text = match &value {
            serde_json::Value::String(text) => Some(text.as_str()),
            serde_json::Value::Object(map) => map
                .get("message")
                .or_else(|| map.get("error"))
                .and_then(|v| v.as_str()),
            _ => None,
        };
        if let Some(text) = text {
            return text.to_string();
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if !text.is_empty() {
        return text.to_string();
    }

    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => format!("request failed with status {}", status.as_u16()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_5xx_maps_to_fixed_message() {
        for code in [500u16, 502, 503, 599] {
            let status = StatusCode::from_u16(code).unwrap();
            let err = ApiError::from_response(status, br#"{"message":"db down"}"#);
            assert!(matches!(err, ApiError::Server { status } if status == code));
            assert_eq!(err.user_message(), SERVER_ERROR_MESSAGE);
        }
    }

    #[test]
    fn client_error_passes_payload_message_through() {
        let err = ApiError::from_response(
            StatusCode::BAD_REQUEST,
            br#"{"message":"name too long"}"#,
        );
        assert_eq!(err.user_message(), "name too long");
        assert_eq!(err.kind(), "client_error");
    }

    #[test]
    fn error_key_is_used_when_message_missing() {
        let err = ApiError::from_response(StatusCode::NOT_FOUND, br#"{"error":"no user"}"#);
        assert_eq!(err.user_message(), "no user");
    }

    #[test]
    fn plain_text_payload_is_kept() {
        let err = ApiError::from_response(StatusCode::UNAUTHORIZED, b"  token expired \n");
        assert_eq!(err.user_message(), "token expired");
    }

    #[test]
    fn empty_payload_falls_back_to_reason() {
        let err = ApiError::from_response(StatusCode::NOT_FOUND, b"");
        assert_eq!(err.user_message(), "404 Not Found");
    }

    #[test]
    fn network_error_message() {
        assert_eq!(ApiError::Network.user_message(), NETWORK_ERROR_MESSAGE);
        assert_eq!(ApiError::Network.kind(), "network_error");
    }
}
