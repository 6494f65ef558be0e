//! Unified SDK error types.

use serde::Deserialize;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Request construction or network I/O failure (DNS, refused
    /// connection, TLS). Never carries an API response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Status >= 400 with a decodable error payload. Displays as the
    /// server's message text alone.
    #[error("{message}")]
    Api {
        status: u16,
        kind: String,
        message: String,
    },

    /// Response body failed to decode, on either the success path or
    /// the error-payload path. Carries the response status for context.
    #[error("invalid response body (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

/// Query-encoding contract violation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// A tagged parameter carried a non-string value. Query values must
    /// be strings; this is a programmer error and fails fast.
    #[error("query parameter `{field}` requires a string value")]
    NonString { field: &'static str },
}

/// Error body returned by the Connect API on failure responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorPayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_payload_decodes_wire_shape() {
        let payload: ErrorPayload =
            serde_json::from_str(r#"{"type":"not_found","message":"no such resource"}"#).unwrap();
        assert_eq!(payload.kind, "not_found");
        assert_eq!(payload.message, "no such resource");
    }

    #[test]
    fn api_error_displays_message_only() {
        let err = HttpError::Api {
            status: 404,
            kind: "not_found".into(),
            message: "no such resource".into(),
        };
        assert_eq!(err.to_string(), "no such resource");
    }
}
