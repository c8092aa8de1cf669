use reqwest::StatusCode;
use thiserror::Error;

/// Why a provider could not produce a reading.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Timeout, refused connection, DNS failure and the like.
    #[error("{0}")]
    Network(String),

    /// The provider answered with a non-success status.
    #[error("request failed with status {status}: {body}")]
    Protocol { status: StatusCode, body: String },

    /// The response arrived but did not have the shape we expect.
    #[error("{0}")]
    Data(String),
}

impl ProviderError {
    pub fn category(&self) -> &'static str {
        match self {
            ProviderError::Network(_) => "NetworkError",
            ProviderError::Protocol { .. } => "ProtocolError",
            ProviderError::Data(_) => "DataError",
        }
    }

    pub(crate) fn protocol(status: StatusCode, body: &str) -> Self {
        ProviderError::Protocol { status, body: truncate_body(body) }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ProviderError::Data(err.to_string())
        } else if let Some(status) = err.status() {
            ProviderError::Protocol { status, body: String::new() }
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Data(err.to_string())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories() {
        assert_eq!(ProviderError::Network("x".into()).category(), "NetworkError");
        assert_eq!(ProviderError::Data("x".into()).category(), "DataError");
        let err = ProviderError::protocol(StatusCode::SERVICE_UNAVAILABLE, "down");
        assert_eq!(err.category(), "ProtocolError");
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "é".repeat(500);
        match ProviderError::protocol(StatusCode::BAD_GATEWAY, &body) {
            ProviderError::Protocol { body, .. } => {
                assert!(body.ends_with("..."));
                assert_eq!(body.chars().count(), 203);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
