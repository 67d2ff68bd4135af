//! Transport-level error type for the data client

use thiserror::Error;

/// Any failure performing or interpreting a request.
///
/// A 404 on a single-user fetch is a `Status` error like any other
/// non-2xx response; callers cannot (and should not) distinguish
/// "not found" from other transport failures at this layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connectivity or protocol failure before a response body arrived.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("server returned {status}")]
    Status { status: reqwest::StatusCode },

    /// The response body was not the JSON shape we expected.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = TransportError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_decode_from_serde() {
        let bad = serde_json::from_str::<Vec<u64>>("not json").unwrap_err();
        let err: TransportError = bad.into();
        assert!(matches!(err, TransportError::Decode(_)));
        assert!(err.to_string().starts_with("malformed response body"));
    }
}
