use thiserror::Error;

/// Failures surfaced by the SOAP connector. All of them are fatal to the
/// current sync session; retry decisions belong to the caller.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// The service rejected the request signature as bad, stale, or reused.
    /// Never retried here; the client computes a fresh signature per call
    /// instead of ever replaying one.
    #[error("Authentication rejected (code {code}): {message}")]
    AuthRejected { code: String, message: String },

    /// Open or read budget exceeded while talking to the endpoint.
    #[error("Transport timeout: {0}")]
    TransportTimeout(String),

    /// Connection-level failure.
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// A non-authentication fault returned by the service.
    #[error("Service fault (code {code}): {message}")]
    ServiceFault { code: String, message: String },

    /// An expected element was absent from a parsed response.
    #[error("Malformed response: missing {path}")]
    MalformedResponse { path: String },

    /// The response body is not a usable document.
    #[error("Malformed response: {0}")]
    InvalidDocument(String),
}

impl ConnectorError {
    pub fn missing(path: &str) -> Self {
        ConnectorError::MalformedResponse {
            path: path.to_string(),
        }
    }
}
