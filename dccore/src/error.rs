use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BackendError {
    #[cfg(feature = "sqlx")]
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    /// Denotes custom application invariant; generally informative.
    #[error("application invariant violated: {0}")]
    AppInvariantViolation(String),
    #[error("unknown error")]
    Unknown,
}

/// Failures of a single case source lookup.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum SourceError {
    #[error("request to case source failed: {0}")]
    Http(String),
    #[error("case source returned status {0}")]
    Status(u16),
    #[error("case source presented a CAPTCHA challenge")]
    Captcha,
    #[error("failed to parse case source response: {0}")]
    Parse(String),
}

/// Failures of a browser-side request, independent of the transport.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    /// A non-2xx reply; `error` holds the message of the response envelope
    /// when the body could still be decoded as one.
    #[error("server returned status {status}")]
    Status {
        status: u16,
        error: Option<String>,
    },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("browser error: {0}")]
    Browser(String),
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}
