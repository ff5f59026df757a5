use dccore::{
    error::BackendError,
    validate::Validation,
};
use thiserror::Error;

pub use dccore::error::SourceError;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error(transparent)]
    BackendError(#[from] BackendError),
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error("invalid query: {0}")]
    Validation(#[from] Validation),
}

#[derive(Debug, PartialEq, Error)]
pub enum CtrlError {
    /// The named file is not served from the static root.
    #[error("unknown file: {0}")]
    UnknownFile(String),
}
