use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No object exists under the requested key.
    #[error("object not found: {0}")]
    NotFound(String),

    /// Network-level failure: connect/TLS/timeout after the transport retry
    /// budget, or a mid-stream disconnect.
    #[error("transport failure: {0}")]
    Transport(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
