use rewind_codec::CodecError;
use rewind_store::StoreError;
use thiserror::Error;

/// Failure taxonomy of a retrieval, as seen by callers.
///
/// The three kinds are disjoint and preserved exactly as the failing stage
/// reported them; nothing is wrapped into an opaque catch-all or substituted
/// with a default payload.
#[derive(Debug, Error)]
pub enum RetrieveError {
    /// The session's object is absent, or the store returned an empty body.
    /// Terminal: never retried.
    #[error("session payload not found: {0}")]
    NotFound(String),

    /// Network-level failure after the transport retry budget, or a
    /// mid-stream disconnect.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The stored payload does not inflate, or inflates to invalid text.
    /// Terminal: retrying cannot fix corrupt data.
    #[error("corrupt session payload: {0}")]
    CorruptData(String),
}

impl From<StoreError> for RetrieveError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(key) => RetrieveError::NotFound(key),
            StoreError::Transport(msg) => RetrieveError::Transport(msg),
        }
    }
}

impl From<CodecError> for RetrieveError {
    fn from(err: CodecError) -> Self {
        RetrieveError::CorruptData(err.to_string())
    }
}

pub type RetrieveResult<T> = Result<T, RetrieveError>;
