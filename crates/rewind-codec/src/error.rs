use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    /// The payload is not valid Brotli data.
    #[error("corrupt payload: {0}")]
    Corrupt(String),

    /// The payload inflated, but the result is not valid UTF-8.
    #[error("decompressed payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Writer-side compression failed.
    #[error("compression failed: {0}")]
    Compress(String),
}

pub type CodecResult<T> = Result<T, CodecError>;
