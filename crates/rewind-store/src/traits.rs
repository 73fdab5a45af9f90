use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;
use rewind_types::StorageKey;

use crate::error::{StoreError, StoreResult};

/// One object's body, delivered as a stream of byte chunks in arrival order.
///
/// A chunk-level error means the body cannot be completed; consumers must
/// discard everything received so far.
pub type ByteChunks = BoxStream<'static, Result<Bytes, StoreError>>;

/// Read seam over the object store.
///
/// Implementations must satisfy these invariants:
/// - A missing object is `StoreError::NotFound`, never an empty stream
///   passed off as success by the caller.
/// - Transient transport failures are retried only within the backend's own
///   configured budget; exhaustion surfaces as `StoreError::Transport`.
/// - The backend is safe for concurrent use: fetches share the connection
///   but own their streams exclusively.
/// - The store never interprets object contents.
#[async_trait]
pub trait ObjectFetch: Send + Sync {
    /// Fetch the object stored under `key`.
    ///
    /// Returns the body as a chunk stream; the fetch is not complete until
    /// the stream finishes without error.
    async fn fetch(&self, key: &StorageKey) -> StoreResult<ByteChunks>;
}
