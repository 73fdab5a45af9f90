use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream;
use rewind_types::StorageKey;

use crate::error::{StoreError, StoreResult};
use crate::traits::{ByteChunks, ObjectFetch};

/// In-memory, HashMap-based object store.
///
/// Intended for tests and embedding. Objects are held behind a `RwLock` for
/// safe concurrent access and cloned on fetch. Bodies are delivered through
/// the same chunk-stream interface as the production backend, so chunk
/// boundaries and mid-stream failures can be exercised without a network.
pub struct MemoryObjectStore {
    objects: RwLock<HashMap<String, Vec<u8>>>,
    chunk_size: usize,
    fail_after_chunks: Option<usize>,
}

impl MemoryObjectStore {
    /// Create a new empty store delivering each body as a single chunk.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
            chunk_size: usize::MAX,
            fail_after_chunks: None,
        }
    }

    /// Deliver bodies in chunks of at most `chunk_size` bytes.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk size must be non-zero");
        self.chunk_size = chunk_size;
        self
    }

    /// Inject a transport error after `n` chunks of every fetched body.
    pub fn failing_after_chunks(mut self, n: usize) -> Self {
        self.fail_after_chunks = Some(n);
        self
    }

    /// Store `data` under `key`, replacing any previous object.
    pub fn put(&self, key: &StorageKey, data: impl Into<Vec<u8>>) {
        self.objects
            .write()
            .expect("lock poisoned")
            .insert(key.as_str().to_string(), data.into());
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.read().expect("lock poisoned").is_empty()
    }

    /// Remove all objects from the store.
    pub fn clear(&self) {
        self.objects.write().expect("lock poisoned").clear();
    }
}

impl Default for MemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectFetch for MemoryObjectStore {
    async fn fetch(&self, key: &StorageKey) -> StoreResult<ByteChunks> {
        let data = {
            let map = self.objects.read().expect("lock poisoned");
            map.get(key.as_str())
                .cloned()
                .ok_or_else(|| StoreError::NotFound(key.to_string()))?
        };

        let mut items: Vec<Result<Bytes, StoreError>> = data
            .chunks(self.chunk_size)
            .map(|c| Ok(Bytes::copy_from_slice(c)))
            .collect();

        if let Some(n) = self.fail_after_chunks {
            items.truncate(n);
            items.push(Err(StoreError::Transport(
                "injected mid-stream failure".into(),
            )));
        }

        Ok(Box::pin(stream::iter(items)))
    }
}

impl std::fmt::Debug for MemoryObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryObjectStore")
            .field("object_count", &self.len())
            .field("chunk_size", &self.chunk_size)
            .finish()
    }
}
