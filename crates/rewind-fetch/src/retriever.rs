use std::sync::Arc;

use rewind_store::{collect_chunks, ObjectFetch};
use rewind_types::SessionRef;

use crate::error::{RetrieveError, RetrieveResult};

/// End-to-end session payload retrieval.
///
/// Holds the shared store client behind the [`ObjectFetch`] seam; the client
/// is injected at construction so embedders and tests choose the backend.
/// Each call is one independent flow — all per-call buffers are exclusively
/// owned, so a `Retriever` is safe to share across concurrent calls.
pub struct Retriever {
    store: Arc<dyn ObjectFetch>,
}

impl Retriever {
    pub fn new(store: Arc<dyn ObjectFetch>) -> Self {
        Self { store }
    }

    /// Reconstruct the recorded event log for `session`.
    ///
    /// Derives the storage key, fetches the compressed object, aggregates
    /// the body stream, and inflates it to text. An empty body is treated as
    /// the object being absent, never as an empty payload.
    pub async fn retrieve(&self, session: SessionRef) -> RetrieveResult<String> {
        let key = session.storage_key();
        tracing::debug!(%session, %key, "retrieving session payload");

        let chunks = self.store.fetch(&key).await?;
        let compressed = collect_chunks(chunks).await?;
        if compressed.is_empty() {
            return Err(RetrieveError::NotFound(key.to_string()));
        }

        let payload = rewind_codec::decompress_text(&compressed)?;
        tracing::debug!(
            %session,
            compressed_bytes = compressed.len(),
            payload_bytes = payload.len(),
            "session payload reconstructed"
        );
        Ok(payload)
    }
}

impl std::fmt::Debug for Retriever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Retriever").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_store::MemoryObjectStore;

    fn retriever_over(store: MemoryObjectStore) -> Retriever {
        Retriever::new(Arc::new(store))
    }

    #[tokio::test]
    async fn reconstructs_recorded_payload() {
        let payload = r#"[{"type":"click"}]"#;
        let session = SessionRef::new(10, 55);

        let store = MemoryObjectStore::new();
        store.put(
            &session.storage_key(),
            rewind_codec::compress(payload.as_bytes()).unwrap(),
        );

        let result = retriever_over(store).retrieve(session).await.unwrap();
        assert_eq!(result, payload);
    }

    #[tokio::test]
    async fn chunked_delivery_reconstructs_identically() {
        let payload = r#"[{"type":"scroll","x":120,"y":4096},{"type":"click"}]"#;
        let session = SessionRef::new(4, 101);

        let store = MemoryObjectStore::new().with_chunk_size(3);
        store.put(
            &session.storage_key(),
            rewind_codec::compress(payload.as_bytes()).unwrap(),
        );

        let result = retriever_over(store).retrieve(session).await.unwrap();
        assert_eq!(result, payload);
    }

    #[tokio::test]
    async fn missing_object_is_not_found() {
        let store = MemoryObjectStore::new();
        let err = retriever_over(store)
            .retrieve(SessionRef::new(1, 2))
            .await
            .unwrap_err();
        assert!(matches!(err, RetrieveError::NotFound(_)));
    }

    #[tokio::test]
    async fn empty_body_is_not_found_not_empty_success() {
        let session = SessionRef::new(7, 7);
        let store = MemoryObjectStore::new();
        store.put(&session.storage_key(), Vec::new());

        let err = retriever_over(store).retrieve(session).await.unwrap_err();
        assert!(matches!(err, RetrieveError::NotFound(_)));
    }

    #[tokio::test]
    async fn mid_stream_failure_is_transport() {
        let session = SessionRef::new(3, 9);
        let store = MemoryObjectStore::new()
            .with_chunk_size(2)
            .failing_after_chunks(1);
        store.put(
            &session.storage_key(),
            rewind_codec::compress(b"interrupted").unwrap(),
        );

        let err = retriever_over(store).retrieve(session).await.unwrap_err();
        assert!(matches!(err, RetrieveError::Transport(_)));
    }

    #[tokio::test]
    async fn non_brotli_object_is_corrupt_data() {
        let session = SessionRef::new(5, 5);
        let store = MemoryObjectStore::new();
        store.put(&session.storage_key(), b"plain uncompressed text".to_vec());

        let err = retriever_over(store).retrieve(session).await.unwrap_err();
        assert!(matches!(err, RetrieveError::CorruptData(_)));
    }

    #[tokio::test]
    async fn non_utf8_payload_is_corrupt_data() {
        let session = SessionRef::new(6, 6);
        let store = MemoryObjectStore::new();
        store.put(
            &session.storage_key(),
            rewind_codec::compress(&[0xff, 0xfe, 0x00, 0x80]).unwrap(),
        );

        let err = retriever_over(store).retrieve(session).await.unwrap_err();
        assert!(matches!(err, RetrieveError::CorruptData(_)));
    }

    #[tokio::test]
    async fn retrieval_is_repeatable() {
        let payload = r#"[{"type":"input","value":"hello"}]"#;
        let session = SessionRef::new(2, 4);

        let store = MemoryObjectStore::new();
        store.put(
            &session.storage_key(),
            rewind_codec::compress(payload.as_bytes()).unwrap(),
        );

        let retriever = retriever_over(store);
        assert_eq!(retriever.retrieve(session).await.unwrap(), payload);
        assert_eq!(retriever.retrieve(session).await.unwrap(), payload);
    }

    #[tokio::test]
    async fn concurrent_retrievals_share_one_client() {
        let store = MemoryObjectStore::new().with_chunk_size(4);
        for i in 0..8u64 {
            let session = SessionRef::new(1, i);
            let payload = format!(r#"[{{"type":"click","seq":{i}}}]"#);
            store.put(
                &session.storage_key(),
                rewind_codec::compress(payload.as_bytes()).unwrap(),
            );
        }

        let retriever = Arc::new(retriever_over(store));
        let handles: Vec<_> = (0..8u64)
            .map(|i| {
                let retriever = Arc::clone(&retriever);
                tokio::spawn(async move {
                    let payload = retriever.retrieve(SessionRef::new(1, i)).await.unwrap();
                    assert!(payload.contains(&format!(r#""seq":{i}"#)));
                })
            })
            .collect();

        for handle in handles {
            handle.await.expect("task should not panic");
        }
    }
}
