use futures::TryStreamExt;

use crate::error::StoreResult;
use crate::traits::ByteChunks;

/// Aggregate an object's chunk stream into one contiguous buffer.
///
/// Chunks are concatenated in the exact order received; nothing is
/// transformed. If the stream errors at any point the whole aggregation
/// fails — a partial buffer never escapes.
pub async fn collect_chunks(mut chunks: ByteChunks) -> StoreResult<Vec<u8>> {
    let mut buf = Vec::new();
    while let Some(chunk) = chunks.try_next().await? {
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}
