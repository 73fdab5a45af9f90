use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::Client;
use futures::stream;
use rewind_types::StorageKey;

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::traits::{ByteChunks, ObjectFetch};

/// S3 backend for the object store seam.
///
/// Built once per process from a [`StoreConfig`] and shared by every
/// retrieval flow: the client is region-pinned, carries the configured
/// connect/read timeouts, and retries transient transport failures only
/// within the configured attempt cap. The SDK's default rustls connector
/// does not negotiate below TLS 1.2.
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
}

impl S3ObjectStore {
    /// Establish the shared store client.
    ///
    /// This is the single initialization point; the returned value is
    /// immutable and safe for concurrent fetches.
    pub async fn connect(config: StoreConfig) -> Self {
        let timeouts = TimeoutConfig::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .build();
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .retry_config(RetryConfig::standard().with_max_attempts(config.max_attempts))
            .timeout_config(timeouts)
            .load()
            .await;
        tracing::info!(
            bucket = %config.bucket,
            region = %config.region,
            max_attempts = config.max_attempts,
            "object store client ready"
        );
        Self {
            client: Client::new(&sdk_config),
            bucket: config.bucket,
        }
    }

    /// Bucket this client is bound to.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl ObjectFetch for S3ObjectStore {
    async fn fetch(&self, key: &StorageKey) -> StoreResult<ByteChunks> {
        tracing::debug!(%key, bucket = %self.bucket, "fetching object");
        let result = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key.as_str())
            .send()
            .await;

        let output = match result {
            Ok(output) => output,
            Err(err) => {
                let missing = err
                    .as_service_error()
                    .is_some_and(|e| e.is_no_such_key());
                return Err(if missing {
                    StoreError::NotFound(key.to_string())
                } else {
                    StoreError::Transport(DisplayErrorContext(&err).to_string())
                });
            }
        };

        let chunks = stream::unfold(output.body, |mut body| async move {
            match body.try_next().await {
                Ok(Some(chunk)) => Some((Ok(chunk), body)),
                Ok(None) => None,
                Err(e) => Some((Err(StoreError::Transport(e.to_string())), body)),
            }
        });
        Ok(Box::pin(chunks))
    }
}

impl std::fmt::Debug for S3ObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3ObjectStore")
            .field("bucket", &self.bucket)
            .finish_non_exhaustive()
    }
}
