use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default bucket holding compressed session contents. The writer side
/// targets the same bucket; there is no per-call override.
pub const DEFAULT_BUCKET: &str = "rewind-session-archive";

/// Region the store client is pinned to.
pub const DEFAULT_REGION: &str = "us-west-2";

/// Connection settings for the object store client.
///
/// Fixed at process start: the client is built once from this config and
/// shared by every retrieval flow afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoreConfig {
    pub bucket: String,
    pub region: String,
    /// Total attempt cap for transient transport failures (initial request
    /// plus retries). Application-level failures are never retried.
    pub max_attempts: u32,
    /// Maximum time to establish a connection.
    pub connect_timeout: Duration,
    /// Maximum idle time on an established socket.
    pub read_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_BUCKET.to_string(),
            region: DEFAULT_REGION.to_string(),
            max_attempts: 2,
            connect_timeout: Duration::from_millis(5000),
            read_timeout: Duration::from_millis(10_000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = StoreConfig::default();
        assert_eq!(c.bucket, DEFAULT_BUCKET);
        assert_eq!(c.region, DEFAULT_REGION);
        assert_eq!(c.max_attempts, 2);
        assert_eq!(c.connect_timeout, Duration::from_millis(5000));
        assert_eq!(c.read_timeout, Duration::from_millis(10_000));
    }

    #[test]
    fn config_serde_round_trip() {
        let c = StoreConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let back: StoreConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.bucket, c.bucket);
        assert_eq!(back.max_attempts, c.max_attempts);
        assert_eq!(back.read_timeout, c.read_timeout);
    }
}
