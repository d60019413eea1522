//! Session store (Redis) configuration

use serde::{Deserialize, Serialize};

/// Connection settings for the Redis session store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Maximum number of attempts for connecting and for transient
    /// command failures
    pub max_retries: u32,

    /// Base delay between retries in milliseconds (exponential backoff)
    pub retry_delay_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://127.0.0.1:6379"),
            max_retries: 3,
            retry_delay_ms: 100,
        }
    }
}

impl CacheConfig {
    /// Read store settings from `REDIS_URL` / `REDIS_MAX_RETRIES` /
    /// `REDIS_RETRY_DELAY_MS`
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let url = std::env::var("REDIS_URL").unwrap_or(defaults.url);
        let max_retries = std::env::var("REDIS_MAX_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_retries);
        let retry_delay_ms = std::env::var("REDIS_RETRY_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.retry_delay_ms);

        Self {
            url,
            max_retries,
            retry_delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.url, "redis://127.0.0.1:6379");
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_delay_ms, 100);
    }
}
