//! In-process cache for fetched collections.
//!
//! Values are stored as JSON so one cache can hold every record type.

use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

use crate::CacheConfig;

/// Shared cache of fetched collections. Cloning is cheap and shares entries.
#[derive(Clone)]
pub struct MemoryCache {
    entries: Cache<String, String>,
    config: CacheConfig,
}

impl std::fmt::Debug for MemoryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCache")
            .field("ttl_seconds", &self.config.ttl_seconds)
            .field("key_prefix", &self.config.key_prefix)
            .finish_non_exhaustive()
    }
}

/// Error type for cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MemoryCache {
    pub fn new(config: &CacheConfig) -> Self {
        let entries = Cache::builder()
            .time_to_live(Duration::from_secs(config.ttl_seconds))
            .build();

        Self {
            entries,
            config: config.clone(),
        }
    }

    /// Gets a cached value by key.
    ///
    /// Returns `None` if the key doesn't exist, has expired, or fails to decode.
    #[instrument(skip(self), fields(cache.operation = "GET"))]
    pub async fn get<T>(&self, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let key = self.config.prefixed_key(key);

        match self.entries.get(&key).await {
            Some(value) => {
                debug!(cache.key = %key, "Cache hit");
                match serde_json::from_str(&value) {
                    Ok(parsed) => Some(parsed),
                    Err(e) => {
                        error!(cache.key = %key, error = %e, "Failed to deserialize cached value");
                        None
                    }
                }
            }
            None => {
                debug!(cache.key = %key, "Cache miss");
                None
            }
        }
    }

    /// Sets a cached value with the configured TTL.
    #[instrument(skip(self, value), fields(cache.operation = "SET"))]
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        let key = self.config.prefixed_key(key);
        let json = serde_json::to_string(value)?;

        self.entries.insert(key.clone(), json).await;

        debug!(cache.key = %key, cache.ttl_secs = %self.config.ttl_seconds, "Cache set");

        Ok(())
    }

    /// Invalidates (deletes) a cached key.
    #[instrument(skip(self), fields(cache.operation = "DEL"))]
    pub async fn invalidate(&self, key: &str) {
        let key = self.config.prefixed_key(key);

        self.entries.invalidate(&key).await;

        debug!(cache.key = %key, "Cache invalidated");
    }

    /// Checks if a key is currently cached.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&self.config.prefixed_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{invalidate, keys};
    use rollcall_models::Collection;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestData {
        id: i64,
        name: String,
    }

    fn cache() -> MemoryCache {
        MemoryCache::new(&CacheConfig {
            enabled: true,
            ..CacheConfig::default()
        })
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = cache();
        let data = vec![TestData {
            id: 1,
            name: "test".to_string(),
        }];

        cache.set("test:key", &data).await.unwrap();

        let retrieved: Option<Vec<TestData>> = cache.get("test:key").await;
        assert_eq!(retrieved, Some(data));
    }

    #[tokio::test]
    async fn test_get_with_wrong_type_is_a_miss() {
        let cache = cache();
        cache.set("test:key", &"plain string").await.unwrap();

        let retrieved: Option<Vec<TestData>> = cache.get("test:key").await;
        assert_eq!(retrieved, None);
    }

    #[tokio::test]
    async fn test_invalidate_collection() {
        let cache = cache();
        let key = keys::list(Collection::Courses);
        cache.set(&key, &Vec::<TestData>::new()).await.unwrap();
        assert!(cache.contains(&key));

        invalidate::collection(Some(&cache), Collection::Courses).await;

        assert!(!cache.contains(&key));
        let retrieved: Option<Vec<TestData>> = cache.get(&key).await;
        assert!(retrieved.is_none());
    }

    #[tokio::test]
    async fn test_invalidate_without_cache_is_noop() {
        invalidate::collection(None, Collection::Students).await;
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let cache = cache();
        let other = cache.clone();
        cache.set("shared", &1_i64).await.unwrap();
        assert_eq!(other.get::<i64>("shared").await, Some(1));
    }
}
