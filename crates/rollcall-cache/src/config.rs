//! Collection cache configuration.

use std::env;

/// Cache configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `ROLLCALL_CACHE_ENABLED`: Share fetched collections between views (default: `false`)
/// - `ROLLCALL_CACHE_TTL_SECONDS`: Time-to-live for cached lists in seconds (default: `30`)
/// - `ROLLCALL_CACHE_PREFIX`: Prefix for all cache keys (default: `rollcall`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    pub enabled: bool,

    /// Time-to-live for cached lists in seconds.
    pub ttl_seconds: u64,

    /// Prefix for all cache keys.
    pub key_prefix: String,
}

impl CacheConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            enabled: lookup("ROLLCALL_CACHE_ENABLED")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.enabled),
            ttl_seconds: lookup("ROLLCALL_CACHE_TTL_SECONDS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.ttl_seconds),
            key_prefix: lookup("ROLLCALL_CACHE_PREFIX")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.key_prefix),
        }
    }

    /// Build a prefixed cache key.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let config = CacheConfig::default();
    /// let key = config.prefixed_key("students:list");
    /// // Returns "rollcall:students:list"
    /// ```
    pub fn prefixed_key(&self, key: &str) -> String {
        format!("{}:{}", self.key_prefix, key)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            ttl_seconds: 30,
            key_prefix: "rollcall".into(),
        }
    }
}
