//! # Rollcall Cache
//!
//! In-memory collection cache shared by every list view in one process.
//!
//! This crate provides:
//! - Cache operations (get, set, invalidate) with JSON-serialized values
//! - Cache configuration from environment variables
//! - Cache key generation and per-collection invalidation helpers
//!
//! # Example
//!
//! ```ignore
//! use rollcall_cache::{CacheConfig, MemoryCache, keys};
//! use rollcall_models::Collection;
//!
//! let cache = MemoryCache::new(&CacheConfig::from_env());
//! cache.set(&keys::list(Collection::Students), &students).await?;
//! let hit: Option<Vec<Student>> = cache.get(&keys::list(Collection::Students)).await;
//! ```

pub mod config;
pub mod keys;
pub mod memory;

pub use config::CacheConfig;
pub use keys::invalidate;
pub use memory::{CacheError, MemoryCache};
