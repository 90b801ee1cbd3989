//! Cache key generation and invalidation utilities.

use rollcall_models::Collection;
use tracing::debug;

use crate::MemoryCache;

/// Builds an unprefixed cache key; [`MemoryCache`] adds the configured prefix.
fn build_key(parts: &[&str]) -> String {
    parts.join(":")
}

/// Key for the full list of a collection.
pub fn list(collection: Collection) -> String {
    build_key(&[collection.as_str(), "list"])
}

/// Cache invalidation helpers.
pub mod invalidate {
    use super::*;

    /// Drop the cached list of a collection.
    ///
    /// Call this after creating or deleting a record in it.
    pub async fn collection(cache: Option<&MemoryCache>, collection: Collection) {
        let Some(cache) = cache else { return };

        cache.invalidate(&list(collection)).await;
        debug!(collection = %collection, "Collection cache invalidated");
    }
}
