//! Per-(subject, object) permission cache contract

use crate::cache_key::CacheKey;
use crate::errors::WardenResult;
use async_trait::async_trait;

/// Key-value cache mapping a [`CacheKey`] to the ordered list of permission
/// codenames a subject holds on one object
///
/// Single-key operations only: nothing is atomic across keys and no
/// compare-and-swap is offered, so read-modify-write callers race and the
/// last writer wins. Mutators treat the cache as a best-effort mirror; the
/// persisted store remains the source of truth and stale entries self-heal
/// on expiry or explicit invalidation.
#[async_trait]
pub trait PermissionCacheEffects: Send + Sync {
    /// Cached codename list for `key`, or `None` on a miss
    async fn get(&self, key: &CacheKey) -> WardenResult<Option<Vec<String>>>;

    /// Replace the entry for `key`
    async fn set(&self, key: &CacheKey, codenames: Vec<String>) -> WardenResult<()>;

    /// Drop the entry for `key`, if present
    async fn delete(&self, key: &CacheKey) -> WardenResult<()>;
}
