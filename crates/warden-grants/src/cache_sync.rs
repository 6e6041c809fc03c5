//! Best-effort cache patches for the consistency protocol
//!
//! Patches are read-modify-write on a single key with no compare-and-swap;
//! under a concurrent grant and revoke of the same key the last writer
//! wins. The protocol accepts that: the persisted store stays the source of
//! truth and a stale entry self-heals on expiry or invalidation.

use warden_core::effects::PermissionCacheEffects;
use warden_core::{CacheKey, WardenResult};

/// Append `codename` to the cached list under `key`, if the entry is
/// populated and does not already contain it.
///
/// An absent entry is left absent; populating it is the read path's job.
pub(crate) async fn append_if_cached(
    cache: &dyn PermissionCacheEffects,
    key: &CacheKey,
    codename: &str,
) -> WardenResult<()> {
    if let Some(mut codenames) = cache.get(key).await? {
        if !codenames.iter().any(|cached| cached == codename) {
            codenames.push(codename.to_string());
            cache.set(key, codenames).await?;
        }
    }
    Ok(())
}

/// Remove the first occurrence of `codename` from the cached list under
/// `key`, if the entry is populated and contains it.
///
/// Exactly one occurrence is dropped. A well-formed entry never holds
/// duplicates, so this empties it of the codename; the first-occurrence
/// semantics are preserved for compatibility with entries written by older
/// processes rather than generalized to remove-all.
pub(crate) async fn remove_first_if_cached(
    cache: &dyn PermissionCacheEffects,
    key: &CacheKey,
    codename: &str,
) -> WardenResult<()> {
    if let Some(mut codenames) = cache.get(key).await? {
        if let Some(index) = codenames.iter().position(|cached| cached == codename) {
            codenames.remove(index);
            cache.set(key, codenames).await?;
        }
    }
    Ok(())
}
