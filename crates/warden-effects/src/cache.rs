//! In-memory permission cache handler

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use warden_core::effects::PermissionCacheEffects;
use warden_core::{CacheKey, WardenResult};

/// In-memory permission cache
///
/// One entry per [`CacheKey`], holding the ordered codename list. Offers
/// exactly the single-key get/set/delete surface of the contract; there is
/// no compare-and-swap, so read-modify-write callers race just as they
/// would against an external cache.
#[derive(Clone)]
pub struct MemoryPermissionCache {
    entries: Arc<RwLock<HashMap<CacheKey, Vec<String>>>>,
}

impl MemoryPermissionCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of entries currently cached
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the cache holds no entries
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for MemoryPermissionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PermissionCacheEffects for MemoryPermissionCache {
    async fn get(&self, key: &CacheKey) -> WardenResult<Option<Vec<String>>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &CacheKey, codenames: Vec<String>) -> WardenResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.clone(), codenames);
        Ok(())
    }

    async fn delete(&self, key: &CacheKey) -> WardenResult<()> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }
}
