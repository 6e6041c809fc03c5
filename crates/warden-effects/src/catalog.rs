//! In-memory permission catalog handler

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use warden_core::effects::PermissionCatalogEffects;
use warden_core::{ObjectTypeId, PermissionRecord, WardenResult};

/// In-memory permission catalog
///
/// Records are registered up front and looked up by (object type,
/// codename). The catalog owns its records; callers receive clones.
#[derive(Clone)]
pub struct MemoryPermissionCatalog {
    records: Arc<RwLock<HashMap<(ObjectTypeId, String), PermissionRecord>>>,
}

impl MemoryPermissionCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register `record`, replacing any previous record for its
    /// (object type, codename) pair
    pub async fn register(&self, record: PermissionRecord) {
        let mut records = self.records.write().await;
        records.insert(
            (record.object_type.clone(), record.codename.clone()),
            record,
        );
    }
}

impl Default for MemoryPermissionCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PermissionCatalogEffects for MemoryPermissionCatalog {
    async fn lookup(
        &self,
        object_type: &ObjectTypeId,
        codename: &str,
    ) -> WardenResult<Option<PermissionRecord>> {
        let records = self.records.read().await;
        Ok(records
            .get(&(object_type.clone(), codename.to_string()))
            .cloned())
    }
}
