//! In-memory assignment store handler

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use warden_core::effects::AssignmentStoreEffects;
use warden_core::{
    AssignmentFilter, AssignmentId, NewAssignment, ObjectPermissionAssignment, WardenResult,
};

/// In-memory assignment store
///
/// Rows live in a plain `Vec`; uniqueness of the (subject, permission,
/// object) triple is enforced inside `get_or_create` under the write lock,
/// mirroring what a relational backend enforces with a unique index.
#[derive(Clone)]
pub struct MemoryAssignmentStore {
    rows: Arc<RwLock<Vec<ObjectPermissionAssignment>>>,
}

impl MemoryAssignmentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of rows currently persisted
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Whether the store holds no rows
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

impl Default for MemoryAssignmentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssignmentStoreEffects for MemoryAssignmentStore {
    async fn get_or_create(
        &self,
        candidate: NewAssignment,
    ) -> WardenResult<(ObjectPermissionAssignment, bool)> {
        let mut rows = self.rows.write().await;
        if let Some(existing) = rows.iter().find(|row| candidate.matches(row)) {
            return Ok((existing.clone(), false));
        }
        let row = ObjectPermissionAssignment {
            id: AssignmentId::new(),
            subject: candidate.subject,
            permission: candidate.permission,
            object: candidate.object,
        };
        rows.push(row.clone());
        Ok((row, true))
    }

    async fn delete_where(&self, filter: AssignmentFilter) -> WardenResult<u64> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| !filter.matches(row));
        Ok((before - rows.len()) as u64)
    }

    async fn find(&self, filter: AssignmentFilter) -> WardenResult<Vec<ObjectPermissionAssignment>> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|row| filter.matches(row)).cloned().collect())
    }
}
