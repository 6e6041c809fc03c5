//! In-memory user-directory handlers

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use warden_core::effects::DirectoryEffects;
use warden_core::{GroupId, UserId, WardenResult};

/// In-memory group membership directory
#[derive(Clone)]
pub struct MemoryDirectory {
    memberships: Arc<RwLock<HashMap<GroupId, Vec<UserId>>>>,
}

impl MemoryDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self {
            memberships: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Add `user` to `group`, ignoring duplicates
    pub async fn add_member(&self, group: GroupId, user: UserId) {
        let mut memberships = self.memberships.write().await;
        let members = memberships.entry(group).or_default();
        if !members.contains(&user) {
            members.push(user);
        }
    }

    /// Remove `user` from `group`, if present
    pub async fn remove_member(&self, group: GroupId, user: UserId) {
        let mut memberships = self.memberships.write().await;
        if let Some(members) = memberships.get_mut(&group) {
            members.retain(|member| *member != user);
        }
    }
}

impl Default for MemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DirectoryEffects for MemoryDirectory {
    async fn members_of(&self, group: &GroupId) -> WardenResult<Vec<UserId>> {
        let memberships = self.memberships.read().await;
        Ok(memberships.get(group).cloned().unwrap_or_default())
    }
}
