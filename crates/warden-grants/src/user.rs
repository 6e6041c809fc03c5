//! User-subject assigner

use crate::assigner::ObjectPermissionAssigner;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;
use warden_core::effects::{
    AssignmentStoreEffects, DirectoryEffects, PermissionCacheEffects, PermissionCatalogEffects,
};
use warden_core::{
    AssignmentModel, GroupId, ObjectPermissionAssignment, Persisted, UserId, WardenResult,
};

/// Grants, revokes, and queries object permissions for individual users
///
/// A user-direct cache entry is patched in place on grant and revoke; no
/// other subject's entry depends on it, so no fan-out happens here and the
/// user directory is never consulted.
pub struct UserPermissionAssigner {
    inner: ObjectPermissionAssigner,
}

impl UserPermissionAssigner {
    /// Create an assigner over the given collaborators
    pub fn new(
        store: Arc<dyn AssignmentStoreEffects>,
        catalog: Arc<dyn PermissionCatalogEffects>,
        cache: Arc<dyn PermissionCacheEffects>,
        model: AssignmentModel,
    ) -> Self {
        Self {
            inner: ObjectPermissionAssigner::new(
                store,
                catalog,
                cache,
                Arc::new(NoMembers),
                model,
            ),
        }
    }

    /// Grant the permission named `codename` on `object` to `user`
    pub async fn grant<O: Persisted>(
        &self,
        codename: &str,
        user: &UserId,
        object: &O,
    ) -> WardenResult<ObjectPermissionAssignment> {
        self.inner.grant(codename, user, object).await
    }

    /// Deprecated name for [`grant`](Self::grant)
    #[deprecated(since = "0.1.0", note = "renamed to `grant`")]
    pub async fn assign<O: Persisted>(
        &self,
        codename: &str,
        user: &UserId,
        object: &O,
    ) -> WardenResult<ObjectPermissionAssignment> {
        warn!("`UserPermissionAssigner::assign` is deprecated; use `grant`");
        self.inner.grant(codename, user, object).await
    }

    /// Revoke the permission named `codename` on `object` from `user`
    pub async fn revoke<O: Persisted>(
        &self,
        codename: &str,
        user: &UserId,
        object: &O,
    ) -> WardenResult<()> {
        self.inner.revoke(codename, user, object).await
    }

    /// All persisted rows for `user` on `object`'s type
    pub async fn list_for_object<O: Persisted>(
        &self,
        user: &UserId,
        object: &O,
    ) -> WardenResult<Vec<ObjectPermissionAssignment>> {
        self.inner.list_for_object(user, object).await
    }
}

/// Directory that never yields members; user-direct operations have no
/// membership to expand
#[derive(Debug, Clone, Copy, Default)]
struct NoMembers;

#[async_trait]
impl DirectoryEffects for NoMembers {
    async fn members_of(&self, _group: &GroupId) -> WardenResult<Vec<UserId>> {
        Ok(Vec::new())
    }
}
