//! Group-subject assigner with membership fan-out

use crate::assigner::ObjectPermissionAssigner;
use std::sync::Arc;
use tracing::warn;
use warden_core::effects::{
    AssignmentStoreEffects, DirectoryEffects, PermissionCacheEffects, PermissionCatalogEffects,
};
use warden_core::{
    AssignmentModel, GroupId, ObjectPermissionAssignment, Persisted, WardenResult,
};

/// Grants, revokes, and queries object permissions for user groups
///
/// The group's own cache entry is patched in place exactly like a user's.
/// In addition, both grant and revoke enumerate the group's current members
/// through the directory and delete each member's cached entry for the
/// object: a member's entry is the union of user-direct and all-group
/// permissions and cannot be patched incrementally from here, so it is
/// invalidated and recomputed lazily on the next check.
pub struct GroupPermissionAssigner {
    inner: ObjectPermissionAssigner,
}

impl GroupPermissionAssigner {
    /// Create an assigner over the given collaborators
    pub fn new(
        store: Arc<dyn AssignmentStoreEffects>,
        catalog: Arc<dyn PermissionCatalogEffects>,
        cache: Arc<dyn PermissionCacheEffects>,
        directory: Arc<dyn DirectoryEffects>,
        model: AssignmentModel,
    ) -> Self {
        Self {
            inner: ObjectPermissionAssigner::new(store, catalog, cache, directory, model),
        }
    }

    /// Grant the permission named `codename` on `object` to `group`
    pub async fn grant<O: Persisted>(
        &self,
        codename: &str,
        group: &GroupId,
        object: &O,
    ) -> WardenResult<ObjectPermissionAssignment> {
        self.inner.grant(codename, group, object).await
    }

    /// Deprecated name for [`grant`](Self::grant)
    #[deprecated(since = "0.1.0", note = "renamed to `grant`")]
    pub async fn assign<O: Persisted>(
        &self,
        codename: &str,
        group: &GroupId,
        object: &O,
    ) -> WardenResult<ObjectPermissionAssignment> {
        warn!("`GroupPermissionAssigner::assign` is deprecated; use `grant`");
        self.inner.grant(codename, group, object).await
    }

    /// Revoke the permission named `codename` on `object` from `group`
    pub async fn revoke<O: Persisted>(
        &self,
        codename: &str,
        group: &GroupId,
        object: &O,
    ) -> WardenResult<()> {
        self.inner.revoke(codename, group, object).await
    }

    /// All persisted rows for `group` on `object`'s type
    pub async fn list_for_object<O: Persisted>(
        &self,
        group: &GroupId,
        object: &O,
    ) -> WardenResult<Vec<ObjectPermissionAssignment>> {
        self.inner.list_for_object(group, object).await
    }
}
