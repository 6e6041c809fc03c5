//! Subject capability seam for the generic engine

use async_trait::async_trait;
use warden_core::effects::DirectoryEffects;
use warden_core::{GroupId, SubjectRef, UserId, WardenResult};

/// Capability a permission subject exposes to the assigner
///
/// A subject contributes its stable identity plus membership expansion: the
/// users whose cached permission lists go stale when the subject's grants
/// change. An individual user expands to nobody, a group to its current
/// members, which is the only difference between the two assigner kinds.
#[async_trait]
pub trait Subject: Send + Sync {
    /// Stable reference identifying this subject
    fn subject_ref(&self) -> SubjectRef;

    /// Users whose cache entries must be invalidated when this subject's
    /// permissions on an object change
    async fn member_users(&self, directory: &dyn DirectoryEffects) -> WardenResult<Vec<UserId>>;
}

#[async_trait]
impl Subject for UserId {
    fn subject_ref(&self) -> SubjectRef {
        SubjectRef::User(*self)
    }

    // A user's own entry is patched in place; no other entry depends on it.
    async fn member_users(&self, _directory: &dyn DirectoryEffects) -> WardenResult<Vec<UserId>> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl Subject for GroupId {
    fn subject_ref(&self) -> SubjectRef {
        SubjectRef::Group(*self)
    }

    async fn member_users(&self, directory: &dyn DirectoryEffects) -> WardenResult<Vec<UserId>> {
        directory.members_of(self).await
    }
}
