//! Generic grant/revoke engine shared by both assigners

use crate::cache_sync;
use crate::subject::Subject;
use std::sync::Arc;
use tracing::debug;
use warden_core::effects::{
    AssignmentStoreEffects, DirectoryEffects, PermissionCacheEffects, PermissionCatalogEffects,
};
use warden_core::{
    AssignmentFilter, AssignmentModel, CacheKey, NewAssignment, ObjectKey,
    ObjectPermissionAssignment, ObjectPk, ObjectTypeId, PermissionRecord, Persisted, SubjectRef,
    WardenError, WardenResult,
};

/// Generic object-permission assigner
///
/// One engine implements grant, revoke, and listing for every subject kind.
/// The [`Subject`] capability supplies identity and membership expansion,
/// so the group fan-out falls out of the same code path that no-ops for an
/// individual user.
pub struct ObjectPermissionAssigner {
    store: Arc<dyn AssignmentStoreEffects>,
    catalog: Arc<dyn PermissionCatalogEffects>,
    cache: Arc<dyn PermissionCacheEffects>,
    directory: Arc<dyn DirectoryEffects>,
    model: AssignmentModel,
}

impl ObjectPermissionAssigner {
    /// Create an assigner over the given collaborators
    ///
    /// `model` is the static capability of the backing assignment model and
    /// stays fixed for the assigner's lifetime.
    pub fn new(
        store: Arc<dyn AssignmentStoreEffects>,
        catalog: Arc<dyn PermissionCatalogEffects>,
        cache: Arc<dyn PermissionCacheEffects>,
        directory: Arc<dyn DirectoryEffects>,
        model: AssignmentModel,
    ) -> Self {
        Self {
            store,
            catalog,
            cache,
            directory,
            model,
        }
    }

    /// Grant the permission named `codename` on `object` to `subject`
    ///
    /// Idempotent for the persisted effect: an existing row is returned
    /// untouched. The subject's populated cache entry is patched in place;
    /// member users' entries are invalidated for lazy recompute.
    pub async fn grant<S, O>(
        &self,
        codename: &str,
        subject: &S,
        object: &O,
    ) -> WardenResult<ObjectPermissionAssignment>
    where
        S: Subject,
        O: Persisted,
    {
        let (object_type, pk) = identify(object)?;
        let permission = self.resolve_permission(&object_type, codename).await?;
        let subject_ref = subject.subject_ref();

        let candidate = NewAssignment {
            subject: subject_ref,
            permission,
            object: ObjectKey::for_model(self.model, &object_type, &pk),
        };
        let (assignment, created) = self.store.get_or_create(candidate).await?;

        let key = CacheKey::for_object(subject_ref, &object_type, &pk);
        cache_sync::append_if_cached(self.cache.as_ref(), &key, codename).await?;
        self.invalidate_members(subject, &object_type, &pk).await?;

        debug!(
            subject = %subject_ref,
            object = %assignment.object,
            codename,
            created,
            "granted object permission"
        );
        Ok(assignment)
    }

    /// Revoke the permission named `codename` on `object` from `subject`
    ///
    /// Matching rows are bulk-deleted by filter; nothing is fetched first,
    /// so no per-row deletion hooks fire. The catalog is not consulted:
    /// revoking a codename it never issued deletes nothing and is not an
    /// error.
    pub async fn revoke<S, O>(&self, codename: &str, subject: &S, object: &O) -> WardenResult<()>
    where
        S: Subject,
        O: Persisted,
    {
        let (object_type, pk) = identify(object)?;
        let subject_ref = subject.subject_ref();

        let filter = AssignmentFilter::any()
            .subject(subject_ref)
            .codename(codename)
            .object_type(object_type.clone())
            .object_pk(pk.clone());
        let deleted = self.store.delete_where(filter).await?;

        let key = CacheKey::for_object(subject_ref, &object_type, &pk);
        cache_sync::remove_first_if_cached(self.cache.as_ref(), &key, codename).await?;
        self.invalidate_members(subject, &object_type, &pk).await?;

        debug!(
            subject = %subject_ref,
            object_type = %object_type,
            pk = %pk,
            codename,
            deleted,
            "revoked object permission"
        );
        Ok(())
    }

    /// All persisted rows for `subject` on `object`'s type
    ///
    /// Type-scoped: rows the subject holds on sibling objects of the same
    /// type are included. Read-only; the cache holds codename lists, not
    /// rows, and is not consulted.
    pub async fn list_for_object<S, O>(
        &self,
        subject: &S,
        object: &O,
    ) -> WardenResult<Vec<ObjectPermissionAssignment>>
    where
        S: Subject,
        O: Persisted,
    {
        let (object_type, _pk) = identify(object)?;
        let filter = AssignmentFilter::any()
            .subject(subject.subject_ref())
            .object_type(object_type);
        self.store.find(filter).await
    }

    async fn resolve_permission(
        &self,
        object_type: &ObjectTypeId,
        codename: &str,
    ) -> WardenResult<PermissionRecord> {
        self.catalog
            .lookup(object_type, codename)
            .await?
            .ok_or_else(|| {
                WardenError::permission_not_found(format!(
                    "no permission {codename} for type {object_type}"
                ))
            })
    }

    /// Delete every member user's cached entry for the object.
    ///
    /// Member entries merge user-direct and group permissions and cannot be
    /// patched incrementally from here, so they are dropped and recomputed
    /// lazily on the next check. The fan-out is best-effort: it is not
    /// transactional across members, and a member invalidated before a
    /// crash stays invalidated while the rest go stale until expiry.
    async fn invalidate_members<S: Subject>(
        &self,
        subject: &S,
        object_type: &ObjectTypeId,
        pk: &ObjectPk,
    ) -> WardenResult<()> {
        let members = subject.member_users(self.directory.as_ref()).await?;
        for member in members {
            let key = CacheKey::for_object(SubjectRef::User(member), object_type, pk);
            self.cache.delete(&key).await?;
        }
        Ok(())
    }
}

/// Resolve the target object's identity, rejecting unpersisted objects
fn identify<O: Persisted>(object: &O) -> WardenResult<(ObjectTypeId, ObjectPk)> {
    let object_type = object.object_type();
    let pk = object.primary_key().ok_or_else(|| {
        WardenError::object_not_persisted(format!(
            "object of type {object_type} needs to be persisted first"
        ))
    })?;
    Ok((object_type, pk))
}
