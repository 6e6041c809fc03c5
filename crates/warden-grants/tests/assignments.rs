//! End-to-end behavior of the user and group assigners over the in-memory
//! handlers: persisted-store idempotence, cache patching, and group
//! membership fan-out.

use std::sync::Arc;
use warden_core::effects::{AssignmentStoreEffects, PermissionCacheEffects};
use warden_core::{
    AssignmentFilter, AssignmentModel, CacheKey, GroupId, ObjectPk, ObjectTypeId,
    PermissionRecord, Persisted, SubjectRef, UserId, WardenError,
};
use warden_effects::{
    MemoryAssignmentStore, MemoryDirectory, MemoryPermissionCache, MemoryPermissionCatalog,
};
use warden_grants::{GroupPermissionAssigner, UserPermissionAssigner};

const DOCUMENT: &str = "docs.document";

struct Document {
    id: Option<u32>,
}

impl Document {
    fn saved(id: u32) -> Self {
        Self { id: Some(id) }
    }

    fn unsaved() -> Self {
        Self { id: None }
    }
}

impl Persisted for Document {
    fn object_type(&self) -> ObjectTypeId {
        ObjectTypeId::new(DOCUMENT)
    }

    fn primary_key(&self) -> Option<ObjectPk> {
        self.id.map(|id| ObjectPk::new(id.to_string()))
    }
}

struct Harness {
    store: MemoryAssignmentStore,
    cache: MemoryPermissionCache,
    directory: MemoryDirectory,
    users: UserPermissionAssigner,
    groups: GroupPermissionAssigner,
}

async fn harness() -> Harness {
    let store = MemoryAssignmentStore::new();
    let cache = MemoryPermissionCache::new();
    let catalog = MemoryPermissionCatalog::new();
    let directory = MemoryDirectory::new();
    for (codename, name) in [("view", "Can view document"), ("edit", "Can edit document")] {
        catalog
            .register(PermissionRecord::new(
                ObjectTypeId::new(DOCUMENT),
                codename,
                name,
            ))
            .await;
    }
    let users = UserPermissionAssigner::new(
        Arc::new(store.clone()),
        Arc::new(catalog.clone()),
        Arc::new(cache.clone()),
        AssignmentModel::Generic,
    );
    let groups = GroupPermissionAssigner::new(
        Arc::new(store.clone()),
        Arc::new(catalog.clone()),
        Arc::new(cache.clone()),
        Arc::new(directory.clone()),
        AssignmentModel::Generic,
    );
    Harness {
        store,
        cache,
        directory,
        users,
        groups,
    }
}

fn entry_key(subject: SubjectRef, document: &Document) -> CacheKey {
    CacheKey::for_object(
        subject,
        &document.object_type(),
        &document.primary_key().expect("test document is persisted"),
    )
}

fn codenames(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[tokio::test]
async fn grant_is_idempotent_in_the_store() {
    let h = harness().await;
    let user = UserId::new();
    let doc = Document::saved(1);

    let first = h.users.grant("view", &user, &doc).await.unwrap();
    let second = h.users.grant("view", &user, &doc).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(h.store.len().await, 1);

    let listed = h.users.list_for_object(&user, &doc).await.unwrap();
    assert_eq!(listed, vec![first]);
}

#[tokio::test]
async fn grant_then_revoke_leaves_no_rows() {
    let h = harness().await;
    let user = UserId::new();
    let doc = Document::saved(1);

    h.users.grant("view", &user, &doc).await.unwrap();
    h.users.revoke("view", &user, &doc).await.unwrap();

    assert!(h.store.is_empty().await);
}

#[tokio::test]
async fn revoke_scopes_to_the_exact_object() {
    let h = harness().await;
    let user = UserId::new();
    let doc = Document::saved(1);
    let sibling = Document::saved(2);

    h.users.grant("view", &user, &doc).await.unwrap();
    h.users.grant("view", &user, &sibling).await.unwrap();
    h.users.revoke("view", &user, &doc).await.unwrap();

    let remaining = h.store.find(AssignmentFilter::any()).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].object.pk(), &ObjectPk::new("2"));
}

#[tokio::test]
async fn grant_patches_a_populated_cache_entry_once() {
    let h = harness().await;
    let user = UserId::new();
    let doc = Document::saved(1);
    let key = entry_key(SubjectRef::User(user), &doc);

    h.cache.set(&key, codenames(&["edit"])).await.unwrap();
    h.users.grant("view", &user, &doc).await.unwrap();
    h.users.grant("view", &user, &doc).await.unwrap();

    assert_eq!(
        h.cache.get(&key).await.unwrap(),
        Some(codenames(&["edit", "view"]))
    );
}

#[tokio::test]
async fn grant_leaves_missing_cache_entries_unpopulated() {
    let h = harness().await;
    let user = UserId::new();
    let doc = Document::saved(1);
    let key = entry_key(SubjectRef::User(user), &doc);

    h.users.grant("view", &user, &doc).await.unwrap();

    assert_eq!(h.cache.get(&key).await.unwrap(), None);
}

#[tokio::test]
async fn revoke_patches_a_populated_cache_entry() {
    let h = harness().await;
    let user = UserId::new();
    let doc = Document::saved(1);
    let key = entry_key(SubjectRef::User(user), &doc);

    h.users.grant("view", &user, &doc).await.unwrap();
    h.cache.set(&key, codenames(&["view", "edit"])).await.unwrap();
    h.users.revoke("view", &user, &doc).await.unwrap();

    assert_eq!(h.cache.get(&key).await.unwrap(), Some(codenames(&["edit"])));
}

#[tokio::test]
async fn revoke_removes_only_the_first_cached_occurrence() {
    let h = harness().await;
    let user = UserId::new();
    let doc = Document::saved(1);
    let key = entry_key(SubjectRef::User(user), &doc);

    // A malformed entry with a duplicated codename loses exactly one copy.
    h.cache
        .set(&key, codenames(&["view", "edit", "view"]))
        .await
        .unwrap();
    h.users.revoke("view", &user, &doc).await.unwrap();

    assert_eq!(
        h.cache.get(&key).await.unwrap(),
        Some(codenames(&["edit", "view"]))
    );
}

#[tokio::test]
async fn revoke_of_a_codename_never_granted_is_quiet() {
    let h = harness().await;
    let user = UserId::new();
    let doc = Document::saved(1);

    h.users.grant("view", &user, &doc).await.unwrap();
    h.users.revoke("nonexistent", &user, &doc).await.unwrap();

    assert_eq!(h.store.len().await, 1);
}

#[tokio::test]
async fn unpersisted_objects_are_rejected_before_any_effect() {
    let h = harness().await;
    let user = UserId::new();
    let seeded = Document::saved(9);
    let seeded_key = entry_key(SubjectRef::User(user), &seeded);
    h.cache.set(&seeded_key, codenames(&["view"])).await.unwrap();

    let err = h
        .users
        .grant("view", &user, &Document::unsaved())
        .await
        .unwrap_err();
    assert!(matches!(err, WardenError::ObjectNotPersisted { .. }));

    let err = h
        .users
        .revoke("view", &user, &Document::unsaved())
        .await
        .unwrap_err();
    assert!(matches!(err, WardenError::ObjectNotPersisted { .. }));

    assert!(h.store.is_empty().await);
    assert_eq!(h.cache.len().await, 1);
    assert_eq!(
        h.cache.get(&seeded_key).await.unwrap(),
        Some(codenames(&["view"]))
    );
}

#[tokio::test]
async fn unknown_permissions_are_rejected_before_the_store() {
    let h = harness().await;
    let user = UserId::new();

    let err = h
        .users
        .grant("nonexistent", &user, &Document::saved(1))
        .await
        .unwrap_err();

    assert!(matches!(err, WardenError::PermissionNotFound { .. }));
    assert!(h.store.is_empty().await);
}

#[tokio::test]
async fn listing_spans_objects_of_the_same_type() {
    let h = harness().await;
    let user = UserId::new();
    let doc = Document::saved(1);
    let sibling = Document::saved(2);

    h.users.grant("view", &user, &doc).await.unwrap();
    h.users.grant("edit", &user, &sibling).await.unwrap();

    // Listing is scoped by the object's type, not its primary key.
    let listed = h.users.list_for_object(&user, &doc).await.unwrap();
    assert_eq!(listed.len(), 2);
}

#[tokio::test]
async fn listing_excludes_other_subjects() {
    let h = harness().await;
    let user = UserId::new();
    let other = UserId::new();
    let doc = Document::saved(1);

    h.users.grant("view", &user, &doc).await.unwrap();
    h.users.grant("view", &other, &doc).await.unwrap();

    let listed = h.users.list_for_object(&user, &doc).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].subject, SubjectRef::User(user));
}

#[tokio::test]
#[allow(deprecated)]
async fn deprecated_assign_still_grants() {
    let h = harness().await;
    let user = UserId::new();
    let doc = Document::saved(1);

    let assignment = h.users.assign("view", &user, &doc).await.unwrap();

    assert_eq!(assignment.permission.codename, "view");
    assert_eq!(h.store.len().await, 1);
}

#[tokio::test]
async fn group_grant_invalidates_member_entries_and_patches_its_own() {
    let h = harness().await;
    let group = GroupId::new();
    let (alice, bob) = (UserId::new(), UserId::new());
    let doc = Document::saved(1);
    h.directory.add_member(group, alice).await;
    h.directory.add_member(group, bob).await;

    let group_key = entry_key(SubjectRef::Group(group), &doc);
    let alice_key = entry_key(SubjectRef::User(alice), &doc);
    let bob_key = entry_key(SubjectRef::User(bob), &doc);
    h.cache.set(&group_key, codenames(&["edit"])).await.unwrap();
    h.cache.set(&alice_key, codenames(&["view"])).await.unwrap();
    h.cache.set(&bob_key, codenames(&["edit"])).await.unwrap();

    h.groups.grant("view", &group, &doc).await.unwrap();

    assert_eq!(
        h.cache.get(&group_key).await.unwrap(),
        Some(codenames(&["edit", "view"]))
    );
    assert_eq!(h.cache.get(&alice_key).await.unwrap(), None);
    assert_eq!(h.cache.get(&bob_key).await.unwrap(), None);
}

#[tokio::test]
async fn group_revoke_invalidates_member_entries() {
    let h = harness().await;
    let group = GroupId::new();
    let alice = UserId::new();
    let doc = Document::saved(1);
    h.directory.add_member(group, alice).await;

    h.groups.grant("view", &group, &doc).await.unwrap();

    let group_key = entry_key(SubjectRef::Group(group), &doc);
    let alice_key = entry_key(SubjectRef::User(alice), &doc);
    h.cache.set(&group_key, codenames(&["view"])).await.unwrap();
    h.cache.set(&alice_key, codenames(&["view"])).await.unwrap();

    h.groups.revoke("view", &group, &doc).await.unwrap();

    assert!(h.store.is_empty().await);
    assert_eq!(h.cache.get(&group_key).await.unwrap(), Some(Vec::new()));
    assert_eq!(h.cache.get(&alice_key).await.unwrap(), None);
}

#[tokio::test]
async fn group_fan_out_only_touches_the_mutated_object() {
    let h = harness().await;
    let group = GroupId::new();
    let alice = UserId::new();
    let doc = Document::saved(1);
    let sibling = Document::saved(2);
    h.directory.add_member(group, alice).await;

    let untouched_key = entry_key(SubjectRef::User(alice), &sibling);
    h.cache
        .set(&untouched_key, codenames(&["view"]))
        .await
        .unwrap();

    h.groups.grant("view", &group, &doc).await.unwrap();

    assert_eq!(
        h.cache.get(&untouched_key).await.unwrap(),
        Some(codenames(&["view"]))
    );
}

#[tokio::test]
async fn empty_group_fans_out_to_nobody() {
    let h = harness().await;
    let group = GroupId::new();
    let doc = Document::saved(1);
    let outsider = UserId::new();

    let outsider_key = entry_key(SubjectRef::User(outsider), &doc);
    h.cache
        .set(&outsider_key, codenames(&["edit"]))
        .await
        .unwrap();

    h.groups.grant("view", &group, &doc).await.unwrap();

    assert_eq!(
        h.cache.get(&outsider_key).await.unwrap(),
        Some(codenames(&["edit"]))
    );
}
