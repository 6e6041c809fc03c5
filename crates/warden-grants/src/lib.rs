//! # Warden Grants - Object-Level Permission Assignment
//!
//! Grant, revoke, and query permissions scoped to a single object instance
//! for user and group subjects, keeping the external permission cache
//! coherent with the persisted assignment store.
//!
//! ## Cache consistency protocol
//!
//! Every mutation lands in the persisted store first, then patches the
//! per-(subject, object) cache entry: a grant appends the codename to a
//! populated entry, a revoke drops its first occurrence, and an absent
//! entry is left for the read path to populate lazily. Group mutations
//! additionally delete every member user's entry for the object, because a
//! member's entry is the union of user-direct and group permissions and
//! cannot be patched incrementally from here. The store effect and the
//! cache effect are not committed atomically: the store is the source of
//! truth and the cache is a best-effort mirror that self-heals on expiry or
//! invalidation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Generic grant/revoke engine shared by both assigners
pub mod assigner;

mod cache_sync;

/// Group-subject assigner with membership fan-out
pub mod group;

/// Subject capability seam for the generic engine
pub mod subject;

/// User-subject assigner
pub mod user;

pub use assigner::ObjectPermissionAssigner;
pub use group::GroupPermissionAssigner;
pub use subject::Subject;
pub use user::UserPermissionAssigner;
