//! Persisted assignment store contract

use crate::assignment::{AssignmentFilter, NewAssignment, ObjectPermissionAssignment};
use crate::errors::WardenResult;
use async_trait::async_trait;

/// Persisted-relation store holding object-permission rows
///
/// The store enforces uniqueness of the (subject, permission, object)
/// triple: writers must go through `get_or_create` rather than a blind
/// insert, which is what keeps concurrent grants of the same triple from
/// producing duplicate rows. Deletion is bulk and filtered; no per-row
/// deletion hooks fire.
#[async_trait]
pub trait AssignmentStoreEffects: Send + Sync {
    /// Return the row occupying `candidate`'s unique triple, creating it if
    /// absent. The boolean reports whether a new row was created.
    async fn get_or_create(
        &self,
        candidate: NewAssignment,
    ) -> WardenResult<(ObjectPermissionAssignment, bool)>;

    /// Bulk-delete every row matching `filter`; returns the deleted count
    async fn delete_where(&self, filter: AssignmentFilter) -> WardenResult<u64>;

    /// All rows matching `filter`
    async fn find(&self, filter: AssignmentFilter) -> WardenResult<Vec<ObjectPermissionAssignment>>;
}
