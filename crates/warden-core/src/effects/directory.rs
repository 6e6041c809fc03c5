//! User-directory contract for group membership reads

use crate::errors::WardenResult;
use crate::identity::{GroupId, UserId};
use async_trait::async_trait;

/// Read-only view of group membership
///
/// Queried on demand during group-permission mutations and never cached by
/// this core. The returned list is a snapshot at call time; membership
/// changes racing with a fan-out are tolerated.
#[async_trait]
pub trait DirectoryEffects: Send + Sync {
    /// Users currently belonging to `group`
    async fn members_of(&self, group: &GroupId) -> WardenResult<Vec<UserId>>;
}
