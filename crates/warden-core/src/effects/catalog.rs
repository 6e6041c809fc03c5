//! Permission catalog contract

use crate::errors::WardenResult;
use crate::object::ObjectTypeId;
use crate::permission::PermissionRecord;
use async_trait::async_trait;

/// Resolves a (object type, codename) pair to its canonical permission
/// record
#[async_trait]
pub trait PermissionCatalogEffects: Send + Sync {
    /// Canonical record for `codename` on `object_type`, or `None` when the
    /// catalog knows no such permission
    async fn lookup(
        &self,
        object_type: &ObjectTypeId,
        codename: &str,
    ) -> WardenResult<Option<PermissionRecord>>;
}
