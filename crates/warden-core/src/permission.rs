//! Permission records resolved from the catalog

use crate::object::ObjectTypeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical permission identified by (object type, codename)
///
/// Owned by the permission catalog: assigners look records up and never
/// create them. Immutable once resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionRecord {
    /// Object type the permission applies to
    pub object_type: ObjectTypeId,
    /// Machine codename, e.g. `can_edit`
    pub codename: String,
    /// Human-readable name
    pub name: String,
}

impl PermissionRecord {
    /// Create a permission record
    pub fn new(
        object_type: ObjectTypeId,
        codename: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            object_type,
            codename: codename.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for PermissionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.object_type, self.codename)
    }
}
