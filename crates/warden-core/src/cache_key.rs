//! Cache-key derivation shared between assigners and the read path
//!
//! Every component touching the per-(subject, object) permission cache
//! derives its key through [`CacheKey::for_object`], so a grant, a revoke,
//! and the read-path checker always address the same entry.

use crate::identity::SubjectRef;
use crate::object::{ObjectPk, ObjectTypeId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key addressing one subject's cached permission list for one object
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive the key for `subject`'s cached permissions on the object
    /// identified by `object_type` and `pk`.
    ///
    /// Pure and deterministic: equal inputs derive equal keys, and the
    /// subject kind is part of the key, so a user and a group sharing a
    /// UUID never collide.
    pub fn for_object(subject: SubjectRef, object_type: &ObjectTypeId, pk: &ObjectPk) -> Self {
        Self(format!("perms:{subject}:{object_type}:{pk}"))
    }

    /// Key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
