//! Target-object identity types
//!
//! Assignments reference their target object through a stable type
//! identifier plus a primary key. Objects expose both through the
//! [`Persisted`] trait; an object whose primary key is still `None` has not
//! been persisted and cannot carry permissions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable type identifier for a persistable object kind
///
/// Plays the role of a content-type label, e.g. `"docs.document"`. Two
/// objects of the same kind must report the same identifier across
/// processes and restarts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectTypeId(String);

impl ObjectTypeId {
    /// Create a type identifier from its label
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Label as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectTypeId {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// Stringified primary key of a persisted object
///
/// Stored as text so one assignment model can reference objects whose
/// native keys are integers, UUIDs, or composite strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectPk(String);

impl ObjectPk {
    /// Create a primary key from its string form
    pub fn new(pk: impl Into<String>) -> Self {
        Self(pk.into())
    }

    /// Key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectPk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectPk {
    fn from(pk: &str) -> Self {
        Self::new(pk)
    }
}

/// Identity surface a target object exposes to the permission layer
///
/// The assigners resolve both halves of an object's identity through this
/// trait and never look at the object otherwise.
pub trait Persisted {
    /// Stable type identifier for this object's kind
    fn object_type(&self) -> ObjectTypeId;

    /// Primary key, or `None` while the object has not been persisted
    fn primary_key(&self) -> Option<ObjectPk>;
}
