//! Persisted assignment rows, object keys, and store filters

use crate::identity::SubjectRef;
use crate::object::{ObjectPk, ObjectTypeId};
use crate::permission::PermissionRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier for a persisted assignment row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssignmentId(pub Uuid);

impl AssignmentId {
    /// Create a new random assignment ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for AssignmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "assignment-{}", self.0)
    }
}

/// How an assignment model references its target object
///
/// Declared once when an assigner is constructed and fixed for the model's
/// lifetime. The choice is a static capability of the concrete model, never
/// discovered from row shape at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentModel {
    /// Rows store a generic (object type, primary key) pair
    Generic,
    /// Rows reference one concrete object table directly
    Direct,
}

/// Stored object reference under the chosen assignment model
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKey {
    /// Generic reference: object type plus stringified primary key
    Generic {
        /// Type of the referenced object
        object_type: ObjectTypeId,
        /// Primary key of the referenced object
        pk: ObjectPk,
    },
    /// Direct reference into a concrete object table
    Direct {
        /// Primary key of the referenced object
        pk: ObjectPk,
    },
}

impl ObjectKey {
    /// Build the key referencing `object_type`/`pk` under `model`
    pub fn for_model(model: AssignmentModel, object_type: &ObjectTypeId, pk: &ObjectPk) -> Self {
        match model {
            AssignmentModel::Generic => Self::Generic {
                object_type: object_type.clone(),
                pk: pk.clone(),
            },
            AssignmentModel::Direct => Self::Direct { pk: pk.clone() },
        }
    }

    /// Primary key stored in this reference
    pub fn pk(&self) -> &ObjectPk {
        match self {
            Self::Generic { pk, .. } | Self::Direct { pk } => pk,
        }
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic { object_type, pk } => write!(f, "{object_type}#{pk}"),
            Self::Direct { pk } => write!(f, "#{pk}"),
        }
    }
}

/// One persisted object-permission row
///
/// At most one row exists per (subject, permission, object) triple: grant is
/// get-or-create against the store's uniqueness guarantee and revoke is a
/// bulk filtered delete. Rows are never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectPermissionAssignment {
    /// Row identifier
    pub id: AssignmentId,
    /// Subject holding the permission
    pub subject: SubjectRef,
    /// Permission held
    pub permission: PermissionRecord,
    /// Target object reference
    pub object: ObjectKey,
}

/// Candidate row for a get-or-create call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAssignment {
    /// Subject to hold the permission
    pub subject: SubjectRef,
    /// Permission to hold
    pub permission: PermissionRecord,
    /// Target object reference
    pub object: ObjectKey,
}

impl NewAssignment {
    /// Whether `row` already occupies this candidate's unique triple
    pub fn matches(&self, row: &ObjectPermissionAssignment) -> bool {
        row.subject == self.subject && row.permission == self.permission && row.object == self.object
    }
}

/// Conjunctive filter over assignment rows
///
/// Unset fields match any row. `object_type` matches the permission's
/// object type; `object_pk` matches the stored object key's primary key
/// under either assignment model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentFilter {
    /// Subject to match
    pub subject: Option<SubjectRef>,
    /// Permission codename to match
    pub codename: Option<String>,
    /// Permission object type to match
    pub object_type: Option<ObjectTypeId>,
    /// Object primary key to match
    pub object_pk: Option<ObjectPk>,
}

impl AssignmentFilter {
    /// Filter matching every row
    pub fn any() -> Self {
        Self::default()
    }

    /// Restrict to rows held by `subject`
    pub fn subject(mut self, subject: SubjectRef) -> Self {
        self.subject = Some(subject);
        self
    }

    /// Restrict to rows for permission `codename`
    pub fn codename(mut self, codename: impl Into<String>) -> Self {
        self.codename = Some(codename.into());
        self
    }

    /// Restrict to rows whose permission applies to `object_type`
    pub fn object_type(mut self, object_type: ObjectTypeId) -> Self {
        self.object_type = Some(object_type);
        self
    }

    /// Restrict to rows referencing the object with primary key `pk`
    pub fn object_pk(mut self, pk: ObjectPk) -> Self {
        self.object_pk = Some(pk);
        self
    }

    /// Whether `row` satisfies every set field
    pub fn matches(&self, row: &ObjectPermissionAssignment) -> bool {
        if let Some(subject) = &self.subject {
            if row.subject != *subject {
                return false;
            }
        }
        if let Some(codename) = &self.codename {
            if row.permission.codename != *codename {
                return false;
            }
        }
        if let Some(object_type) = &self.object_type {
            if row.permission.object_type != *object_type {
                return false;
            }
        }
        if let Some(pk) = &self.object_pk {
            if row.object.pk() != pk {
                return false;
            }
        }
        true
    }
}
