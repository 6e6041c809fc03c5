//! # Warden Core - Foundation for Object-Level Permissions
//!
//! **Purpose**: Define the identity types, persisted data model, error
//! system, and effect contracts shared by every warden crate.
//!
//! This crate holds pure types and trait definitions only:
//! - YES Subject and object identity newtypes
//! - YES The persisted assignment row model and store filters
//! - YES Cache-key derivation shared with the read path
//! - YES Effect trait definitions for the four external collaborators
//! - NO effect handler implementations (those live in `warden-effects`)
//! - NO grant/revoke orchestration (that's `warden-grants`)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Persisted assignment rows, object keys, and store filters
pub mod assignment;

/// Cache-key derivation shared between assigners and the read path
pub mod cache_key;

/// Effect trait definitions for external collaborators
pub mod effects;

/// Unified warden error types
pub mod errors;

/// Subject identifier types
pub mod identity;

/// Target-object identity types
pub mod object;

/// Permission records resolved from the catalog
pub mod permission;

pub use assignment::{
    AssignmentFilter, AssignmentId, AssignmentModel, NewAssignment, ObjectKey,
    ObjectPermissionAssignment,
};
pub use cache_key::CacheKey;
pub use errors::{WardenError, WardenResult};
pub use identity::{GroupId, SubjectRef, UserId};
pub use object::{ObjectPk, ObjectTypeId, Persisted};
pub use permission::PermissionRecord;
