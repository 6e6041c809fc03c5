//! Unified error system for warden crates
//!
//! One error type covers every operation across the workspace. Collaborator
//! failures (store, cache, directory) are constructed by handler
//! implementations and propagated by the assigners unmodified; no retry or
//! wrapping is layered on top.

use serde::{Deserialize, Serialize};

/// Unified error type for all warden operations
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum WardenError {
    /// Target object lacks a stable identity; persist it before assigning
    #[error("Object not persisted: {message}")]
    ObjectNotPersisted {
        /// Description of the unpersisted object
        message: String,
    },

    /// Catalog has no permission matching the given type and codename
    #[error("Permission not found: {message}")]
    PermissionNotFound {
        /// Description of the missing permission
        message: String,
    },

    /// Persisted-store operation failed
    #[error("Store error: {message}")]
    Store {
        /// Description of the store failure
        message: String,
    },

    /// Cache operation failed
    #[error("Cache error: {message}")]
    Cache {
        /// Description of the cache failure
        message: String,
    },

    /// User-directory operation failed
    #[error("Directory error: {message}")]
    Directory {
        /// Description of the directory failure
        message: String,
    },
}

impl WardenError {
    /// Create an object-not-persisted error
    pub fn object_not_persisted(message: impl Into<String>) -> Self {
        Self::ObjectNotPersisted {
            message: message.into(),
        }
    }

    /// Create a permission-not-found error
    pub fn permission_not_found(message: impl Into<String>) -> Self {
        Self::PermissionNotFound {
            message: message.into(),
        }
    }

    /// Create a store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Create a cache error
    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    /// Create a directory error
    pub fn directory(message: impl Into<String>) -> Self {
        Self::Directory {
            message: message.into(),
        }
    }
}

/// Result alias for warden operations
pub type WardenResult<T> = Result<T, WardenError>;
