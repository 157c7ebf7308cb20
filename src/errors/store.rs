//! Document store error types
//!
//! Every failure a store backend can produce is expressed as a [`StoreError`].
//! Messages are passed through to GraphQL clients unchanged.
//!
//! # Examples
//!
//! ```rust
//! use wilder_api::errors::StoreError;
//!
//! let err = StoreError::InvalidId("not-an-id".to_string());
//! assert_eq!(err.error_code(), "INVALID_ID");
//! assert!(err.is_client_error());
//! ```

use thiserror::Error;

/// Errors raised by a document store backend
#[derive(Error, Debug)]
pub enum StoreError {
    /// Identifier does not match the backend's identifier format
    #[error("Invalid identifier '{0}'")]
    InvalidId(String),

    /// Identifier was empty or otherwise rejected before reaching the store
    #[error("Validation failed for '{field}': {reason}")]
    Validation {
        /// Argument that failed validation
        field: String,
        /// Human-readable reason
        reason: String,
    },

    /// Connection string scheme has no matching backend
    #[error("Unsupported database URL '{0}'")]
    UnsupportedUrl(String),

    /// SQL backend operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Embedded skills could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// MongoDB backend operation failed
    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

impl StoreError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Stable code attached to GraphQL error extensions
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::InvalidId(_) => "INVALID_ID",
            StoreError::Validation { .. } => "VALIDATION_FAILED",
            StoreError::UnsupportedUrl(_) => "CONFIGURATION_ERROR",
            StoreError::Database(_) => "DATABASE_ERROR",
            StoreError::Serialization(_) => "SERIALIZATION_ERROR",
            #[cfg(feature = "mongodb")]
            StoreError::Mongo(_) => "DATABASE_ERROR",
        }
    }

    /// Whether the caller supplied bad input, as opposed to a backend failure
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            StoreError::InvalidId(_) | StoreError::Validation { .. }
        )
    }
}
