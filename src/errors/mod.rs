//! Error types for the wilder store and its GraphQL surface
//!
//! Store failures are never translated into other categories: the message a
//! backend produces is the message the client sees. When the `graphql` feature
//! is enabled, [`ToGraphQLError`] adds a machine-readable `code` extension.

pub mod store;

#[cfg(feature = "graphql")]
pub mod common;

pub use store::StoreError;

#[cfg(feature = "graphql")]
pub use common::{ResultExt, ToGraphQLError};

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
