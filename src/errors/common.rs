//! GraphQL conversion for store errors
//!
//! The message is kept as-is; only a `code` extension is added so clients
//! can branch on it.

use async_graphql::{Error as GraphQLError, ErrorExtensions};

use super::StoreError;

/// Convert domain errors to GraphQL errors with error codes
pub trait ToGraphQLError {
    fn to_graphql_error(&self) -> GraphQLError;
}

impl ToGraphQLError for StoreError {
    fn to_graphql_error(&self) -> GraphQLError {
        GraphQLError::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.error_code());

            match self {
                StoreError::InvalidId(id) => {
                    e.set("id", id.as_str());
                }
                StoreError::Validation { field, .. } => {
                    e.set("field", field.as_str());
                }
                _ => {}
            }
        })
    }
}

/// Extension trait for mapping store results into GraphQL results
pub trait ResultExt<T> {
    fn into_graphql(self) -> async_graphql::Result<T>;
}

impl<T> ResultExt<T> for Result<T, StoreError> {
    fn into_graphql(self) -> async_graphql::Result<T> {
        self.map_err(|e| {
            if e.is_client_error() {
                tracing::warn!("Rejected request: {}", e);
            } else {
                tracing::error!("Store operation failed: {}", e);
            }
            e.to_graphql_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_id_extensions() {
        let err = StoreError::InvalidId("xyz".to_string()).to_graphql_error();
        assert_eq!(err.message, "Invalid identifier 'xyz'");

        let extensions = err.extensions.expect("extensions should be set");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("INVALID_ID"))
        );
        assert_eq!(
            extensions.get("id"),
            Some(&async_graphql::Value::from("xyz"))
        );
    }

    #[test]
    fn test_result_ext_passes_ok_through() {
        let ok: Result<i32, StoreError> = Ok(7);
        assert_eq!(ok.into_graphql().unwrap(), 7);
    }

    #[test]
    fn test_result_ext_maps_backend_failure() {
        let failed: Result<i32, StoreError> =
            Err(sea_orm::DbErr::Custom("disk full".to_string()).into());

        let err = failed.into_graphql().unwrap_err();
        assert!(err.message.contains("disk full"));
        assert_eq!(
            err.extensions.and_then(|ext| ext.get("code").cloned()),
            Some(async_graphql::Value::from("DATABASE_ERROR"))
        );
    }
}
