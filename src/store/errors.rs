//! Record store error types.

use thiserror::Error;

/// Result type for record store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by a record store backend
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No record exists under the requested id
    #[error("no cupcake with id {id}")]
    NotFound { id: i64 },

    /// The backend could not be reached or failed mid-operation
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_id() {
        let err = StoreError::NotFound { id: 42 };
        assert_eq!(err.to_string(), "no cupcake with id 42");
    }

    #[test]
    fn test_unavailable_carries_reason() {
        let err = StoreError::Unavailable("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }
}
