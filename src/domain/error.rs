//! Domain errors

use std::time::Duration;

use thiserror::Error;

/// Domain-level error types
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// Identifier is not a valid 24-character hex ObjectId
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// Input rejected before reaching the store
    #[error("{0}")]
    Validation(String),

    /// No record matched the identifier
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },

    /// Storage/database error, carries the driver message
    #[error("{0}")]
    Storage(String),

    /// Store call did not finish within its deadline
    #[error("operation timed out after {0:?}")]
    Timeout(Duration),
}

impl DomainError {
    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "User",
            id: id.into(),
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity() {
        let err = DomainError::user_not_found("65f0c0ffee0000000000abcd");
        assert_eq!(err.to_string(), "User not found");
    }

    #[test]
    fn validation_message_is_passed_through() {
        let err = DomainError::Validation("name is required".to_string());
        assert_eq!(err.to_string(), "name is required");
    }
}
