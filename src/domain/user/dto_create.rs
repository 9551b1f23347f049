use validator::{Validate, ValidationErrors};

use crate::domain::{DomainError, DomainResult};

/// Fields checked in this order so the reported message is deterministic.
const FIELD_ORDER: [&str; 2] = ["name", "age"];

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct CreateUserDto {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(range(min = 1, message = "age must be positive"))]
    pub age: i64,
}

/// Reject a user lacking a name or having a non-positive age.
pub fn validate_user(dto: &CreateUserDto) -> DomainResult<()> {
    dto.validate()
        .map_err(|errors| DomainError::Validation(first_message(&errors)))
}

fn first_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    FIELD_ORDER
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "validation failed".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(name: &str, age: i64) -> CreateUserDto {
        CreateUserDto {
            name: name.to_string(),
            age,
        }
    }

    #[test]
    fn accepts_named_adult() {
        assert!(validate_user(&dto("Alice", 30)).is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = validate_user(&dto("", 30)).unwrap_err();
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn non_positive_age_is_rejected() {
        for age in [0, -1, i64::MIN] {
            let err = validate_user(&dto("Bob", age)).unwrap_err();
            assert_eq!(err.to_string(), "age must be positive");
        }
    }

    #[test]
    fn name_is_reported_before_age() {
        let err = validate_user(&dto("", 0)).unwrap_err();
        assert_eq!(err.to_string(), "name is required");
    }
}
