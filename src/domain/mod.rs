//! Domain layer: user entity, validation rules and the storage port.

pub mod error;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use user::{parse_user_id, validate_user, CreateUserDto, User, UserRepositoryInterface};
