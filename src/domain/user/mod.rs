//! User aggregate
//!
//! Contains the User entity, the create DTO with its validation, and the
//! repository interface.

pub mod model;
pub mod repository;

mod dto_create;

pub use model::{parse_user_id, User};

pub use dto_create::{validate_user, CreateUserDto};

pub use repository::UserRepositoryInterface;
