//! Application layer

pub mod identity;

pub use identity::{UserService, DEFAULT_OPERATION_TIMEOUT};
