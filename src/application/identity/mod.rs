//! Identity bounded context — user create/read/delete use-cases.

pub mod service;

pub use service::{UserService, DEFAULT_OPERATION_TIMEOUT};
