//! Users module — create, fetch and delete

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
