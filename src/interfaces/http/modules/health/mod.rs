//! Health module — store reachability

pub mod handlers;

pub use handlers::*;
