//! # User CRUD Service
//!
//! HTTP service exposing create, fetch and delete operations for user
//! records stored in MongoDB.
//!
//! ## Architecture
//!
//! - **domain**: User entity, validation rules and the repository port
//! - **application**: Use-case orchestration with per-operation deadlines
//! - **infrastructure**: MongoDB and in-memory repositories
//! - **interfaces**: REST API (axum) with Swagger documentation
//! - **shared**: Infrastructure errors and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, InMemoryUserRepository, UserRepository};

// Re-export API router
pub use interfaces::http::{create_api_router, AppState};
