//! Storage implementations that live outside the document store

mod memory;

pub use memory::InMemoryUserRepository;
