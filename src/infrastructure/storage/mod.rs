//! In-memory repositories

pub mod memory;

pub use memory::InMemoryStore;
