//! # Cabin Board
//!
//! Multi-role status board for a lodging property. Reception,
//! housekeeping and technical staff track the occupancy, cleanliness and
//! issue state of a fixed set of cabins; every mutating action is
//! recorded in an append-only activity log.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: entities, enums, errors and repository traits
//! - **application**: business logic — the cabin state machine, identity
//!   management and activity log queries
//! - **infrastructure**: SeaORM persistence and the in-memory store
//! - **auth**: JWT session tokens and the Axum auth middleware
//! - **interfaces**: REST API with Swagger documentation

pub mod application;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::create_api_router;
