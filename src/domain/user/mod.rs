//! User aggregate
//!
//! Contains the User entity, Role enum, and repository interface.

pub mod model;
pub mod repository;

pub use model::{Role, User, UserPatch};
pub use repository::UserRepository;
