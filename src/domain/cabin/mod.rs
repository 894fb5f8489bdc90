//! Cabin aggregate
//!
//! The cabin entity, its status enum, and repository interface. The
//! transition rules over these states live in `application::board`.

pub mod model;
pub mod repository;

pub use model::{Cabin, CabinStatus};
pub use repository::CabinRepository;
