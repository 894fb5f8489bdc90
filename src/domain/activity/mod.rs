//! Activity log aggregate

pub mod model;
pub mod repository;

pub use model::{actions, LogEntry, NewLogEntry};
pub use repository::ActivityLogRepository;
