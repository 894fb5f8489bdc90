//! Database entities

pub mod cabin;
pub mod issue;
pub mod log_entry;
pub mod user;
