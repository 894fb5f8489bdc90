//! Issue aggregate

pub mod model;
pub mod repository;

pub use model::{Issue, IssueType};
pub use repository::IssueRepository;
