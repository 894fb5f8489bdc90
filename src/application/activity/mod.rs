//! Activity log read side

pub mod service;

pub use service::ActivityService;
