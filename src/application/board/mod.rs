//! Cabin state machine and issue tracking

pub mod service;

pub use service::BoardService;
