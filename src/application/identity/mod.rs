//! Identity and account management

pub mod service;

pub use service::{AuthResult, UserService};
