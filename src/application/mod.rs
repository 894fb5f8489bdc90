//! Application layer: business logic and use-case orchestration.
//!
//! Services consume the domain repository traits and never touch HTTP or
//! storage concerns directly. The authenticated actor is explicit input to
//! every mutating call; there is no ambient "current user" state here.

pub mod activity;
pub mod authorize;
pub mod board;
pub mod identity;

pub use activity::ActivityService;
pub use board::BoardService;
pub use identity::{AuthResult, UserService};
