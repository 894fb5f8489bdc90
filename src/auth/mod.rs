//! JWT authentication
//!
//! - `jwt`: token creation/verification and claims
//! - `middleware`: Axum layer that turns a bearer token into a [`middleware::CurrentUser`]

pub mod jwt;
pub mod middleware;

pub use jwt::{create_token, verify_token, Claims, JwtConfig};
pub use middleware::{auth_middleware, AuthState, CurrentUser};
