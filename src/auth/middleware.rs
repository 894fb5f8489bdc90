//! Authentication middleware for Axum

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use super::jwt::{verify_token, JwtConfig};
use crate::domain::{RepositoryProvider, User};

/// Authentication state shared by all protected routes
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
    pub repos: Arc<dyn RepositoryProvider>,
}

/// The authenticated actor, loaded fresh from the user store.
///
/// Handlers take this as an `Extension` and pass the inner [`User`] into
/// every service call — the core never reads ambient session state. The
/// lookup is by the token's subject id, so deleted accounts lose access
/// immediately and role changes take effect on the next request.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

/// Extract token from Authorization header
fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix("Bearer ")
}

/// JWT authentication middleware - requires a valid token for a live user
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(String::from);
    let Some(auth_header) = auth_header else {
        return auth_error_response("Missing authentication token");
    };

    let Some(token) = extract_token(&auth_header) else {
        return auth_error_response("Invalid authentication token");
    };

    let claims = match verify_token(token, &auth_state.jwt_config) {
        Ok(claims) => claims,
        Err(_) => return auth_error_response("Invalid or expired token"),
    };

    // The token is only a hint; the account record is authoritative.
    let user = match auth_state.repos.users().find_by_id(&claims.sub).await {
        Ok(Some(user)) => user,
        Ok(None) => return auth_error_response("Account no longer exists"),
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "user lookup failed" })),
            )
                .into_response()
        }
    };

    request.extensions_mut().insert(CurrentUser(user));
    next.run(request).await
}

fn auth_error_response(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "success": false, "error": message })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_token() {
        assert_eq!(extract_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_token("Basic dXNlcjpwdw=="), None);
        assert_eq!(extract_token(""), None);
    }
}
