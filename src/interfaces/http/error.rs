//! DomainError → HTTP response mapping
//!
//! The one place where domain rejections become status codes. Handlers
//! return `Result<_, ApiError>` and use `?` on service calls; every
//! variant maps to the same status no matter which endpoint raised it.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::common::ApiResponse;
use crate::domain::DomainError;

/// Wrapper turning a [`DomainError`] into an HTTP response.
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

fn status_for(e: &DomainError) -> StatusCode {
    match e {
        DomainError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        DomainError::Unauthorized(_) => StatusCode::FORBIDDEN,
        DomainError::DuplicateUsername(_) => StatusCode::CONFLICT,
        DomainError::CannotDeleteSelf => StatusCode::CONFLICT,
        DomainError::InvalidTransition { .. } => StatusCode::CONFLICT,
        DomainError::IssueAlreadyActive(_) => StatusCode::CONFLICT,
        DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::AlreadyResolved(_) => StatusCode::CONFLICT,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        // Storage details stay server-side; everything else is a
        // deterministic caller-facing rejection and safe to echo.
        let message = match &self.0 {
            DomainError::Storage(detail) => {
                tracing::error!(%detail, "storage error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&DomainError::InvalidCredentials),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for(&DomainError::Unauthorized("x".into())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_for(&DomainError::IssueAlreadyActive("c1".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&DomainError::InvalidInput("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&DomainError::NotFound {
                entity: "Cabin",
                field: "id",
                value: "c9".into()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&DomainError::Storage("db down".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_detail_is_not_echoed() {
        let resp = ApiError(DomainError::Storage("secret dsn".into())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
