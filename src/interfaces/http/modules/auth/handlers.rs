//! Authentication handlers
//!
//! `login` is the only public endpoint; `me` lets a restarted client
//! rehydrate its identity from a stored token.

use std::sync::Arc;

use axum::{extract::State, Extension, Json};

use super::dto::{LoginRequest, LoginResponse};
use crate::application::identity::UserService;
use crate::auth::CurrentUser;
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};
use crate::interfaces::http::error::ApiError;
use crate::interfaces::http::modules::users::dto::UserDto;

/// Auth handler state
#[derive(Clone)]
pub struct AuthHandlerState {
    pub user_service: Arc<UserService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let result = state
        .user_service
        .login(&request.username, &request.password)
        .await?;
    Ok(Json(ApiResponse::success(LoginResponse::from(result))))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = ApiResponse<UserDto>),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn get_current_user(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Json<ApiResponse<UserDto>> {
    Json(ApiResponse::success(UserDto::from(user)))
}
