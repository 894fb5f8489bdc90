//! User management handlers
//!
//! Thin wrappers over `UserService`; the admin-only check and the
//! duplicate/self-delete rules live in the service, not here. The acting
//! admin comes from the auth middleware and is passed into every call.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{CreateUserRequest, UpdateUserRequest, UserDto};
use crate::application::identity::UserService;
use crate::auth::CurrentUser;
use crate::domain::{DomainError, Role, UserPatch};
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};
use crate::interfaces::http::error::ApiError;

/// User handler state
#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService>,
}

fn parse_role(s: &str) -> Result<Role, ApiError> {
    Role::parse(s)
        .ok_or_else(|| DomainError::InvalidInput(format!("unknown role '{}'", s)).into())
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User list", body = ApiResponse<Vec<UserDto>>),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_users(
    State(state): State<UserHandlerState>,
) -> Result<Json<ApiResponse<Vec<UserDto>>>, ApiError> {
    let users = state.user_service.list_users().await?;
    let items = users.into_iter().map(UserDto::from).collect();
    Ok(Json(ApiResponse::success(items)))
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserDto>),
        (status = 403, description = "Actor is not an admin"),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    Extension(CurrentUser(actor)): Extension<CurrentUser>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserDto>>), ApiError> {
    let role = parse_role(&request.role)?;
    let user = state
        .user_service
        .add_user(&request.username, &request.password, role, &actor)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(UserDto::from(user))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserDto>),
        (status = 403, description = "Actor is not an admin"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
    Extension(CurrentUser(actor)): Extension<CurrentUser>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let role = request.role.as_deref().map(parse_role).transpose()?;
    let patch = UserPatch {
        username: request.username,
        password: request.password,
        role,
    };
    let user = state.user_service.update_user(&id, patch, &actor).await?;
    Ok(Json(ApiResponse::success(UserDto::from(user))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = ApiResponse<Object>),
        (status = 403, description = "Actor is not an admin"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Cannot delete own account")
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
    Extension(CurrentUser(actor)): Extension<CurrentUser>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.user_service.delete_user(&id, &actor).await?;
    Ok(Json(ApiResponse::success(())))
}
