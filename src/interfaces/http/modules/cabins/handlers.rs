//! Cabin board handlers
//!
//! One endpoint per state-machine operation. Role gating, From-state
//! enforcement and log/rollback behavior all live in `BoardService`;
//! these wrappers only translate between HTTP shapes and the service.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use super::dto::{CabinDto, CheckInRequest, OverrideStatusRequest, ReportIssueRequest};
use crate::application::board::BoardService;
use crate::auth::CurrentUser;
use crate::domain::{CabinStatus, DomainError, IssueType};
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};
use crate::interfaces::http::error::ApiError;

/// Cabin handler state
#[derive(Clone)]
pub struct CabinHandlerState {
    pub board: Arc<BoardService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/cabins",
    tag = "Cabins",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Cabin board snapshot", body = ApiResponse<Vec<CabinDto>>),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_cabins(
    State(state): State<CabinHandlerState>,
) -> Result<Json<ApiResponse<Vec<CabinDto>>>, ApiError> {
    let cabins = state.board.list_cabins().await?;
    let items = cabins.into_iter().map(CabinDto::from).collect();
    Ok(Json(ApiResponse::success(items)))
}

#[utoipa::path(
    get,
    path = "/api/v1/cabins/{id}",
    tag = "Cabins",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Cabin ID")),
    responses(
        (status = 200, description = "Cabin details", body = ApiResponse<CabinDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_cabin(
    State(state): State<CabinHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<CabinDto>>, ApiError> {
    let cabin = state.board.get_cabin(&id).await?;
    Ok(Json(ApiResponse::success(CabinDto::from(cabin))))
}

#[utoipa::path(
    post,
    path = "/api/v1/cabins/{id}/check-in",
    tag = "Cabins",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Cabin ID")),
    request_body = CheckInRequest,
    responses(
        (status = 200, description = "Cabin is now occupied", body = ApiResponse<CabinDto>),
        (status = 403, description = "Role may not check in"),
        (status = 409, description = "Cabin is not empty and clean")
    )
)]
pub async fn check_in(
    State(state): State<CabinHandlerState>,
    Path(id): Path<String>,
    Extension(CurrentUser(actor)): Extension<CurrentUser>,
    ValidatedJson(request): ValidatedJson<CheckInRequest>,
) -> Result<Json<ApiResponse<CabinDto>>, ApiError> {
    let cabin = state
        .board
        .check_in(&id, request.guests, request.nights, &actor)
        .await?;
    Ok(Json(ApiResponse::success(CabinDto::from(cabin))))
}

#[utoipa::path(
    post,
    path = "/api/v1/cabins/{id}/check-out",
    tag = "Cabins",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Cabin ID")),
    responses(
        (status = 200, description = "Cabin is now empty and dirty", body = ApiResponse<CabinDto>),
        (status = 403, description = "Role may not check out"),
        (status = 409, description = "Cabin is not occupied")
    )
)]
pub async fn check_out(
    State(state): State<CabinHandlerState>,
    Path(id): Path<String>,
    Extension(CurrentUser(actor)): Extension<CurrentUser>,
) -> Result<Json<ApiResponse<CabinDto>>, ApiError> {
    let cabin = state.board.check_out(&id, &actor).await?;
    Ok(Json(ApiResponse::success(CabinDto::from(cabin))))
}

#[utoipa::path(
    post,
    path = "/api/v1/cabins/{id}/cleaning-done",
    tag = "Cabins",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Cabin ID")),
    responses(
        (status = 200, description = "Cabin is now empty and clean", body = ApiResponse<CabinDto>),
        (status = 403, description = "Role may not finish cleaning"),
        (status = 409, description = "Cabin is not dirty")
    )
)]
pub async fn cleaning_done(
    State(state): State<CabinHandlerState>,
    Path(id): Path<String>,
    Extension(CurrentUser(actor)): Extension<CurrentUser>,
) -> Result<Json<ApiResponse<CabinDto>>, ApiError> {
    let cabin = state.board.cleaning_done(&id, &actor).await?;
    Ok(Json(ApiResponse::success(CabinDto::from(cabin))))
}

#[utoipa::path(
    post,
    path = "/api/v1/cabins/{id}/issues",
    tag = "Cabins",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Cabin ID")),
    request_body = ReportIssueRequest,
    responses(
        (status = 200, description = "Issue reported", body = ApiResponse<CabinDto>),
        (status = 400, description = "Unknown issue type or blank description"),
        (status = 409, description = "Cabin already has an open issue")
    )
)]
pub async fn report_issue(
    State(state): State<CabinHandlerState>,
    Path(id): Path<String>,
    Extension(CurrentUser(actor)): Extension<CurrentUser>,
    ValidatedJson(request): ValidatedJson<ReportIssueRequest>,
) -> Result<Json<ApiResponse<CabinDto>>, ApiError> {
    let issue_type = IssueType::parse(&request.issue_type).ok_or_else(|| {
        DomainError::InvalidInput(format!("unknown issue type '{}'", request.issue_type))
    })?;
    let cabin = state
        .board
        .report_issue(&id, issue_type, &request.description, &actor)
        .await?;
    Ok(Json(ApiResponse::success(CabinDto::from(cabin))))
}

#[utoipa::path(
    post,
    path = "/api/v1/cabins/{id}/issues/resolve",
    tag = "Cabins",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Cabin ID")),
    responses(
        (status = 200, description = "Issue resolved, cabin is dirty", body = ApiResponse<CabinDto>),
        (status = 403, description = "Role may not resolve issues"),
        (status = 409, description = "Cabin has no open technical issue")
    )
)]
pub async fn resolve_issue(
    State(state): State<CabinHandlerState>,
    Path(id): Path<String>,
    Extension(CurrentUser(actor)): Extension<CurrentUser>,
) -> Result<Json<ApiResponse<CabinDto>>, ApiError> {
    let cabin = state.board.resolve_technical_issue(&id, &actor).await?;
    Ok(Json(ApiResponse::success(CabinDto::from(cabin))))
}

#[utoipa::path(
    post,
    path = "/api/v1/cabins/{id}/status",
    tag = "Cabins",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Cabin ID")),
    request_body = OverrideStatusRequest,
    responses(
        (status = 200, description = "Status overridden", body = ApiResponse<CabinDto>),
        (status = 400, description = "Unknown status value"),
        (status = 403, description = "Actor is not an admin")
    )
)]
pub async fn override_status(
    State(state): State<CabinHandlerState>,
    Path(id): Path<String>,
    Extension(CurrentUser(actor)): Extension<CurrentUser>,
    Json(request): Json<OverrideStatusRequest>,
) -> Result<Json<ApiResponse<CabinDto>>, ApiError> {
    let status = CabinStatus::parse(&request.status).ok_or_else(|| {
        DomainError::InvalidInput(format!("unknown status '{}'", request.status))
    })?;
    let cabin = state.board.admin_override(&id, status, &actor).await?;
    Ok(Json(ApiResponse::success(CabinDto::from(cabin))))
}
