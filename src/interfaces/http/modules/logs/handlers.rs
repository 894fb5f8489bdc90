//! Activity log handlers
//!
//! `search` backs the audit page filter box; `my_recent_activity` backs
//! the profile page's "your last actions" panel.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Extension, Json,
};

use super::dto::{LogEntryDto, LogSearchParams, RecentActivityParams};
use crate::application::activity::ActivityService;
use crate::auth::CurrentUser;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::error::ApiError;

/// Log handler state
#[derive(Clone)]
pub struct LogHandlerState {
    pub activity: Arc<ActivityService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/logs",
    tag = "Activity Log",
    security(("bearer_auth" = [])),
    params(LogSearchParams),
    responses(
        (status = 200, description = "Matching entries in log order", body = ApiResponse<Vec<LogEntryDto>>),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn search(
    State(state): State<LogHandlerState>,
    Query(params): Query<LogSearchParams>,
) -> Result<Json<ApiResponse<Vec<LogEntryDto>>>, ApiError> {
    let entries = state.activity.search(&params.search).await?;
    let items = entries.into_iter().map(LogEntryDto::from).collect();
    Ok(Json(ApiResponse::success(items)))
}

#[utoipa::path(
    get,
    path = "/api/v1/logs/me",
    tag = "Activity Log",
    security(("bearer_auth" = [])),
    params(RecentActivityParams),
    responses(
        (status = 200, description = "Caller's entries, most recent first", body = ApiResponse<Vec<LogEntryDto>>),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn my_recent_activity(
    State(state): State<LogHandlerState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(params): Query<RecentActivityParams>,
) -> Result<Json<ApiResponse<Vec<LogEntryDto>>>, ApiError> {
    let entries = state
        .activity
        .recent_for_user(&user.id, params.limit)
        .await?;
    let items = entries.into_iter().map(LogEntryDto::from).collect();
    Ok(Json(ApiResponse::success(items)))
}
