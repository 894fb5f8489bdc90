//! Issue history handlers
//!
//! Read-only: issues are created and resolved through the cabin
//! endpoints and never deleted, so the history only grows.

use std::sync::Arc;

use axum::{extract::State, Json};

use super::dto::IssueDto;
use crate::application::board::BoardService;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::error::ApiError;

/// Issue handler state
#[derive(Clone)]
pub struct IssueHandlerState {
    pub board: Arc<BoardService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/issues",
    tag = "Issues",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All issues, oldest first", body = ApiResponse<Vec<IssueDto>>),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_issues(
    State(state): State<IssueHandlerState>,
) -> Result<Json<ApiResponse<Vec<IssueDto>>>, ApiError> {
    let issues = state.board.list_issues().await?;
    let items = issues.into_iter().map(IssueDto::from).collect();
    Ok(Json(ApiResponse::success(items)))
}
