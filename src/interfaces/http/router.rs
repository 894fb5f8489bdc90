//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{ActivityService, BoardService, UserService};
use crate::auth::{auth_middleware, AuthState, JwtConfig};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::{auth, cabins, health, issues, logs, users};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Auth
        auth::handlers::login,
        auth::handlers::get_current_user,
        // Users
        users::handlers::list_users,
        users::handlers::create_user,
        users::handlers::update_user,
        users::handlers::delete_user,
        // Cabins
        cabins::handlers::list_cabins,
        cabins::handlers::get_cabin,
        cabins::handlers::check_in,
        cabins::handlers::check_out,
        cabins::handlers::cleaning_done,
        cabins::handlers::report_issue,
        cabins::handlers::resolve_issue,
        cabins::handlers::override_status,
        // Issues
        issues::handlers::list_issues,
        // Activity log
        logs::handlers::search,
        logs::handlers::my_recent_activity,
    ),
    components(
        schemas(
            ApiResponse<String>,
            // Health
            health::handlers::HealthResponse,
            health::handlers::ComponentHealth,
            // Auth
            auth::dto::LoginRequest,
            auth::dto::LoginResponse,
            // Users
            users::dto::UserDto,
            users::dto::CreateUserRequest,
            users::dto::UpdateUserRequest,
            // Cabins
            cabins::dto::CabinDto,
            cabins::dto::CheckInRequest,
            cabins::dto::ReportIssueRequest,
            cabins::dto::OverrideStatusRequest,
            // Issues
            issues::dto::IssueDto,
            // Activity log
            logs::dto::LogEntryDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check"),
        (name = "Authentication", description = "Login (JWT) and session rehydration"),
        (name = "Users", description = "Staff account management (admin only)"),
        (name = "Cabins", description = "Cabin board: status queries and workflow transitions"),
        (name = "Issues", description = "Issue report history"),
        (name = "Activity Log", description = "Append-only audit trail of all mutating actions"),
    ),
    info(
        title = "Cabin Board API",
        description = "Multi-role status board for a lodging property: occupancy, cleanliness and issue tracking for a fixed set of cabins."
    )
)]
struct ApiDoc;

/// Build the full application router.
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    jwt_config: JwtConfig,
    user_service: Arc<UserService>,
    board_service: Arc<BoardService>,
    activity_service: Arc<ActivityService>,
) -> Router {
    let middleware_state = AuthState {
        jwt_config,
        repos: repos.clone(),
    };

    let auth_state = auth::handlers::AuthHandlerState {
        user_service: user_service.clone(),
    };
    let user_state = users::handlers::UserHandlerState { user_service };
    let cabin_state = cabins::handlers::CabinHandlerState {
        board: board_service.clone(),
    };
    let issue_state = issues::handlers::IssueHandlerState {
        board: board_service,
    };
    let log_state = logs::handlers::LogHandlerState {
        activity: activity_service,
    };
    let health_state = health::handlers::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Auth routes (public)
    let auth_routes = Router::new()
        .route("/login", post(auth::handlers::login))
        .with_state(auth_state.clone());

    // Auth routes (protected)
    let auth_protected_routes = Router::new()
        .route("/me", get(auth::handlers::get_current_user))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(auth_state);

    // User routes (protected; admin rules enforced in the service)
    let user_routes = Router::new()
        .route(
            "/",
            get(users::handlers::list_users).post(users::handlers::create_user),
        )
        .route(
            "/{id}",
            put(users::handlers::update_user).delete(users::handlers::delete_user),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(user_state);

    // Cabin routes (protected)
    let cabin_routes = Router::new()
        .route("/", get(cabins::handlers::list_cabins))
        .route("/{id}", get(cabins::handlers::get_cabin))
        .route("/{id}/check-in", post(cabins::handlers::check_in))
        .route("/{id}/check-out", post(cabins::handlers::check_out))
        .route("/{id}/cleaning-done", post(cabins::handlers::cleaning_done))
        .route("/{id}/issues", post(cabins::handlers::report_issue))
        .route("/{id}/issues/resolve", post(cabins::handlers::resolve_issue))
        .route("/{id}/status", post(cabins::handlers::override_status))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(cabin_state);

    // Issue routes (protected)
    let issue_routes = Router::new()
        .route("/", get(issues::handlers::list_issues))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(issue_state);

    // Activity log routes (protected)
    let log_routes = Router::new()
        .route("/", get(logs::handlers::search))
        .route("/me", get(logs::handlers::my_recent_activity))
        .layer(middleware::from_fn_with_state(
            middleware_state,
            auth_middleware,
        ))
        .with_state(log_state);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::handlers::health_check))
        .with_state(health_state)
        .nest("/api/v1/auth", auth_routes.merge(auth_protected_routes))
        .nest("/api/v1/users", user_routes)
        .nest("/api/v1/cabins", cabin_routes)
        .nest("/api/v1/issues", issue_routes)
        .nest("/api/v1/logs", log_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
