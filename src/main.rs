//!
//! Cabin board REST service. Reads configuration from a TOML file
//! (~/.config/cabin-board/config.toml) and serves the API over HTTP.

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use cabin_board::application::{ActivityService, BoardService, UserService};
use cabin_board::auth::JwtConfig;
use cabin_board::domain::{Cabin, CabinStatus, RepositoryProvider, Role, User};
use cabin_board::infrastructure::database::migrator::Migrator;
use cabin_board::{
    create_api_router, default_config_path, init_database, AppConfig, DatabaseConfig,
    SeaOrmRepositoryProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("CABIN_BOARD_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Cabin Board...");

    // ── Build sub-configs from AppConfig ───────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
    };
    info!("Database: {}", db_config.url);

    let jwt_config = JwtConfig {
        secret: app_cfg.security.jwt_secret.clone(),
        expiration_hours: app_cfg.security.jwt_expiration_hours,
        issuer: "cabin-board".to_string(),
    };
    info!(
        "JWT configured with {}h token expiration",
        jwt_config.expiration_hours
    );

    // ── Database ───────────────────────────────────────────────
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // ── Repositories and seed data ─────────────────────────────
    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    seed_default_admin(repos.as_ref(), &app_cfg).await;
    seed_cabins(repos.as_ref()).await;

    // ── Services ───────────────────────────────────────────────
    let user_service = Arc::new(UserService::new(repos.clone(), jwt_config.clone()));
    let board_service = Arc::new(BoardService::new(repos.clone()));
    let activity_service = Arc::new(ActivityService::new(repos.clone()));

    // ── HTTP server ────────────────────────────────────────────
    let router = create_api_router(
        repos,
        db.clone(),
        jwt_config,
        user_service,
        board_service,
        activity_service,
    );

    let addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs/", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        })
        .await?;

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("Cabin Board shutdown complete");
    Ok(())
}

/// Create the bootstrap admin account when the user table is empty.
///
/// Credentials come from the `[admin]` config section; the password is
/// stored as-is because login is an exact-match compare (see DESIGN.md).
async fn seed_default_admin(repos: &dyn RepositoryProvider, app_cfg: &AppConfig) {
    let existing = match repos.users().list().await {
        Ok(users) => users,
        Err(e) => {
            error!("Failed to check existing users: {}", e);
            return;
        }
    };
    if !existing.is_empty() {
        return;
    }

    info!("Creating default admin user...");
    let admin = User {
        id: uuid::Uuid::new_v4().to_string(),
        username: app_cfg.admin.username.clone(),
        password: app_cfg.admin.password.clone(),
        role: Role::Admin,
        created_at: chrono::Utc::now(),
    };
    match repos.users().save(admin).await {
        Ok(()) => {
            info!("Default admin created: {}", app_cfg.admin.username);
            warn!("Please change the admin password immediately!");
        }
        Err(e) => error!("Failed to create admin user: {}", e),
    }
}

/// Provision the fixed cabin set when the cabin table is empty.
///
/// Cabin names double as their display icon names; both are pure display
/// concerns and never influence the state machine.
async fn seed_cabins(repos: &dyn RepositoryProvider) {
    const CABIN_NAMES: [&str; 9] = [
        "Mountain",
        "Bird",
        "Flower",
        "Cloud",
        "Feather",
        "TreePine",
        "TreeDeciduous",
        "Crown",
        "Sun",
    ];

    let existing = match repos.cabins().list().await {
        Ok(cabins) => cabins,
        Err(e) => {
            error!("Failed to check existing cabins: {}", e);
            return;
        }
    };
    if !existing.is_empty() {
        return;
    }

    info!("Provisioning {} cabins...", CABIN_NAMES.len());
    for name in CABIN_NAMES {
        let cabin = Cabin {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            icon: name.to_string(),
            status: CabinStatus::EmptyClean,
            active_issue_id: None,
        };
        if let Err(e) = repos.cabins().save(cabin).await {
            error!("Failed to seed cabin '{}': {}", name, e);
        }
    }
}
