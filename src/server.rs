//! Server runtime.
//!
//! Bootstrap sequence: logging, store connection (bounded), repository and
//! service wiring, REST API with graceful shutdown, store client shutdown.

use std::sync::Arc;

use mongodb::Client;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::application::identity::UserService;
use crate::config::{AppConfig, LogFormat, StorageBackend};
use crate::domain::UserRepositoryInterface;
use crate::infrastructure::{
    init_database, DatabaseConfig, InMemoryUserRepository, UserRepository,
};
use crate::interfaces::http::{create_api_router, AppState};
use crate::shared::{InfraError, ShutdownCoordinator};

/// Install the global tracing subscriber. `RUST_LOG` takes precedence over
/// the configured level.
pub fn init_tracing(cfg: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.logging.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match cfg.logging.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    if let Err(e) = result {
        eprintln!("tracing subscriber already installed: {}", e);
    }
}

/// Repository selected by `database.backend`, plus the store client to close
/// on shutdown when one was opened.
pub async fn build_repository(
    app_cfg: &AppConfig,
) -> Result<(Arc<dyn UserRepositoryInterface>, Option<Client>), InfraError> {
    match app_cfg.database.backend {
        StorageBackend::Mongodb => {
            let db_config = DatabaseConfig::from(&app_cfg.database);
            let client = init_database(&db_config).await?;
            let repo: Arc<dyn UserRepositoryInterface> = Arc::new(UserRepository::new(
                client.clone(),
                app_cfg.database.operation_timeout(),
            ));
            Ok((repo, Some(client)))
        }
        StorageBackend::Memory => {
            warn!("Using in-memory user storage; data is lost on exit");
            let repo: Arc<dyn UserRepositoryInterface> = Arc::new(InMemoryUserRepository::new());
            Ok((repo, None))
        }
    }
}

/// Open the configured store, serve the API until a shutdown signal arrives,
/// then close the store client.
pub async fn run(app_cfg: AppConfig) -> Result<(), InfraError> {
    info!("Starting user CRUD service...");

    let (repo, client) = build_repository(&app_cfg).await?;
    let user_service = Arc::new(UserService::with_timeout(
        repo,
        app_cfg.database.operation_timeout(),
    ));

    let router = create_api_router(AppState::new(user_service));

    let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
    let shutdown_signal = shutdown.signal();
    shutdown.start_signal_listener();

    let api_addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("Server is running on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    let serve_result = axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            shutdown_signal.wait().await;
            info!("🛑 REST API server received shutdown signal");
        })
        .await;

    if let Err(e) = &serve_result {
        warn!("REST API server stopped with error: {}", e);
    }

    if let Some(client) = client {
        info!("🧹 Performing final cleanup...");
        let closed = shutdown
            .cleanup_with_timeout(|| async move {
                client.shutdown().await;
            })
            .await;
        if closed {
            info!("✅ Database connection closed");
        }
    }

    info!("👋 User CRUD service shutdown complete");
    serve_result.map_err(InfraError::from)
}
