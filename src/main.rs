//! User CRUD service — CLI entry point
//!
//! ```sh
//! # Run with default config (~/.config/user-crud/config.toml)
//! user-crud-service
//!
//! # Custom config path and port
//! user-crud-service --config /etc/user-crud/config.toml --port 8080
//!
//! # Run without MongoDB (development)
//! user-crud-service --in-memory
//!
//! # Validate config without starting
//! user-crud-service --check
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use user_crud::config::{config_path_from_env, AppConfig, StorageBackend};
use user_crud::server::{init_tracing, run};

/// HTTP CRUD service for user records backed by MongoDB.
#[derive(Parser, Debug)]
#[command(name = "user-crud-service", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "USER_CRUD_CONFIG")]
    config: Option<PathBuf>,

    /// Override the HTTP listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Serve from process-local memory instead of MongoDB (data is lost on exit).
    #[arg(long)]
    in_memory: bool,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(config_path_from_env);

    let loaded = AppConfig::load(&config_path);
    let mut config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => AppConfig::default(),
    };

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.in_memory {
        config.database.backend = StorageBackend::Memory;
    }

    init_tracing(&config);

    match loaded {
        Ok(_) => info!("Configuration loaded from {}", config_path.display()),
        Err(e) if cli.check => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
        Err(e) => error!("Failed to load config: {}. Using defaults.", e),
    }

    if cli.check {
        info!("Configuration is valid");
        return ExitCode::SUCCESS;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
