// stockroom_server/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Which gateway implementation backs the HTTP surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryBackend {
  Postgres,
  Memory,
}

impl FromStr for RepositoryBackend {
  type Err = AppError;

  fn from_str(value: &str) -> Result<Self> {
    match value.to_ascii_lowercase().as_str() {
      "postgres" => Ok(RepositoryBackend::Postgres),
      "memory" => Ok(RepositoryBackend::Memory),
      other => Err(AppError::Config(format!(
        "Invalid REPOSITORY_BACKEND '{}' (expected 'postgres' or 'memory')",
        other
      ))),
    }
  }
}

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub app_base_url: String,

  pub repository_backend: RepositoryBackend,
  /// Required when the backend is `Postgres`; ignored for `Memory`.
  pub database_url: Option<String>,
  pub db_max_connections: u32,
  pub db_acquire_timeout: Duration,

  // Optional: for seeding demo inventory on startup
  pub seed_db: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let app_base_url = get_env("APP_BASE_URL").unwrap_or_else(|_| format!("http://{}:{}", server_host, server_port));

    let repository_backend = get_env("REPOSITORY_BACKEND")
      .unwrap_or_else(|_| "postgres".to_string())
      .parse::<RepositoryBackend>()?;
    let database_url = env::var("DATABASE_URL").ok();
    if repository_backend == RepositoryBackend::Postgres && database_url.is_none() {
      return Err(AppError::Config(
        "DATABASE_URL must be set when REPOSITORY_BACKEND is 'postgres'".to_string(),
      ));
    }

    let db_max_connections = get_env("DB_MAX_CONNECTIONS")
      .unwrap_or_else(|_| "5".to_string())
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid DB_MAX_CONNECTIONS: {}", e)))?;
    let db_acquire_timeout = get_env("DB_ACQUIRE_TIMEOUT_SECS")
      .unwrap_or_else(|_| "5".to_string())
      .parse::<u64>()
      .map(Duration::from_secs)
      .map_err(|e| AppError::Config(format!("Invalid DB_ACQUIRE_TIMEOUT_SECS: {}", e)))?;

    let seed_db = get_env("SEED_DB")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");
    // Avoid logging the database URL; it may carry credentials.

    Ok(Self {
      server_host,
      server_port,
      app_base_url,
      repository_backend,
      database_url,
      db_max_connections,
      db_acquire_timeout,
      seed_db,
    })
  }
}
