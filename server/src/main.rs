// stockroom_server/src/main.rs

use std::sync::Arc;

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use sqlx::postgres::PgPoolOptions;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

use stockroom::{InMemoryInventory, InventoryRepository};
use stockroom_server::config::{AppConfig, RepositoryBackend};
use stockroom_server::db::PgInventory;
use stockroom_server::errors::json_error_handler;
use stockroom_server::state::AppState;
use stockroom_server::{seed, web};

// Main function
#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting stockroom inventory server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // Build the configured gateway backend
  let repo: Arc<dyn InventoryRepository> = match app_config.repository_backend {
    RepositoryBackend::Memory => {
      tracing::info!("Using the in-memory repository backend; state will not survive restarts.");
      Arc::new(InMemoryInventory::new())
    }
    RepositoryBackend::Postgres => {
      // from_env has already rejected a postgres backend without a URL.
      let database_url = app_config.database_url.clone().unwrap_or_default();
      let pool = match PgPoolOptions::new()
        .max_connections(app_config.db_max_connections)
        .acquire_timeout(app_config.db_acquire_timeout)
        .connect(&database_url)
        .await
      {
        Ok(pool) => {
          tracing::info!("Successfully connected to the database.");
          pool
        }
        Err(e) => {
          tracing::error!(error = %e, "Failed to connect to the database.");
          panic!("Database connection error: {}", e);
        }
      };
      Arc::new(PgInventory::new(pool))
    }
  };

  // Seed demo inventory if configured
  if app_config.seed_db {
    if let Err(e) = seed::seed_demo_inventory(repo.as_ref()).await {
      tracing::error!(error = %e, "Failed to seed demo inventory.");
    }
  }

  // Create AppState
  let app_state = AppState {
    repo,
    config: app_config.clone(), // Clone Arc for AppState
  };

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .app_data(actix_data::JsonConfig::default().error_handler(json_error_handler))
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
