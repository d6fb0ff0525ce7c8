// tests/common/mod.rs
#![allow(dead_code)] // Utilities here are shared across integration test files

use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;
use tracing::Level;

use stockroom::InMemoryInventory;
use stockroom_server::config::{AppConfig, RepositoryBackend};
use stockroom_server::state::AppState;

/// AppState over a fresh in-memory gateway, the way main.rs builds it when
/// REPOSITORY_BACKEND=memory. Each test gets its own isolated store.
pub fn test_state() -> AppState {
  AppState {
    repo: Arc::new(InMemoryInventory::new()),
    config: Arc::new(test_config()),
  }
}

pub fn test_config() -> AppConfig {
  AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    app_base_url: "http://127.0.0.1:0".to_string(),
    repository_backend: RepositoryBackend::Memory,
    database_url: None,
    db_max_connections: 1,
    db_acquire_timeout: Duration::from_secs(1),
    seed_db: false,
  }
}

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

/// Call at the start of tests if you want log output.
/// Ensures tracing is initialized only once.
pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
