// stockroom_server/src/state.rs
use crate::config::AppConfig;
use std::sync::Arc;
use stockroom::InventoryRepository;

#[derive(Clone)]
pub struct AppState {
  /// The gateway every handler goes through. Which implementation sits
  /// behind it is decided once at startup.
  pub repo: Arc<dyn InventoryRepository>,
  pub config: Arc<AppConfig>, // Share loaded config
}
