// stockroom_core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;
use uuid::Uuid;

use crate::model::EntityKind;

/// Error taxonomy for the persistence gateway.
///
/// Validation failures are detected at the gateway boundary, before any
/// storage mutation. `Storage` wraps whatever the backing engine reported,
/// with the cause kept opaque to callers.
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("Validation error: {0}")]
  Validation(String),

  #[error("{kind} with id {id} not found")]
  NotFound { kind: EntityKind, id: Uuid },

  #[error("Storage failure: {source}")]
  Storage {
    #[source]
    source: AnyhowError,
  },
}

impl RepositoryError {
  /// Wraps an arbitrary backend failure as an opaque storage error.
  pub fn storage<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    RepositoryError::Storage { source: AnyhowError::new(err) }
  }

  pub fn not_found(kind: EntityKind, id: Uuid) -> Self {
    RepositoryError::NotFound { kind, id }
  }
}

// Conversion for backends whose operations surface anyhow::Error directly.
impl From<AnyhowError> for RepositoryError {
  fn from(err: AnyhowError) -> Self {
    RepositoryError::Storage { source: err }
  }
}

pub type RepoResult<T, E = RepositoryError> = std::result::Result<T, E>;
