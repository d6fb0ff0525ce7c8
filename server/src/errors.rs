// stockroom_server/src/errors.rs

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use stockroom::RepositoryError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Storage Error: {source}")]
  Repository {
    #[source]
    source: anyhow::Error,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String), // For miscellaneous errors
}

// Map gateway errors onto the HTTP taxonomy. Validation and NotFound keep
// their messages for the response body; storage causes stay server-side.
impl From<RepositoryError> for AppError {
  fn from(err: RepositoryError) -> Self {
    match err {
      RepositoryError::Validation(message) => AppError::Validation(message),
      RepositoryError::NotFound { .. } => AppError::NotFound(err.to_string()),
      RepositoryError::Storage { source } => AppError::Repository { source },
    }
  }
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience
// in handlers that use `?` on functions returning anyhow::Result.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::Internal(err.to_string())
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Repository { source } => {
        // Full cause chain goes to the log; clients get a generic message.
        tracing::error!(storage_error_source = ?source, "Storage error details");
        HttpResponse::InternalServerError().json(json!({"error": "Storage operation failed"}))
      }
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

/// Error handler for `web::Json` extraction so malformed or missing bodies
/// are rejected with the same `{"error": ...}` shape as everything else.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(format!("Invalid JSON body: {}", err)).into()
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
