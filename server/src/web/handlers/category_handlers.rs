// stockroom_server/src/web/handlers/category_handlers.rs

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use stockroom::{CategoryRepository, NewCategory};

#[instrument(name = "handler::create_category", skip(app_state, payload), fields(name = %payload.name))]
pub async fn create_category_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<NewCategory>,
) -> Result<HttpResponse, AppError> {
  let category = app_state.repo.create_category(payload.into_inner()).await?;
  info!(category_id = %category.id, "Category created.");

  Ok(
    HttpResponse::Created()
      .insert_header((header::LOCATION, format!("/api/categories/{}", category.id)))
      .json(category),
  )
}

#[instrument(name = "handler::list_categories", skip(app_state))]
pub async fn list_categories_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let categories = app_state.repo.list_categories().await?;
  info!("Successfully fetched {} categories.", categories.len());
  Ok(HttpResponse::Ok().json(categories))
}

#[instrument(name = "handler::get_category", skip(app_state, path), fields(category_id = %path.as_ref()))]
pub async fn get_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let category = app_state.repo.category_by_id(path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(category))
}
