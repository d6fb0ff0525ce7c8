// stockroom_server/src/web/handlers/product_handlers.rs

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use stockroom::{NewProduct, ProductPatch, ProductRepository};

#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
  /// Soft-deleted products are hidden unless this is set.
  #[serde(default)]
  pub include_inactive: bool,
}

#[instrument(name = "handler::create_product", skip(app_state, payload), fields(product_code = %payload.product_code))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<NewProduct>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.repo.create_product(payload.into_inner()).await?;
  info!(product_id = %product.id, "Product created.");

  Ok(
    HttpResponse::Created()
      .insert_header((header::LOCATION, format!("/api/products/{}", product.id)))
      .json(product),
  )
}

#[instrument(name = "handler::list_products", skip(app_state, query_params))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let products = app_state.repo.list_products(query_params.include_inactive).await?;
  info!("Successfully fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.repo.product_by_id(path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::update_product", skip(app_state, path, payload), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  payload: web::Json<ProductPatch>,
) -> Result<HttpResponse, AppError> {
  let product = app_state
    .repo
    .update_product(path.into_inner(), payload.into_inner())
    .await?;
  info!(product_id = %product.id, "Product updated.");
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  app_state.repo.delete_product(path.into_inner()).await?;
  info!("Product deactivated.");
  Ok(HttpResponse::NoContent().finish())
}
