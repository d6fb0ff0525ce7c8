// stockroom_server/src/web/handlers/variant_handlers.rs

//! Handlers for variants and sub-variants. Parent identifiers come from the
//! URL, never the body, so the request payloads here are thinner than the
//! gateway's draft types.

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use stockroom::{NewSubVariant, NewVariant, SubVariantRepository, VariantRepository};

#[derive(Deserialize, Debug)]
pub struct CreateVariantPayload {
  pub name: String,
}

#[derive(Deserialize, Debug)]
pub struct CreateSubVariantPayload {
  pub option_label: String,
  #[serde(default)]
  pub stock: Decimal,
}

#[derive(Deserialize, Debug)]
pub struct SetStockPayload {
  pub stock: Decimal,
}

// --- Variant handlers ---

#[instrument(name = "handler::create_variant", skip(app_state, path, payload), fields(product_id = %path.as_ref()))]
pub async fn create_variant_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  payload: web::Json<CreateVariantPayload>,
) -> Result<HttpResponse, AppError> {
  let draft = NewVariant {
    product_id: path.into_inner(),
    name: payload.into_inner().name,
  };
  let variant = app_state.repo.create_variant(draft).await?;
  info!(variant_id = %variant.id, "Variant created.");

  Ok(
    HttpResponse::Created()
      .insert_header((header::LOCATION, format!("/api/variants/{}", variant.id)))
      .json(variant),
  )
}

#[instrument(name = "handler::list_product_variants", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn list_product_variants_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let variants = app_state.repo.variants_of_product(path.into_inner()).await?;
  info!("Successfully fetched {} variants.", variants.len());
  Ok(HttpResponse::Ok().json(variants))
}

#[instrument(name = "handler::get_variant", skip(app_state, path), fields(variant_id = %path.as_ref()))]
pub async fn get_variant_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let variant = app_state.repo.variant_by_id(path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(variant))
}

// --- Sub-variant handlers ---

#[instrument(name = "handler::create_sub_variant", skip(app_state, path, payload), fields(variant_id = %path.as_ref()))]
pub async fn create_sub_variant_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  payload: web::Json<CreateSubVariantPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = payload.into_inner();
  let draft = NewSubVariant {
    variant_id: path.into_inner(),
    option_label: payload.option_label,
    stock: payload.stock,
  };
  let sub_variant = app_state.repo.create_sub_variant(draft).await?;
  info!(sub_variant_id = %sub_variant.id, "Sub-variant created.");

  Ok(
    HttpResponse::Created()
      .insert_header((header::LOCATION, format!("/api/subvariants/{}", sub_variant.id)))
      .json(sub_variant),
  )
}

#[instrument(name = "handler::list_variant_sub_variants", skip(app_state, path), fields(variant_id = %path.as_ref()))]
pub async fn list_variant_sub_variants_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let sub_variants = app_state.repo.sub_variants_of_variant(path.into_inner()).await?;
  info!("Successfully fetched {} sub-variants.", sub_variants.len());
  Ok(HttpResponse::Ok().json(sub_variants))
}

#[instrument(name = "handler::get_sub_variant", skip(app_state, path), fields(sub_variant_id = %path.as_ref()))]
pub async fn get_sub_variant_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let sub_variant = app_state.repo.sub_variant_by_id(path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(sub_variant))
}

#[instrument(name = "handler::set_sub_variant_stock", skip(app_state, path, payload), fields(sub_variant_id = %path.as_ref()))]
pub async fn set_sub_variant_stock_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  payload: web::Json<SetStockPayload>,
) -> Result<HttpResponse, AppError> {
  let sub_variant = app_state
    .repo
    .set_sub_variant_stock(path.into_inner(), payload.stock)
    .await?;
  info!(stock = %sub_variant.stock, "Sub-variant stock replaced.");
  Ok(HttpResponse::Ok().json(sub_variant))
}
