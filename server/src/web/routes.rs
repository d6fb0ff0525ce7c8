// stockroom_server/src/web/routes.rs

use actix_web::web;

// Simple liveness probe. Deeper checks (database reachability and the like)
// belong to deployment infrastructure, not this process.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function is called in `main.rs` (and by the HTTP tests) to configure
// services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api") // Base path for the inventory API
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Product Routes (plus variant creation/listing nested under a product)
      .service(
        web::scope("/products")
          .route(
            "",
            web::post().to(crate::web::handlers::product_handlers::create_product_handler),
          )
          .route(
            "",
            web::get().to(crate::web::handlers::product_handlers::list_products_handler),
          )
          .route(
            "/{product_id}",
            web::get().to(crate::web::handlers::product_handlers::get_product_handler),
          )
          .route(
            "/{product_id}",
            web::put().to(crate::web::handlers::product_handlers::update_product_handler),
          )
          .route(
            "/{product_id}",
            web::delete().to(crate::web::handlers::product_handlers::delete_product_handler),
          )
          .route(
            "/{product_id}/variants",
            web::post().to(crate::web::handlers::variant_handlers::create_variant_handler),
          )
          .route(
            "/{product_id}/variants",
            web::get().to(crate::web::handlers::variant_handlers::list_product_variants_handler),
          ),
      )
      // Category Routes
      .service(
        web::scope("/categories")
          .route(
            "",
            web::post().to(crate::web::handlers::category_handlers::create_category_handler),
          )
          .route(
            "",
            web::get().to(crate::web::handlers::category_handlers::list_categories_handler),
          )
          .route(
            "/{category_id}",
            web::get().to(crate::web::handlers::category_handlers::get_category_handler),
          ),
      )
      // Variant Routes (sub-variant creation/listing nested under a variant)
      .service(
        web::scope("/variants")
          .route(
            "/{variant_id}",
            web::get().to(crate::web::handlers::variant_handlers::get_variant_handler),
          )
          .route(
            "/{variant_id}/subvariants",
            web::post().to(crate::web::handlers::variant_handlers::create_sub_variant_handler),
          )
          .route(
            "/{variant_id}/subvariants",
            web::get().to(crate::web::handlers::variant_handlers::list_variant_sub_variants_handler),
          ),
      )
      // Sub-variant Routes
      .service(
        web::scope("/subvariants")
          .route(
            "/{sub_variant_id}",
            web::get().to(crate::web::handlers::variant_handlers::get_sub_variant_handler),
          )
          .route(
            "/{sub_variant_id}/stock",
            web::put().to(crate::web::handlers::variant_handlers::set_sub_variant_stock_handler),
          ),
      ),
  );
}
