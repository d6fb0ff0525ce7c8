// stockroom_server/src/web/handlers/mod.rs

// Declare handler modules
pub mod category_handlers;
pub mod product_handlers;
pub mod variant_handlers;

// routes.rs accesses handlers via their module path
// (e.g., product_handlers::create_product_handler).
