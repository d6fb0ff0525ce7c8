// stockroom_core/examples/gateway_basic.rs

use rust_decimal::Decimal;
use stockroom::{InMemoryInventory, NewProduct, ProductPatch, ProductRepository, RepositoryError};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), RepositoryError> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Gateway Example ---");

  // 1. Construct the in-memory gateway. A durable deployment would use a
  //    database-backed implementation of the same traits instead.
  let repo = InMemoryInventory::new();

  // 2. Create a couple of products. The gateway assigns identifiers and
  //    sets both timestamps from one clock read.
  let widget = repo
    .create_product(NewProduct {
      product_code: "P-001".to_string(),
      name: "Widget".to_string(),
      total_stock: Decimal::from(25),
      hsn_code: Some("8481".to_string()),
      ..NewProduct::default()
    })
    .await?;
  info!(
    "Created '{}' ({}), total stock {}",
    widget.name, widget.id, widget.total_stock
  );
  assert_eq!(widget.created_at, widget.updated_at);

  let gadget = repo
    .create_product(NewProduct {
      product_code: "P-002".to_string(),
      name: "Gadget".to_string(),
      ..NewProduct::default()
    })
    .await?;

  // 3. Point lookup returns the stored record.
  let fetched = repo.product_by_id(widget.id).await?;
  assert_eq!(fetched, widget);

  // 4. Update through a patch: present fields replace, absent fields stay.
  let renamed = repo
    .update_product(
      widget.id,
      ProductPatch {
        name: Some("Widget Mk II".to_string()),
        is_favourite: Some(true),
        ..ProductPatch::default()
      },
    )
    .await?;
  info!("Renamed to '{}', favourite: {}", renamed.name, renamed.is_favourite);
  assert_eq!(renamed.product_code, "P-001"); // untouched

  // 5. Soft delete hides the product from the default listing but keeps the
  //    record reachable by id.
  repo.delete_product(gadget.id).await?;

  let visible = repo.list_products(false).await?;
  info!("{} product(s) visible after soft delete", visible.len());
  assert_eq!(visible.len(), 1);

  let tombstoned = repo.product_by_id(gadget.id).await?;
  assert!(!tombstoned.active);

  let everything = repo.list_products(true).await?;
  assert_eq!(everything.len(), 2);

  info!("Done.");
  Ok(())
}
