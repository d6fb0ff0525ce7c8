// stockroom_server/src/seed.rs

//! Demo inventory inserted on startup when `SEED_DB=true`. Everything goes
//! through the gateway traits, so the same seed works against either backend
//! and exercises the same validation and stock roll-up as real requests.

use rust_decimal::Decimal;
use tracing::{info, instrument};

use stockroom::{
  CategoryRepository, InventoryRepository, NewCategory, NewProduct, NewSubVariant, NewVariant,
  ProductRepository, RepoResult, SubVariantRepository, VariantRepository,
};

#[instrument(name = "seed::demo_inventory", skip(repo))]
pub async fn seed_demo_inventory(repo: &dyn InventoryRepository) -> RepoResult<()> {
  // Never double-seed a store that already holds products.
  if !repo.list_products(true).await?.is_empty() {
    info!("Store already has products; skipping demo seed.");
    return Ok(());
  }

  let apparel = repo
    .create_category(NewCategory {
      name: "Apparel".to_string(),
    })
    .await?;

  let shirt = repo
    .create_product(NewProduct {
      product_code: "SHIRT-01".to_string(),
      name: "Crew Shirt".to_string(),
      hsn_code: Some("6109".to_string()),
      category_id: Some(apparel.id),
      created_by: Some("seed".to_string()),
      ..NewProduct::default()
    })
    .await?;

  let size = repo
    .create_variant(NewVariant {
      product_id: shirt.id,
      name: "Size".to_string(),
    })
    .await?;

  for (label, stock) in [("Small", 12), ("Medium", 20), ("Large", 8)] {
    repo
      .create_sub_variant(NewSubVariant {
        variant_id: size.id,
        option_label: label.to_string(),
        stock: Decimal::from(stock),
      })
      .await?;
  }

  // A product without variants keeps whatever total_stock it was given.
  repo
    .create_product(NewProduct {
      product_code: "MUG-01".to_string(),
      name: "Enamel Mug".to_string(),
      hsn_code: Some("7323".to_string()),
      total_stock: Decimal::from(40),
      created_by: Some("seed".to_string()),
      ..NewProduct::default()
    })
    .await?;

  info!("Demo inventory seeded.");
  Ok(())
}
