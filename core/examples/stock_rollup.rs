// stockroom_core/examples/stock_rollup.rs
//
// Shows the total-stock roll-up: once a product has sub-variants, the
// gateway re-aggregates Product::total_stock after every sub-variant
// insert or stock replacement.

use rust_decimal::Decimal;
use stockroom::{
  InMemoryInventory, NewProduct, NewSubVariant, NewVariant, ProductRepository, RepositoryError,
  SubVariantRepository, VariantRepository,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), RepositoryError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Stock Roll-up Example ---");

  let repo = InMemoryInventory::new();

  // 1. A product with a hand-maintained total; it has no sub-variants yet.
  let shirt = repo
    .create_product(NewProduct {
      product_code: "SHIRT-01".to_string(),
      name: "Crew Shirt".to_string(),
      total_stock: Decimal::from(99),
      ..NewProduct::default()
    })
    .await?;
  info!("Initial total stock (caller-supplied): {}", shirt.total_stock);

  // 2. Two attribute levels under the product.
  let size = repo
    .create_variant(NewVariant {
      product_id: shirt.id,
      name: "Size".to_string(),
    })
    .await?;
  let colour = repo
    .create_variant(NewVariant {
      product_id: shirt.id,
      name: "Colour".to_string(),
    })
    .await?;

  // 3. Options with their own stock. From the first insert onwards the
  //    product total is the sum over all sub-variants.
  for (variant_id, label, stock) in [
    (size.id, "Small", Decimal::from(10)),
    (size.id, "Large", Decimal::new(75, 1)), // 7.5
    (colour.id, "Indigo", Decimal::from(3)),
  ] {
    repo
      .create_sub_variant(NewSubVariant {
        variant_id,
        option_label: label.to_string(),
        stock,
      })
      .await?;
  }

  let after_inserts = repo.product_by_id(shirt.id).await?;
  info!("Total stock after inserts: {}", after_inserts.total_stock);
  assert_eq!(after_inserts.total_stock, Decimal::new(205, 1)); // 20.5

  // 4. Replacing one option's stock re-aggregates the total again.
  let smalls = repo.sub_variants_of_variant(size.id).await?;
  let small = smalls.iter().find(|s| s.option_label == "Small").unwrap();
  repo.set_sub_variant_stock(small.id, Decimal::ZERO).await?;

  let after_set = repo.product_by_id(shirt.id).await?;
  info!("Total stock after zeroing 'Small': {}", after_set.total_stock);
  assert_eq!(after_set.total_stock, Decimal::new(105, 1)); // 10.5

  info!("Done.");
  Ok(())
}
