// tests/hierarchy_tests.rs
//
// Ownership-tree behavior: parent checks on child creation, per-parent
// listings, and the total-stock roll-up from sub-variants to their product.
mod common;

use std::collections::HashSet;

use common::*;
use rust_decimal::Decimal;
use stockroom::{
  EntityKind, InMemoryInventory, ProductRepository, RepositoryError, SubVariantRepository,
  VariantRepository,
};
use uuid::Uuid;

#[tokio::test]
async fn variant_creation_requires_an_existing_product() {
  setup_tracing();
  let repo = InMemoryInventory::new();

  let missing = Uuid::new_v4();
  let err = repo
    .create_variant(variant_draft(missing, "Size"))
    .await
    .unwrap_err();
  match err {
    RepositoryError::NotFound { kind, id } => {
      assert_eq!(kind, EntityKind::Product);
      assert_eq!(id, missing);
    }
    other => panic!("expected NotFound for the product kind, got {:?}", other),
  }
}

#[tokio::test]
async fn sub_variant_creation_requires_an_existing_variant() {
  setup_tracing();
  let repo = InMemoryInventory::new();

  let missing = Uuid::new_v4();
  let err = repo
    .create_sub_variant(sub_variant_draft(missing, "Large", Decimal::ONE))
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    RepositoryError::NotFound { kind: EntityKind::Variant, .. }
  ));
}

#[tokio::test]
async fn variants_list_under_their_product() {
  setup_tracing();
  let repo = InMemoryInventory::new();
  let product = repo.create_product(widget_draft()).await.unwrap();
  let other = repo
    .create_product(product_draft("P-002", "Gadget"))
    .await
    .unwrap();

  let size = repo
    .create_variant(variant_draft(product.id, "Size"))
    .await
    .unwrap();
  let colour = repo
    .create_variant(variant_draft(product.id, "Colour"))
    .await
    .unwrap();

  assert_eq!(repo.variant_by_id(size.id).await.unwrap(), size);

  let listed: HashSet<Uuid> = repo
    .variants_of_product(product.id)
    .await
    .unwrap()
    .iter()
    .map(|v| v.id)
    .collect();
  assert_eq!(listed, [size.id, colour.id].into_iter().collect());

  // A product without variants lists empty, not NotFound.
  assert!(repo.variants_of_product(other.id).await.unwrap().is_empty());

  // An unknown product is NotFound, distinguishing "no variants" from
  // "no product".
  assert!(matches!(
    repo.variants_of_product(Uuid::new_v4()).await,
    Err(RepositoryError::NotFound { kind: EntityKind::Product, .. })
  ));
}

#[tokio::test]
async fn sub_variants_list_under_their_variant() {
  setup_tracing();
  let repo = InMemoryInventory::new();
  let product = repo.create_product(widget_draft()).await.unwrap();
  let size = repo
    .create_variant(variant_draft(product.id, "Size"))
    .await
    .unwrap();

  let large = repo
    .create_sub_variant(sub_variant_draft(size.id, "Large", Decimal::from(10)))
    .await
    .unwrap();
  let small = repo
    .create_sub_variant(sub_variant_draft(size.id, "Small", Decimal::from(4)))
    .await
    .unwrap();

  assert_eq!(repo.sub_variant_by_id(large.id).await.unwrap(), large);

  let listed: HashSet<Uuid> = repo
    .sub_variants_of_variant(size.id)
    .await
    .unwrap()
    .iter()
    .map(|s| s.id)
    .collect();
  assert_eq!(listed, [large.id, small.id].into_iter().collect());

  assert!(matches!(
    repo.sub_variants_of_variant(Uuid::new_v4()).await,
    Err(RepositoryError::NotFound { kind: EntityKind::Variant, .. })
  ));
}

#[tokio::test]
async fn sub_variant_inserts_roll_up_into_product_total_stock() {
  setup_tracing();
  let repo = InMemoryInventory::new();
  let product = repo.create_product(widget_draft()).await.unwrap();
  let size = repo
    .create_variant(variant_draft(product.id, "Size"))
    .await
    .unwrap();
  let colour = repo
    .create_variant(variant_draft(product.id, "Colour"))
    .await
    .unwrap();

  repo
    .create_sub_variant(sub_variant_draft(size.id, "Large", Decimal::from(10)))
    .await
    .unwrap();
  repo
    .create_sub_variant(sub_variant_draft(size.id, "Small", Decimal::new(25, 1)))
    .await
    .unwrap();
  repo
    .create_sub_variant(sub_variant_draft(colour.id, "Red", Decimal::ONE))
    .await
    .unwrap();

  let fetched = repo.product_by_id(product.id).await.unwrap();
  // 10 + 2.5 + 1
  assert_eq!(fetched.total_stock, Decimal::new(135, 1));
  assert!(fetched.updated_at >= product.updated_at);
}

#[tokio::test]
async fn caller_supplied_total_stock_is_replaced_once_sub_variants_exist() {
  setup_tracing();
  let repo = InMemoryInventory::new();

  let mut draft = widget_draft();
  draft.total_stock = Decimal::from(99);
  let product = repo.create_product(draft).await.unwrap();
  assert_eq!(product.total_stock, Decimal::from(99));

  let size = repo
    .create_variant(variant_draft(product.id, "Size"))
    .await
    .unwrap();
  repo
    .create_sub_variant(sub_variant_draft(size.id, "Large", Decimal::from(3)))
    .await
    .unwrap();

  // The aggregate wins over the hand-maintained figure.
  let fetched = repo.product_by_id(product.id).await.unwrap();
  assert_eq!(fetched.total_stock, Decimal::from(3));
}

#[tokio::test]
async fn stock_replacement_rolls_up_and_rejects_negatives() {
  setup_tracing();
  let repo = InMemoryInventory::new();
  let product = repo.create_product(widget_draft()).await.unwrap();
  let size = repo
    .create_variant(variant_draft(product.id, "Size"))
    .await
    .unwrap();
  let large = repo
    .create_sub_variant(sub_variant_draft(size.id, "Large", Decimal::from(4)))
    .await
    .unwrap();

  let updated = repo
    .set_sub_variant_stock(large.id, Decimal::new(625, 2))
    .await
    .unwrap();
  assert_eq!(updated.stock, Decimal::new(625, 2));

  let fetched = repo.product_by_id(product.id).await.unwrap();
  assert_eq!(fetched.total_stock, Decimal::new(625, 2));

  // Negative stock never reaches storage.
  assert!(matches!(
    repo.set_sub_variant_stock(large.id, Decimal::from(-1)).await,
    Err(RepositoryError::Validation(_))
  ));
  assert_eq!(
    repo.sub_variant_by_id(large.id).await.unwrap().stock,
    Decimal::new(625, 2)
  );
}

#[tokio::test]
async fn stock_update_of_unknown_sub_variant_is_not_found() {
  setup_tracing();
  let repo = InMemoryInventory::new();

  assert!(matches!(
    repo.set_sub_variant_stock(Uuid::new_v4(), Decimal::ONE).await,
    Err(RepositoryError::NotFound { kind: EntityKind::SubVariant, .. })
  ));
}

#[tokio::test]
async fn blank_child_fields_and_negative_stock_are_rejected() {
  setup_tracing();
  let repo = InMemoryInventory::new();
  let product = repo.create_product(widget_draft()).await.unwrap();
  let size = repo
    .create_variant(variant_draft(product.id, "Size"))
    .await
    .unwrap();

  assert!(matches!(
    repo.create_variant(variant_draft(product.id, "")).await,
    Err(RepositoryError::Validation(_))
  ));
  assert!(matches!(
    repo
      .create_sub_variant(sub_variant_draft(size.id, "  ", Decimal::ONE))
      .await,
    Err(RepositoryError::Validation(_))
  ));
  assert!(matches!(
    repo
      .create_sub_variant(sub_variant_draft(size.id, "Large", Decimal::from(-2)))
      .await,
    Err(RepositoryError::Validation(_))
  ));

  // The failed inserts left no children behind.
  assert!(repo.sub_variants_of_variant(size.id).await.unwrap().is_empty());
}
