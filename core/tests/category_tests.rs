// tests/category_tests.rs
mod common;

use std::collections::HashSet;

use common::*;
use stockroom::{
  CategoryRepository, EntityKind, InMemoryInventory, ProductPatch, ProductRepository,
  RepositoryError,
};
use uuid::Uuid;

#[tokio::test]
async fn category_create_and_round_trip() {
  setup_tracing();
  let repo = InMemoryInventory::new();

  let created = repo.create_category(category_draft("Apparel")).await.unwrap();
  assert!(!created.id.is_nil());
  assert_eq!(created.name, "Apparel");
  assert_eq!(repo.category_by_id(created.id).await.unwrap(), created);
}

#[tokio::test]
async fn category_listing_contains_exactly_the_created_ones() {
  setup_tracing();
  let repo = InMemoryInventory::new();

  assert!(repo.list_categories().await.unwrap().is_empty());

  let apparel = repo.create_category(category_draft("Apparel")).await.unwrap();
  let tools = repo.create_category(category_draft("Tools")).await.unwrap();

  let listed: HashSet<Uuid> = repo
    .list_categories()
    .await
    .unwrap()
    .iter()
    .map(|c| c.id)
    .collect();
  assert_eq!(listed, [apparel.id, tools.id].into_iter().collect());
}

#[tokio::test]
async fn blank_category_name_is_rejected() {
  setup_tracing();
  let repo = InMemoryInventory::new();

  assert!(matches!(
    repo.create_category(category_draft("  ")).await,
    Err(RepositoryError::Validation(_))
  ));
  assert!(repo.list_categories().await.unwrap().is_empty());
}

#[tokio::test]
async fn category_lookup_of_unknown_id_is_not_found() {
  setup_tracing();
  let repo = InMemoryInventory::new();

  let missing = Uuid::new_v4();
  assert!(matches!(
    repo.category_by_id(missing).await,
    Err(RepositoryError::NotFound { kind: EntityKind::Category, .. })
  ));
}

#[tokio::test]
async fn product_may_join_an_existing_category() {
  setup_tracing();
  let repo = InMemoryInventory::new();

  let category = repo.create_category(category_draft("Apparel")).await.unwrap();

  let mut draft = widget_draft();
  draft.category_id = Some(category.id);
  let product = repo.create_product(draft).await.unwrap();
  assert_eq!(product.category_id, Some(category.id));

  // Joining later through a patch works too.
  let other = repo.create_category(category_draft("Tools")).await.unwrap();
  let patch = ProductPatch {
    category_id: Some(other.id),
    ..ProductPatch::default()
  };
  let updated = repo.update_product(product.id, patch).await.unwrap();
  assert_eq!(updated.category_id, Some(other.id));
}

#[tokio::test]
async fn unknown_category_reference_is_a_validation_error() {
  setup_tracing();
  let repo = InMemoryInventory::new();

  // On create: the category is body data, not a path resource, so this is
  // Validation rather than NotFound.
  let mut draft = widget_draft();
  draft.category_id = Some(Uuid::new_v4());
  assert!(matches!(
    repo.create_product(draft).await,
    Err(RepositoryError::Validation(_))
  ));
  assert!(repo.list_products(true).await.unwrap().is_empty());

  // And on update.
  let product = repo.create_product(widget_draft()).await.unwrap();
  let patch = ProductPatch {
    category_id: Some(Uuid::new_v4()),
    ..ProductPatch::default()
  };
  assert!(matches!(
    repo.update_product(product.id, patch).await,
    Err(RepositoryError::Validation(_))
  ));
  assert_eq!(repo.product_by_id(product.id).await.unwrap(), product);
}
