// stockroom_core/src/repository/mod.rs

//! The persistence gateway: one explicit repository trait per entity kind,
//! plus the `InventoryRepository` supertrait so application state can hold
//! the whole gateway behind a single `Arc<dyn InventoryRepository>`.
//!
//! Contracts every implementation must satisfy:
//!  - Create validates the draft before any storage mutation, assigns a
//!    fresh UUID (and, for products, both timestamps from one clock read)
//!    and returns the stored entity.
//!  - Point lookups return `NotFound { kind, id }` when nothing matches,
//!    and do see soft-deleted products.
//!  - Listings are finite and fully materialized before return; iteration
//!    order is storage-defined, not contractual.

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::RepoResult;
use crate::model::{
  Category, NewCategory, NewProduct, NewSubVariant, NewVariant, Product, ProductPatch, SubVariant,
  Variant,
};

pub mod memory;

// Re-export the reference implementation
pub use memory::InMemoryInventory;

/// Storage and retrieval of `Product` records.
#[async_trait]
pub trait ProductRepository: Send + Sync {
  /// Validates `draft`, assigns identifier and timestamps, stores the
  /// product and returns it.
  ///
  /// A `category_id` naming an unknown category is a validation error: the
  /// category arrives as body data, not as an addressed resource.
  async fn create_product(&self, draft: NewProduct) -> RepoResult<Product>;

  /// Point lookup by identifier. Sees inactive (soft-deleted) products.
  async fn product_by_id(&self, id: Uuid) -> RepoResult<Product>;

  /// All products, excluding inactive ones unless `include_inactive`.
  async fn list_products(&self, include_inactive: bool) -> RepoResult<Vec<Product>>;

  /// Identifier-based lookup-then-replace. Present patch fields overwrite
  /// the stored values, `updated_at` is bumped, `id` and `created_at` never
  /// change.
  async fn update_product(&self, id: Uuid, patch: ProductPatch) -> RepoResult<Product>;

  /// Soft delete: sets `active = false` and bumps `updated_at`. Deleting an
  /// already-inactive product is a no-op success; an unknown id is
  /// `NotFound`.
  async fn delete_product(&self, id: Uuid) -> RepoResult<()>;
}

/// Storage and retrieval of `Category` records.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
  async fn create_category(&self, draft: NewCategory) -> RepoResult<Category>;

  async fn category_by_id(&self, id: Uuid) -> RepoResult<Category>;

  async fn list_categories(&self) -> RepoResult<Vec<Category>>;
}

/// Storage and retrieval of `Variant` records.
#[async_trait]
pub trait VariantRepository: Send + Sync {
  /// Fails with `NotFound` for the product kind when the owning product
  /// does not exist.
  async fn create_variant(&self, draft: NewVariant) -> RepoResult<Variant>;

  async fn variant_by_id(&self, id: Uuid) -> RepoResult<Variant>;

  /// Variants owned by `product_id`. `NotFound` when the product itself is
  /// missing, so the caller can distinguish "no variants" from "no product".
  async fn variants_of_product(&self, product_id: Uuid) -> RepoResult<Vec<Variant>>;
}

/// Storage and retrieval of `SubVariant` records.
///
/// Both mutating operations re-aggregate the owning product's `total_stock`
/// (the sum of all its descendant sub-variant stocks) and bump the product's
/// `updated_at` in the same storage step.
#[async_trait]
pub trait SubVariantRepository: Send + Sync {
  /// Fails with `NotFound` for the variant kind when the owning variant
  /// does not exist.
  async fn create_sub_variant(&self, draft: NewSubVariant) -> RepoResult<SubVariant>;

  async fn sub_variant_by_id(&self, id: Uuid) -> RepoResult<SubVariant>;

  /// Sub-variants owned by `variant_id`. `NotFound` when the variant itself
  /// is missing.
  async fn sub_variants_of_variant(&self, variant_id: Uuid) -> RepoResult<Vec<SubVariant>>;

  /// Replaces one sub-variant's stock quantity. Negative values are a
  /// validation error, rejected before storage is touched.
  async fn set_sub_variant_stock(&self, id: Uuid, stock: Decimal) -> RepoResult<SubVariant>;
}

/// The full gateway. Blanket-implemented for anything implementing the four
/// per-entity traits, so backends only ever implement those.
pub trait InventoryRepository:
  ProductRepository + CategoryRepository + VariantRepository + SubVariantRepository
{
}

impl<T> InventoryRepository for T where
  T: ProductRepository + CategoryRepository + VariantRepository + SubVariantRepository
{
}
