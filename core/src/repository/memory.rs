// stockroom_core/src/repository/memory.rs

//! In-memory reference implementation of the gateway.
//!
//! Entities live in flat maps keyed by identifier behind a single
//! `parking_lot::RwLock`; ownership is expressed purely through foreign-key
//! fields. Every operation completes synchronously inside one lock hold, so
//! the blocking guard is never held across an `.await` suspension point and
//! the type is safe to call from async handlers.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use rust_decimal::Decimal;
use tracing::{event, Level};
use uuid::Uuid;

use crate::error::{RepoResult, RepositoryError};
use crate::model::{
  require_non_negative, Category, EntityKind, NewCategory, NewProduct, NewSubVariant, NewVariant,
  Product, ProductPatch, SubVariant, Variant,
};
use crate::repository::{
  CategoryRepository, ProductRepository, SubVariantRepository, VariantRepository,
};

/// Flat arenas, one map per entity kind.
#[derive(Debug, Default)]
struct Arenas {
  products: HashMap<Uuid, Product>,
  categories: HashMap<Uuid, Category>,
  variants: HashMap<Uuid, Variant>,
  sub_variants: HashMap<Uuid, SubVariant>,
}

impl Arenas {
  /// Re-aggregates `total_stock` for `product_id` as the sum of all
  /// sub-variant stocks under it, bumping the product's `updated_at`.
  fn recompute_total_stock(&mut self, product_id: Uuid, now: DateTime<Utc>) {
    let total: Decimal = self
      .variants
      .values()
      .filter(|variant| variant.product_id == product_id)
      .flat_map(|variant| {
        self
          .sub_variants
          .values()
          .filter(move |sub| sub.variant_id == variant.id)
      })
      .map(|sub| sub.stock)
      .sum();

    if let Some(product) = self.products.get_mut(&product_id) {
      product.total_stock = total;
      product.updated_at = now;
      event!(Level::TRACE, product_id = %product_id, total_stock = %total, "Total stock re-aggregated.");
    }
  }
}

/// The in-memory gateway: one lock, four maps. Used by tests as the storage
/// fake and runnable as a real (non-durable) backend.
#[derive(Debug, Default)]
pub struct InMemoryInventory {
  arenas: RwLock<Arenas>,
}

impl InMemoryInventory {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl ProductRepository for InMemoryInventory {
  async fn create_product(&self, draft: NewProduct) -> RepoResult<Product> {
    draft.validate()?;

    let mut arenas = self.arenas.write();
    if let Some(category_id) = draft.category_id {
      if !arenas.categories.contains_key(&category_id) {
        return Err(RepositoryError::Validation(format!(
          "category {} does not exist",
          category_id
        )));
      }
    }

    let now = Utc::now();
    let product = Product {
      id: Uuid::new_v4(),
      product_code: draft.product_code,
      name: draft.name,
      image: draft.image,
      hsn_code: draft.hsn_code,
      total_stock: draft.total_stock,
      is_favourite: draft.is_favourite,
      active: draft.active,
      created_by: draft.created_by,
      category_id: draft.category_id,
      created_at: now,
      updated_at: now,
    };
    event!(Level::DEBUG, product_id = %product.id, product_code = %product.product_code, "Product stored.");
    arenas.products.insert(product.id, product.clone());
    Ok(product)
  }

  async fn product_by_id(&self, id: Uuid) -> RepoResult<Product> {
    self
      .arenas
      .read()
      .products
      .get(&id)
      .cloned()
      .ok_or_else(|| RepositoryError::not_found(EntityKind::Product, id))
  }

  async fn list_products(&self, include_inactive: bool) -> RepoResult<Vec<Product>> {
    let arenas = self.arenas.read();
    Ok(
      arenas
        .products
        .values()
        .filter(|product| include_inactive || product.active)
        .cloned()
        .collect(),
    )
  }

  async fn update_product(&self, id: Uuid, patch: ProductPatch) -> RepoResult<Product> {
    patch.validate()?;

    let mut arenas = self.arenas.write();
    if let Some(category_id) = patch.category_id {
      if !arenas.categories.contains_key(&category_id) {
        return Err(RepositoryError::Validation(format!(
          "category {} does not exist",
          category_id
        )));
      }
    }

    let now = Utc::now();
    let product = arenas
      .products
      .get_mut(&id)
      .ok_or_else(|| RepositoryError::not_found(EntityKind::Product, id))?;
    patch.apply_to(product);
    product.updated_at = now;
    event!(Level::DEBUG, product_id = %id, "Product updated.");
    Ok(product.clone())
  }

  async fn delete_product(&self, id: Uuid) -> RepoResult<()> {
    let mut arenas = self.arenas.write();
    let product = arenas
      .products
      .get_mut(&id)
      .ok_or_else(|| RepositoryError::not_found(EntityKind::Product, id))?;
    // Already-inactive products stay as they are; no second updated_at bump.
    if product.active {
      product.active = false;
      product.updated_at = Utc::now();
      event!(Level::DEBUG, product_id = %id, "Product soft-deleted.");
    }
    Ok(())
  }
}

#[async_trait]
impl CategoryRepository for InMemoryInventory {
  async fn create_category(&self, draft: NewCategory) -> RepoResult<Category> {
    draft.validate()?;
    let category = Category {
      id: Uuid::new_v4(),
      name: draft.name,
    };
    self
      .arenas
      .write()
      .categories
      .insert(category.id, category.clone());
    event!(Level::DEBUG, category_id = %category.id, "Category stored.");
    Ok(category)
  }

  async fn category_by_id(&self, id: Uuid) -> RepoResult<Category> {
    self
      .arenas
      .read()
      .categories
      .get(&id)
      .cloned()
      .ok_or_else(|| RepositoryError::not_found(EntityKind::Category, id))
  }

  async fn list_categories(&self) -> RepoResult<Vec<Category>> {
    Ok(self.arenas.read().categories.values().cloned().collect())
  }
}

#[async_trait]
impl VariantRepository for InMemoryInventory {
  async fn create_variant(&self, draft: NewVariant) -> RepoResult<Variant> {
    draft.validate()?;

    let mut arenas = self.arenas.write();
    if !arenas.products.contains_key(&draft.product_id) {
      return Err(RepositoryError::not_found(EntityKind::Product, draft.product_id));
    }

    let variant = Variant {
      id: Uuid::new_v4(),
      product_id: draft.product_id,
      name: draft.name,
    };
    event!(Level::DEBUG, variant_id = %variant.id, product_id = %variant.product_id, "Variant stored.");
    arenas.variants.insert(variant.id, variant.clone());
    Ok(variant)
  }

  async fn variant_by_id(&self, id: Uuid) -> RepoResult<Variant> {
    self
      .arenas
      .read()
      .variants
      .get(&id)
      .cloned()
      .ok_or_else(|| RepositoryError::not_found(EntityKind::Variant, id))
  }

  async fn variants_of_product(&self, product_id: Uuid) -> RepoResult<Vec<Variant>> {
    let arenas = self.arenas.read();
    if !arenas.products.contains_key(&product_id) {
      return Err(RepositoryError::not_found(EntityKind::Product, product_id));
    }
    Ok(
      arenas
        .variants
        .values()
        .filter(|variant| variant.product_id == product_id)
        .cloned()
        .collect(),
    )
  }
}

#[async_trait]
impl SubVariantRepository for InMemoryInventory {
  async fn create_sub_variant(&self, draft: NewSubVariant) -> RepoResult<SubVariant> {
    draft.validate()?;

    let mut arenas = self.arenas.write();
    let product_id = match arenas.variants.get(&draft.variant_id) {
      Some(variant) => variant.product_id,
      None => return Err(RepositoryError::not_found(EntityKind::Variant, draft.variant_id)),
    };

    let sub_variant = SubVariant {
      id: Uuid::new_v4(),
      variant_id: draft.variant_id,
      option_label: draft.option_label,
      stock: draft.stock,
    };
    arenas.sub_variants.insert(sub_variant.id, sub_variant.clone());
    arenas.recompute_total_stock(product_id, Utc::now());
    event!(Level::DEBUG, sub_variant_id = %sub_variant.id, variant_id = %sub_variant.variant_id, "Sub-variant stored.");
    Ok(sub_variant)
  }

  async fn sub_variant_by_id(&self, id: Uuid) -> RepoResult<SubVariant> {
    self
      .arenas
      .read()
      .sub_variants
      .get(&id)
      .cloned()
      .ok_or_else(|| RepositoryError::not_found(EntityKind::SubVariant, id))
  }

  async fn sub_variants_of_variant(&self, variant_id: Uuid) -> RepoResult<Vec<SubVariant>> {
    let arenas = self.arenas.read();
    if !arenas.variants.contains_key(&variant_id) {
      return Err(RepositoryError::not_found(EntityKind::Variant, variant_id));
    }
    Ok(
      arenas
        .sub_variants
        .values()
        .filter(|sub| sub.variant_id == variant_id)
        .cloned()
        .collect(),
    )
  }

  async fn set_sub_variant_stock(&self, id: Uuid, stock: Decimal) -> RepoResult<SubVariant> {
    require_non_negative("stock", stock)?;

    let mut arenas = self.arenas.write();
    let (variant_id, updated) = match arenas.sub_variants.get_mut(&id) {
      Some(sub) => {
        sub.stock = stock;
        (sub.variant_id, sub.clone())
      }
      None => return Err(RepositoryError::not_found(EntityKind::SubVariant, id)),
    };

    // The owning variant always exists: inserts require the parent and
    // variants are never removed.
    let product_id = arenas.variants.get(&variant_id).map(|v| v.product_id);
    if let Some(product_id) = product_id {
      arenas.recompute_total_stock(product_id, Utc::now());
    }
    event!(Level::DEBUG, sub_variant_id = %id, stock = %stock, "Sub-variant stock replaced.");
    Ok(updated)
  }
}
