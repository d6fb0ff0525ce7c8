// stockroom_server/src/db/postgres.rs

//! PostgreSQL implementation of the stockroom gateway traits.
//!
//! Runs runtime-checked queries against the tables in `schema.sql`, which is
//! applied out-of-band. Identifiers and timestamps are assigned here, not by
//! column defaults, so both backends produce identical records. Operations
//! that touch a parent and a child (sub-variant writes plus the total-stock
//! re-aggregation) run inside one transaction; a transaction dropped on an
//! early return rolls back.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::PgPool;
use sqlx::{FromRow, Postgres, Transaction};
use tracing::instrument;
use uuid::Uuid;

use stockroom::error::{RepoResult, RepositoryError};
use stockroom::model::{
  require_non_negative, Category, EntityKind, NewCategory, NewProduct, NewSubVariant, NewVariant,
  Product, ProductPatch, SubVariant, Variant,
};
use stockroom::repository::{
  CategoryRepository, ProductRepository, SubVariantRepository, VariantRepository,
};

/// PostgreSQL gateway. Cheap to clone; the pool is shared internally.
#[derive(Clone)]
pub struct PgInventory {
  pool: PgPool,
}

impl PgInventory {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Unknown category references in a payload are a validation problem,
  /// not a missing resource; the category id was never issued by a lookup.
  async fn require_category(&self, category_id: Uuid) -> RepoResult<()> {
    let found: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM categories WHERE id = $1")
      .bind(category_id)
      .fetch_optional(&self.pool)
      .await
      .map_err(storage)?;
    match found {
      Some(_) => Ok(()),
      None => Err(RepositoryError::Validation(format!(
        "category {} does not exist",
        category_id
      ))),
    }
  }

  async fn require_product(&self, product_id: Uuid) -> RepoResult<()> {
    let found: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM products WHERE id = $1")
      .bind(product_id)
      .fetch_optional(&self.pool)
      .await
      .map_err(storage)?;
    match found {
      Some(_) => Ok(()),
      None => Err(RepositoryError::not_found(EntityKind::Product, product_id)),
    }
  }

  async fn require_variant(&self, variant_id: Uuid) -> RepoResult<()> {
    let found: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM variants WHERE id = $1")
      .bind(variant_id)
      .fetch_optional(&self.pool)
      .await
      .map_err(storage)?;
    match found {
      Some(_) => Ok(()),
      None => Err(RepositoryError::not_found(EntityKind::Variant, variant_id)),
    }
  }
}

// sqlx failures become opaque storage errors; the cause survives for logging.
fn storage(err: sqlx::Error) -> RepositoryError {
  RepositoryError::storage(err)
}

/// Re-aggregates a product's total stock from all sub-variants under it and
/// bumps its `updated_at`, inside the caller's transaction.
async fn refresh_total_stock(tx: &mut Transaction<'_, Postgres>, product_id: Uuid) -> RepoResult<()> {
  sqlx::query(
    "UPDATE products \
     SET total_stock = ( \
       SELECT COALESCE(SUM(s.stock), 0) \
       FROM sub_variants s \
       JOIN variants v ON s.variant_id = v.id \
       WHERE v.product_id = $1 \
     ), updated_at = $2 \
     WHERE id = $1",
  )
  .bind(product_id)
  .bind(Utc::now())
  .execute(&mut **tx)
  .await
  .map_err(storage)?;
  Ok(())
}

// --- Row types ---
// Kept separate from the public entities so column layout changes stay local
// to this module.

#[derive(Debug, FromRow)]
struct ProductRow {
  id: Uuid,
  product_code: String,
  name: String,
  image: Option<String>,
  hsn_code: Option<String>,
  total_stock: Decimal,
  is_favourite: bool,
  active: bool,
  created_by: Option<String>,
  category_id: Option<Uuid>,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
  fn from(row: ProductRow) -> Self {
    Product {
      id: row.id,
      product_code: row.product_code,
      name: row.name,
      image: row.image,
      hsn_code: row.hsn_code,
      total_stock: row.total_stock,
      is_favourite: row.is_favourite,
      active: row.active,
      created_by: row.created_by,
      category_id: row.category_id,
      created_at: row.created_at,
      updated_at: row.updated_at,
    }
  }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
  id: Uuid,
  name: String,
}

impl From<CategoryRow> for Category {
  fn from(row: CategoryRow) -> Self {
    Category {
      id: row.id,
      name: row.name,
    }
  }
}

#[derive(Debug, FromRow)]
struct VariantRow {
  id: Uuid,
  product_id: Uuid,
  name: String,
}

impl From<VariantRow> for Variant {
  fn from(row: VariantRow) -> Self {
    Variant {
      id: row.id,
      product_id: row.product_id,
      name: row.name,
    }
  }
}

#[derive(Debug, FromRow)]
struct SubVariantRow {
  id: Uuid,
  variant_id: Uuid,
  option_label: String,
  stock: Decimal,
}

impl From<SubVariantRow> for SubVariant {
  fn from(row: SubVariantRow) -> Self {
    SubVariant {
      id: row.id,
      variant_id: row.variant_id,
      option_label: row.option_label,
      stock: row.stock,
    }
  }
}

const PRODUCT_COLUMNS: &str = "id, product_code, name, image, hsn_code, total_stock, \
   is_favourite, active, created_by, category_id, created_at, updated_at";

// --- Trait implementations ---

#[async_trait]
impl ProductRepository for PgInventory {
  #[instrument(name = "pg::create_product", skip(self, draft), fields(product_code = %draft.product_code))]
  async fn create_product(&self, draft: NewProduct) -> RepoResult<Product> {
    draft.validate()?;
    if let Some(category_id) = draft.category_id {
      self.require_category(category_id).await?;
    }

    // Both timestamps come from the same reading, so a freshly created
    // product has created_at == updated_at.
    let now = Utc::now();
    let row: ProductRow = sqlx::query_as(&format!(
      "INSERT INTO products ({}) \
       VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11) \
       RETURNING {}",
      PRODUCT_COLUMNS, PRODUCT_COLUMNS
    ))
    .bind(Uuid::new_v4())
    .bind(&draft.product_code)
    .bind(&draft.name)
    .bind(&draft.image)
    .bind(&draft.hsn_code)
    .bind(draft.total_stock)
    .bind(draft.is_favourite)
    .bind(draft.active)
    .bind(&draft.created_by)
    .bind(draft.category_id)
    .bind(now)
    .fetch_one(&self.pool)
    .await
    .map_err(storage)?;

    Ok(row.into())
  }

  #[instrument(name = "pg::product_by_id", skip(self))]
  async fn product_by_id(&self, id: Uuid) -> RepoResult<Product> {
    let row: Option<ProductRow> = sqlx::query_as(&format!(
      "SELECT {} FROM products WHERE id = $1",
      PRODUCT_COLUMNS
    ))
    .bind(id)
    .fetch_optional(&self.pool)
    .await
    .map_err(storage)?;

    row
      .map(Product::from)
      .ok_or_else(|| RepositoryError::not_found(EntityKind::Product, id))
  }

  #[instrument(name = "pg::list_products", skip(self))]
  async fn list_products(&self, include_inactive: bool) -> RepoResult<Vec<Product>> {
    let sql = if include_inactive {
      format!("SELECT {} FROM products ORDER BY name ASC", PRODUCT_COLUMNS)
    } else {
      format!(
        "SELECT {} FROM products WHERE active = TRUE ORDER BY name ASC",
        PRODUCT_COLUMNS
      )
    };
    let rows: Vec<ProductRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await.map_err(storage)?;
    Ok(rows.into_iter().map(Product::from).collect())
  }

  #[instrument(name = "pg::update_product", skip(self, patch))]
  async fn update_product(&self, id: Uuid, patch: ProductPatch) -> RepoResult<Product> {
    patch.validate()?;
    if let Some(category_id) = patch.category_id {
      self.require_category(category_id).await?;
    }

    let mut tx = self.pool.begin().await.map_err(storage)?;

    let row: Option<ProductRow> = sqlx::query_as(&format!(
      "SELECT {} FROM products WHERE id = $1 FOR UPDATE",
      PRODUCT_COLUMNS
    ))
    .bind(id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(storage)?;
    let mut product: Product = match row {
      Some(row) => row.into(),
      None => return Err(RepositoryError::not_found(EntityKind::Product, id)),
    };

    patch.apply_to(&mut product);

    let row: ProductRow = sqlx::query_as(&format!(
      "UPDATE products \
       SET product_code = $2, name = $3, image = $4, hsn_code = $5, total_stock = $6, \
           is_favourite = $7, active = $8, category_id = $9, updated_at = $10 \
       WHERE id = $1 \
       RETURNING {}",
      PRODUCT_COLUMNS
    ))
    .bind(product.id)
    .bind(&product.product_code)
    .bind(&product.name)
    .bind(&product.image)
    .bind(&product.hsn_code)
    .bind(product.total_stock)
    .bind(product.is_favourite)
    .bind(product.active)
    .bind(product.category_id)
    .bind(Utc::now())
    .fetch_one(&mut *tx)
    .await
    .map_err(storage)?;

    tx.commit().await.map_err(storage)?;
    Ok(row.into())
  }

  #[instrument(name = "pg::delete_product", skip(self))]
  async fn delete_product(&self, id: Uuid) -> RepoResult<()> {
    let active: Option<(bool,)> = sqlx::query_as("SELECT active FROM products WHERE id = $1")
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(storage)?;
    match active {
      None => Err(RepositoryError::not_found(EntityKind::Product, id)),
      // Deleting an already-inactive product changes nothing, not even
      // updated_at.
      Some((false,)) => Ok(()),
      Some((true,)) => {
        sqlx::query("UPDATE products SET active = FALSE, updated_at = $2 WHERE id = $1")
          .bind(id)
          .bind(Utc::now())
          .execute(&self.pool)
          .await
          .map_err(storage)?;
        Ok(())
      }
    }
  }
}

#[async_trait]
impl CategoryRepository for PgInventory {
  #[instrument(name = "pg::create_category", skip(self, draft), fields(name = %draft.name))]
  async fn create_category(&self, draft: NewCategory) -> RepoResult<Category> {
    draft.validate()?;
    let row: CategoryRow =
      sqlx::query_as("INSERT INTO categories (id, name) VALUES ($1, $2) RETURNING id, name")
        .bind(Uuid::new_v4())
        .bind(&draft.name)
        .fetch_one(&self.pool)
        .await
        .map_err(storage)?;
    Ok(row.into())
  }

  #[instrument(name = "pg::category_by_id", skip(self))]
  async fn category_by_id(&self, id: Uuid) -> RepoResult<Category> {
    let row: Option<CategoryRow> = sqlx::query_as("SELECT id, name FROM categories WHERE id = $1")
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(storage)?;
    row
      .map(Category::from)
      .ok_or_else(|| RepositoryError::not_found(EntityKind::Category, id))
  }

  #[instrument(name = "pg::list_categories", skip(self))]
  async fn list_categories(&self) -> RepoResult<Vec<Category>> {
    let rows: Vec<CategoryRow> = sqlx::query_as("SELECT id, name FROM categories ORDER BY name ASC")
      .fetch_all(&self.pool)
      .await
      .map_err(storage)?;
    Ok(rows.into_iter().map(Category::from).collect())
  }
}

#[async_trait]
impl VariantRepository for PgInventory {
  #[instrument(name = "pg::create_variant", skip(self, draft), fields(product_id = %draft.product_id))]
  async fn create_variant(&self, draft: NewVariant) -> RepoResult<Variant> {
    draft.validate()?;
    self.require_product(draft.product_id).await?;

    let row: VariantRow = sqlx::query_as(
      "INSERT INTO variants (id, product_id, name) VALUES ($1, $2, $3) \
       RETURNING id, product_id, name",
    )
    .bind(Uuid::new_v4())
    .bind(draft.product_id)
    .bind(&draft.name)
    .fetch_one(&self.pool)
    .await
    .map_err(storage)?;
    Ok(row.into())
  }

  #[instrument(name = "pg::variant_by_id", skip(self))]
  async fn variant_by_id(&self, id: Uuid) -> RepoResult<Variant> {
    let row: Option<VariantRow> =
      sqlx::query_as("SELECT id, product_id, name FROM variants WHERE id = $1")
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?;
    row
      .map(Variant::from)
      .ok_or_else(|| RepositoryError::not_found(EntityKind::Variant, id))
  }

  #[instrument(name = "pg::variants_of_product", skip(self))]
  async fn variants_of_product(&self, product_id: Uuid) -> RepoResult<Vec<Variant>> {
    // Listing under a product that was never created is a 404, not an
    // empty list.
    self.require_product(product_id).await?;

    let rows: Vec<VariantRow> =
      sqlx::query_as("SELECT id, product_id, name FROM variants WHERE product_id = $1 ORDER BY name ASC")
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;
    Ok(rows.into_iter().map(Variant::from).collect())
  }
}

#[async_trait]
impl SubVariantRepository for PgInventory {
  #[instrument(name = "pg::create_sub_variant", skip(self, draft), fields(variant_id = %draft.variant_id))]
  async fn create_sub_variant(&self, draft: NewSubVariant) -> RepoResult<SubVariant> {
    draft.validate()?;

    let mut tx = self.pool.begin().await.map_err(storage)?;

    let parent: Option<(Uuid,)> = sqlx::query_as("SELECT product_id FROM variants WHERE id = $1")
      .bind(draft.variant_id)
      .fetch_optional(&mut *tx)
      .await
      .map_err(storage)?;
    let product_id = match parent {
      Some((product_id,)) => product_id,
      None => return Err(RepositoryError::not_found(EntityKind::Variant, draft.variant_id)),
    };

    let row: SubVariantRow = sqlx::query_as(
      "INSERT INTO sub_variants (id, variant_id, option_label, stock) VALUES ($1, $2, $3, $4) \
       RETURNING id, variant_id, option_label, stock",
    )
    .bind(Uuid::new_v4())
    .bind(draft.variant_id)
    .bind(&draft.option_label)
    .bind(draft.stock)
    .fetch_one(&mut *tx)
    .await
    .map_err(storage)?;

    refresh_total_stock(&mut tx, product_id).await?;
    tx.commit().await.map_err(storage)?;
    Ok(row.into())
  }

  #[instrument(name = "pg::sub_variant_by_id", skip(self))]
  async fn sub_variant_by_id(&self, id: Uuid) -> RepoResult<SubVariant> {
    let row: Option<SubVariantRow> =
      sqlx::query_as("SELECT id, variant_id, option_label, stock FROM sub_variants WHERE id = $1")
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?;
    row
      .map(SubVariant::from)
      .ok_or_else(|| RepositoryError::not_found(EntityKind::SubVariant, id))
  }

  #[instrument(name = "pg::sub_variants_of_variant", skip(self))]
  async fn sub_variants_of_variant(&self, variant_id: Uuid) -> RepoResult<Vec<SubVariant>> {
    self.require_variant(variant_id).await?;

    let rows: Vec<SubVariantRow> = sqlx::query_as(
      "SELECT id, variant_id, option_label, stock FROM sub_variants \
       WHERE variant_id = $1 ORDER BY option_label ASC",
    )
    .bind(variant_id)
    .fetch_all(&self.pool)
    .await
    .map_err(storage)?;
    Ok(rows.into_iter().map(SubVariant::from).collect())
  }

  #[instrument(name = "pg::set_sub_variant_stock", skip(self))]
  async fn set_sub_variant_stock(&self, id: Uuid, stock: Decimal) -> RepoResult<SubVariant> {
    require_non_negative("stock", stock)?;

    let mut tx = self.pool.begin().await.map_err(storage)?;

    let row: Option<SubVariantRow> = sqlx::query_as(
      "UPDATE sub_variants SET stock = $2 WHERE id = $1 \
       RETURNING id, variant_id, option_label, stock",
    )
    .bind(id)
    .bind(stock)
    .fetch_optional(&mut *tx)
    .await
    .map_err(storage)?;
    let sub_variant = match row {
      Some(row) => row,
      None => return Err(RepositoryError::not_found(EntityKind::SubVariant, id)),
    };

    let parent: Option<(Uuid,)> = sqlx::query_as("SELECT product_id FROM variants WHERE id = $1")
      .bind(sub_variant.variant_id)
      .fetch_optional(&mut *tx)
      .await
      .map_err(storage)?;
    if let Some((product_id,)) = parent {
      refresh_total_stock(&mut tx, product_id).await?;
    }

    tx.commit().await.map_err(storage)?;
    Ok(sub_variant.into())
  }
}
