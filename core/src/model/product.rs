// stockroom_core/src/model/product.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{require_non_blank, require_non_negative};
use crate::error::RepoResult;

/// A sellable good; the root of the ownership tree below `Category`.
///
/// `total_stock` is caller-supplied until the product has sub-variants. From
/// the first sub-variant insert onwards the gateway recomputes it as the sum
/// of all descendant sub-variant stocks and bumps `updated_at` alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: Uuid,
  /// Intended-unique business key. Uniqueness is not enforced by the
  /// gateway, only by whatever the storage engine itself applies.
  pub product_code: String,
  pub name: String,
  /// Opaque reference to an externally stored image.
  pub image: Option<String>,
  /// HSN tax classification code, stored opaquely as a string.
  pub hsn_code: Option<String>,
  pub total_stock: Decimal,
  pub is_favourite: bool,
  /// Visibility flag, doubling as the soft-delete marker.
  pub active: bool,
  /// Opaque identifier of whoever created the record.
  pub created_by: Option<String>,
  pub category_id: Option<Uuid>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating a `Product`. The gateway assigns
/// `id` and both timestamps, taken from a single clock read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
  pub product_code: String,
  pub name: String,
  #[serde(default)]
  pub image: Option<String>,
  #[serde(default)]
  pub hsn_code: Option<String>,
  #[serde(default)]
  pub total_stock: Decimal,
  #[serde(default)]
  pub is_favourite: bool,
  #[serde(default = "default_active")]
  pub active: bool,
  #[serde(default)]
  pub created_by: Option<String>,
  #[serde(default)]
  pub category_id: Option<Uuid>,
}

fn default_active() -> bool {
  true
}

// Manual Default so programmatic construction gets the same `active: true`
// default as a JSON body with the field absent.
impl Default for NewProduct {
  fn default() -> Self {
    Self {
      product_code: String::new(),
      name: String::new(),
      image: None,
      hsn_code: None,
      total_stock: Decimal::ZERO,
      is_favourite: false,
      active: true,
      created_by: None,
      category_id: None,
    }
  }
}

impl NewProduct {
  /// Boundary validation, run by the gateway before any storage mutation.
  pub fn validate(&self) -> RepoResult<()> {
    require_non_blank("product_code", &self.product_code)?;
    require_non_blank("name", &self.name)?;
    require_non_negative("total_stock", self.total_stock)?;
    Ok(())
  }
}

/// Optional replacements for the mutable `Product` fields.
///
/// Absent fields are left unchanged. `id`, `created_at` and `created_by`
/// never change through an update; `updated_at` is bumped by the gateway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
  pub product_code: Option<String>,
  pub name: Option<String>,
  pub image: Option<String>,
  pub hsn_code: Option<String>,
  pub total_stock: Option<Decimal>,
  pub is_favourite: Option<bool>,
  pub active: Option<bool>,
  pub category_id: Option<Uuid>,
}

impl ProductPatch {
  /// Same rules as `NewProduct::validate`, applied to the present fields.
  pub fn validate(&self) -> RepoResult<()> {
    if let Some(code) = &self.product_code {
      require_non_blank("product_code", code)?;
    }
    if let Some(name) = &self.name {
      require_non_blank("name", name)?;
    }
    if let Some(total) = self.total_stock {
      require_non_negative("total_stock", total)?;
    }
    Ok(())
  }

  /// Overwrites `product`'s mutable fields with the present patch fields.
  /// Timestamps are untouched here; the gateway owns their assignment.
  pub fn apply_to(self, product: &mut Product) {
    if let Some(code) = self.product_code {
      product.product_code = code;
    }
    if let Some(name) = self.name {
      product.name = name;
    }
    if let Some(image) = self.image {
      product.image = Some(image);
    }
    if let Some(hsn) = self.hsn_code {
      product.hsn_code = Some(hsn);
    }
    if let Some(total) = self.total_stock {
      product.total_stock = total;
    }
    if let Some(fav) = self.is_favourite {
      product.is_favourite = fav;
    }
    if let Some(active) = self.active {
      product.active = active;
    }
    if let Some(category_id) = self.category_id {
      product.category_id = Some(category_id);
    }
  }
}
