// stockroom_core/src/model/variant.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::require_non_blank;
use crate::error::RepoResult;

/// A product attribute level (e.g. "Size"). Owned by a `Product` via
/// `product_id` and owning sub-variants through `SubVariant::variant_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
  pub id: Uuid,
  pub product_id: Uuid,
  pub name: String,
}

/// Caller-supplied fields for creating a `Variant`. The owning product must
/// already exist; the gateway rejects unknown parents as not-found.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVariant {
  pub product_id: Uuid,
  pub name: String,
}

impl NewVariant {
  pub fn validate(&self) -> RepoResult<()> {
    require_non_blank("name", &self.name)
  }
}
