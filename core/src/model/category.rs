// stockroom_core/src/model/category.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::require_non_blank;
use crate::error::RepoResult;

/// Top level of the ownership tree. Owns products through
/// `Product::category_id`; a product may also belong to no category at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
  pub id: Uuid,
  pub name: String,
}

/// Caller-supplied fields for creating a `Category`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCategory {
  pub name: String,
}

impl NewCategory {
  pub fn validate(&self) -> RepoResult<()> {
    require_non_blank("name", &self.name)
  }
}
