// stockroom_core/src/model/sub_variant.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{require_non_blank, require_non_negative};
use crate::error::RepoResult;

/// A concrete option under a variant (e.g. "Large" under "Size"), tracking
/// its own non-negative stock quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubVariant {
  pub id: Uuid,
  pub variant_id: Uuid,
  /// Option label, e.g. a size or a colour.
  pub option_label: String,
  pub stock: Decimal,
}

/// Caller-supplied fields for creating a `SubVariant`. The owning variant
/// must already exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSubVariant {
  pub variant_id: Uuid,
  pub option_label: String,
  #[serde(default)]
  pub stock: Decimal,
}

impl NewSubVariant {
  pub fn validate(&self) -> RepoResult<()> {
    require_non_blank("option_label", &self.option_label)?;
    require_non_negative("stock", self.stock)
  }
}
