// stockroom_core/src/model/mod.rs

//! Entity shapes for the inventory tree, plus the caller-supplied draft and
//! patch types the gateway accepts.
//!
//! Ownership is strictly hierarchical and acyclic:
//! Category -> Product -> Variant -> SubVariant. Relationships are expressed
//! as foreign-key fields on the child, never as object pointers, so entities
//! stay flat records suitable for table/arena storage.

use std::fmt;

use rust_decimal::Decimal;

use crate::error::{RepoResult, RepositoryError};

// Declare child modules for each entity
pub mod category;
pub mod product;
pub mod sub_variant;
pub mod variant;

// Re-export the entity, draft and patch structs for convenient access
pub use category::{Category, NewCategory};
pub use product::{NewProduct, Product, ProductPatch};
pub use sub_variant::{NewSubVariant, SubVariant};
pub use variant::{NewVariant, Variant};

/// The four record kinds the gateway stores. Used to report which kind a
/// failed lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
  Product,
  Category,
  Variant,
  SubVariant,
}

impl fmt::Display for EntityKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      EntityKind::Product => "product",
      EntityKind::Category => "category",
      EntityKind::Variant => "variant",
      EntityKind::SubVariant => "sub-variant",
    };
    f.write_str(name)
  }
}

// --- Shared validation helpers for drafts and patches ---
//
// Public so out-of-crate gateway implementations can enforce the same rules
// on inputs that arrive outside a draft (e.g. a bare stock replacement).

pub fn require_non_blank(field: &'static str, value: &str) -> RepoResult<()> {
  if value.trim().is_empty() {
    return Err(RepositoryError::Validation(format!("{} must not be blank", field)));
  }
  Ok(())
}

pub fn require_non_negative(field: &'static str, value: Decimal) -> RepoResult<()> {
  if value < Decimal::ZERO {
    return Err(RepositoryError::Validation(format!(
      "{} must not be negative (got {})",
      field, value
    )));
  }
  Ok(())
}
