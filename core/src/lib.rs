// src/lib.rs

//! Stockroom: the inventory data model and its persistence gateway.
//!
//! The crate provides:
//!  - Entity shapes for the Category -> Product -> Variant -> SubVariant
//!    ownership tree, plus the draft and patch input types the gateway
//!    accepts (`NewProduct`, `ProductPatch`, ...).
//!  - One explicit repository trait per entity kind, and the
//!    `InventoryRepository` supertrait for holding the whole gateway behind
//!    a single `Arc<dyn InventoryRepository>`.
//!  - `InMemoryInventory`, a reference implementation backed by flat arenas
//!    behind a parking_lot lock. Tests use it as the storage fake; it also
//!    runs as a real (non-durable) backend.
//!
//! Durable backends (e.g. PostgreSQL) live with their host applications and
//! implement the same traits against the same contracts.

// Declare modules according to the planned structure
pub mod error;
pub mod model;
pub mod repository;

// --- Re-exports for the Public API ---

// Entity, draft and patch types users interact with frequently
pub use crate::model::{
  Category, EntityKind, NewCategory, NewProduct, NewSubVariant, NewVariant, Product, ProductPatch,
  SubVariant, Variant,
};

// The gateway traits and the in-memory reference implementation
pub use crate::repository::{
  CategoryRepository, InMemoryInventory, InventoryRepository, ProductRepository,
  SubVariantRepository, VariantRepository,
};

pub use crate::error::{RepoResult, RepositoryError};
