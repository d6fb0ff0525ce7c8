// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use rust_decimal::Decimal;
use stockroom::{NewCategory, NewProduct, NewSubVariant, NewVariant};
use tracing::Level;
use uuid::Uuid;

// --- Draft constructors shared by the gateway tests ---

pub fn product_draft(code: &str, name: &str) -> NewProduct {
  NewProduct {
    product_code: code.to_string(),
    name: name.to_string(),
    ..NewProduct::default()
  }
}

/// Minimal valid product draft: code "P-001", name "Widget".
pub fn widget_draft() -> NewProduct {
  product_draft("P-001", "Widget")
}

pub fn variant_draft(product_id: Uuid, name: &str) -> NewVariant {
  NewVariant {
    product_id,
    name: name.to_string(),
  }
}

pub fn sub_variant_draft(variant_id: Uuid, label: &str, stock: Decimal) -> NewSubVariant {
  NewSubVariant {
    variant_id,
    option_label: label.to_string(),
    stock,
  }
}

pub fn category_draft(name: &str) -> NewCategory {
  NewCategory {
    name: name.to_string(),
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
