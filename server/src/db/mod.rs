// stockroom_server/src/db/mod.rs

// Declare database-backed gateway implementations
pub mod postgres;

pub use postgres::PgInventory;
