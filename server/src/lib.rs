// stockroom_server/src/lib.rs

//! HTTP surface for the stockroom inventory gateway.
//!
//! The binary in `main.rs` wires these modules together; they are also
//! exported as a library so the integration tests in `tests/` can mount the
//! same route tree over an in-memory gateway.

pub mod config;
pub mod db;
pub mod errors;
pub mod seed;
pub mod state;
pub mod web;
