//! Products domain module.
//!
//! This crate contains the catalog value handed to carts, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod product;

pub use product::Product;
pub use storecart_core::ProductCode;
