//! `storecart-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the product and
//! cart crates (no IO, no storage, no logging setup).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CustomerId, ProductCode};
