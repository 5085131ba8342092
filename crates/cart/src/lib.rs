//! Shopping cart domain module.
//!
//! Line items, per-customer carts and the registry that hands carts out to an
//! embedding session layer. Everything here is synchronous, in-memory domain
//! logic (no IO, no HTTP, no storage). Sharing a registry or cart across
//! threads requires the caller to wrap it (e.g. `Mutex<CartRegistry>`).

pub mod cart;
pub mod config;
pub mod line_item;
pub mod registry;

pub use cart::Cart;
pub use config::TicketConfig;
pub use line_item::LineItem;
pub use registry::CartRegistry;

pub use rust_decimal::{Decimal, RoundingStrategy};
pub use storecart_core::{CustomerId, DomainError, DomainResult, ProductCode};
pub use storecart_products::Product;
