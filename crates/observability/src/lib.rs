//! Tracing/logging setup for processes embedding the cart domain.
//!
//! The domain crates only emit `tracing` events; nothing is printed until an
//! embedder installs a subscriber, typically through [`init`].

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Subscriber configuration (filters, formatting).
pub mod tracing;
