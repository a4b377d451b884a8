//! Shopping cart domain module.
//!
//! The cart is an owned value handed to whichever front-end drives it. It is
//! never persisted and lives for the lifetime of the process.

mod model;

// Re-export public API
pub use model::{Cart, CartRow, CartSummary, LineItem};
