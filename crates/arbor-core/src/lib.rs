//! Domain layer for the Arbor storefront.
//!
//! Everything here is free of I/O: payload normalization, the cart, the
//! UI tree and its renderers, and the [`CatalogClient`](catalog::CatalogClient)
//! seam that the infrastructure crate implements over HTTP.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod view;

// Re-export common error type
pub use error::{ArborError, Result};
