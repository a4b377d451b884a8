//! Application layer for Arbor.
//!
//! Controllers that turn catalog fetches into view models, the shared
//! loading indicator, and the [`Storefront`] use case that routes UI actions
//! to them.

pub mod catalog_controller;
pub mod detail_controller;
pub mod loading;
pub mod storefront;

#[cfg(test)]
mod test_support;

pub use catalog_controller::CatalogViewController;
pub use detail_controller::DetailModalController;
pub use loading::{LoadingGuard, LoadingIndicator};
pub use storefront::{StoreUpdate, Storefront};
