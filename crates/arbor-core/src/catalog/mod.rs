//! Catalog domain module.
//!
//! # Module Structure
//!
//! - `model`: Canonical catalog types (`Category`, `Plant`, `PlantDetail`, `PlantSummary`)
//! - `normalizer`: Envelope and field-name normalization of raw payloads
//! - `client`: Transport trait for the catalog endpoints

mod client;
mod model;
pub mod normalizer;

// Re-export public API
pub use client::CatalogClient;
pub use model::{
    Category, DEFAULT_PLANT_CATEGORY, ItemId, PLACEHOLDER_IMAGE_URL, Plant, PlantDetail,
    PlantSummary, UNKNOWN_PLANT_NAME,
};
pub use normalizer::{
    coerce_price, extract_categories, extract_plant_detail, extract_plants, resolve_id,
};
