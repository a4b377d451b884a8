//! Infrastructure layer for Arbor.
//!
//! The `reqwest` implementation of the catalog client, its URL table, and
//! configuration loading from `~/.config/arbor/config.toml`.

pub mod config_service;
pub mod endpoints;
pub mod http_catalog_client;
pub mod paths;

pub use crate::config_service::{BASE_URL_ENV, ConfigService};
pub use crate::endpoints::Endpoints;
pub use crate::http_catalog_client::HttpCatalogClient;
pub use crate::paths::ArborPaths;
