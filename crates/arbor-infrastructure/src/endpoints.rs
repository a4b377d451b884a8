//! URL table for the catalog API.

use arbor_core::catalog::ItemId;
use reqwest::Url;

/// Builds the four endpoint URLs from a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// Creates the table; trailing slashes on `base_url` are dropped.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn categories(&self) -> String {
        self.join(&["categories"])
    }

    pub fn all_plants(&self) -> String {
        self.join(&["plants"])
    }

    pub fn plants_by_category(&self, category_id: &ItemId) -> String {
        self.join(&["category", category_id.as_str()])
    }

    pub fn plant_detail(&self, plant_id: &ItemId) -> String {
        self.join(&["plant", plant_id.as_str()])
    }

    /// Appends `segments` to the base path. Each segment is percent-encoded,
    /// `/` included, and `.`/`..` segments are dropped, so an id never
    /// leaves its own path segment.
    fn join(&self, segments: &[&str]) -> String {
        let mut url = match Url::parse(&self.base_url) {
            Ok(url) if !url.cannot_be_a_base() => url,
            // Left for the HTTP client to reject with the URL in the error.
            _ => return format!("{}/{}", self.base_url, segments.join("/")),
        };

        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(
                segments
                    .iter()
                    .filter(|segment| !matches!(**segment, "." | "..")),
            );
        }
        url.into()
    }
}
