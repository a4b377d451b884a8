//! Catalog domain models.
//!
//! These are the canonical shapes produced by the normalizer. Nothing outside
//! [`super::normalizer`] ever looks at a raw payload.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder image used when a plant record has no `image`.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/600x400?text=No+Image";

/// Category label used when a plant record has no `category`.
pub const DEFAULT_PLANT_CATEGORY: &str = "Fruit Tree";

/// Name used when a plant record has neither `plant_name` nor `name`.
pub const UNKNOWN_PLANT_NAME: &str = "Unknown Plant";

/// Identifier of a category or plant.
///
/// The API hands out ids as JSON numbers on some endpoints and strings on
/// others, so both collapse into one canonical string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// A catalog category, as shown in the category bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Option<ItemId>,
    pub display_name: String,
}

/// A plant as shown on a list card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: Option<ItemId>,
    pub name: String,
    pub image_url: String,
    pub category: String,
    pub price: f64,
    pub short_description: String,
}

impl Plant {
    /// The data a card already knows, used when the detail fetch fails.
    pub fn summary(&self) -> PlantSummary {
        PlantSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.short_description.clone(),
            price: self.price,
            category: self.category.clone(),
        }
    }
}

/// Full plant record from the detail endpoint.
///
/// Fields are optional because the detail view merges them over a
/// [`PlantSummary`]; a missing field falls through to the summary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantDetail {
    pub id: Option<ItemId>,
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub short_description: Option<String>,
    pub description: Option<String>,
}

/// Partial plant data carried by a card.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantSummary {
    pub id: Option<ItemId>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
}
