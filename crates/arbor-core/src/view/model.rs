//! View models produced by the controllers.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, ItemId, Plant};

/// Which category control is highlighted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum ActiveCategory {
    /// Nothing selected yet.
    #[default]
    None,
    /// The "All Trees" control.
    All,
    Category(ItemId),
}

impl ActiveCategory {
    pub fn is_category(&self, id: &ItemId) -> bool {
        matches!(self, Self::Category(active) if active == id)
    }
}

/// Content of the category bar.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "camelCase")]
pub enum CategoryBar {
    #[default]
    NotLoaded,
    Loaded(Vec<Category>),
    /// Inline error shown in place of the buttons.
    Failed(String),
}

/// Content of the plant list area.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "camelCase")]
pub enum PlantArea {
    #[default]
    NotLoaded,
    Loaded(Vec<Plant>),
    /// The fetch succeeded with zero plants.
    Empty,
    /// Inline error shown in place of the list.
    Failed(String),
}

impl PlantArea {
    /// Wraps a fetched list, mapping zero plants to [`PlantArea::Empty`].
    pub fn from_plants(plants: Vec<Plant>) -> Self {
        if plants.is_empty() {
            Self::Empty
        } else {
            Self::Loaded(plants)
        }
    }

    pub fn plants(&self) -> &[Plant] {
        match self {
            Self::Loaded(plants) => plants,
            _ => &[],
        }
    }
}

/// Snapshot of the catalog page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub categories: CategoryBar,
    pub active: ActiveCategory,
    pub plants: PlantArea,
    pub loading: bool,
}

/// Where the data in a [`DetailView`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DetailSource {
    /// The detail endpoint answered with a usable record.
    Remote,
    /// The card's own summary, after the detail fetch failed.
    Fallback,
}

/// Content of the plant detail modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView {
    pub id: Option<ItemId>,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Empty when unknown; the badge is then omitted.
    pub category: String,
    pub source: DetailSource,
}
