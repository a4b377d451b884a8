//! Catalog view controller.
//!
//! Drives the category bar and the plant list. Every navigation action
//! re-fetches; nothing is cached between selections.
//!
//! Overlapping requests are allowed. The view lock is only taken to apply a
//! result, never across a fetch, so results land in arrival order and the
//! last response wins.

use std::sync::Arc;

use arbor_core::catalog::{CatalogClient, ItemId, extract_categories, extract_plants};
use arbor_core::error::Result;
use arbor_core::view::{ActiveCategory, CatalogView, CategoryBar, PlantArea};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::loading::LoadingIndicator;

pub const CATEGORIES_FAILED_MESSAGE: &str = "Failed to load categories";
pub const PLANTS_FAILED_MESSAGE: &str = "Failed to load plants";
pub const CATEGORY_PLANTS_FAILED_MESSAGE: &str = "Failed to load category plants";

#[derive(Debug, Default)]
struct CatalogState {
    categories: CategoryBar,
    active: ActiveCategory,
    plants: PlantArea,
}

pub struct CatalogViewController {
    client: Arc<dyn CatalogClient>,
    loading: LoadingIndicator,
    state: Mutex<CatalogState>,
}

impl CatalogViewController {
    pub fn new(client: Arc<dyn CatalogClient>, loading: LoadingIndicator) -> Self {
        Self {
            client,
            loading,
            state: Mutex::new(CatalogState::default()),
        }
    }

    /// Loads the category bar, then selects "All" and loads every plant.
    ///
    /// When the category fetch fails the bar shows an inline error and no
    /// plant fetch is issued.
    pub async fn load_categories(&self) {
        if self.refresh_categories().await {
            self.select_all_categories().await;
        }
    }

    /// Fetches the category bar only. Returns `false` when the bar ended up
    /// showing the inline error.
    pub async fn refresh_categories(&self) -> bool {
        let result = {
            let _guard = self.loading.begin();
            self.client.categories().await
        };

        let (bar, loaded) = match result {
            Ok(payload) => {
                let categories = extract_categories(&payload);
                tracing::debug!(count = categories.len(), "categories loaded");
                (CategoryBar::Loaded(categories), true)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load categories");
                (
                    CategoryBar::Failed(CATEGORIES_FAILED_MESSAGE.to_string()),
                    false,
                )
            }
        };
        self.state.lock().await.categories = bar;
        loaded
    }

    /// Marks "All" active and loads the full plant list.
    pub async fn select_all_categories(&self) {
        self.state.lock().await.active = ActiveCategory::All;

        let result = {
            let _guard = self.loading.begin();
            self.client.all_plants().await
        };
        self.apply_plants(result, PLANTS_FAILED_MESSAGE).await;
    }

    /// Marks `category_id` active and loads its plants.
    pub async fn select_category(&self, category_id: &ItemId) {
        self.state.lock().await.active = ActiveCategory::Category(category_id.clone());

        let result = {
            let _guard = self.loading.begin();
            self.client.plants_by_category(category_id).await
        };
        self.apply_plants(result, CATEGORY_PLANTS_FAILED_MESSAGE)
            .await;
    }

    /// Current view model, including the loading flag.
    pub async fn snapshot(&self) -> CatalogView {
        let state = self.state.lock().await;
        CatalogView {
            categories: state.categories.clone(),
            active: state.active.clone(),
            plants: state.plants.clone(),
            loading: self.loading.is_loading(),
        }
    }

    /// Replaces the plant area with a fetch result. The active marker is
    /// left untouched on failure.
    async fn apply_plants(&self, result: Result<Value>, failure_message: &str) {
        let area = match result {
            Ok(payload) => PlantArea::from_plants(extract_plants(&payload)),
            Err(err) => {
                tracing::error!(error = %err, "failed to load plants");
                PlantArea::Failed(failure_message.to_string())
            }
        };
        self.state.lock().await.plants = area;
    }
}
