//! Detail modal controller.
//!
//! Fetches the full record for a plant. Whatever goes wrong, the modal still
//! opens with the summary the card already carried.

use std::sync::Arc;

use arbor_core::catalog::{CatalogClient, ItemId, PlantDetail, PlantSummary, extract_plant_detail};
use arbor_core::view::{DetailSource, DetailView};

use crate::loading::LoadingIndicator;

pub const DEFAULT_DETAIL_TITLE: &str = "Tree Details";
pub const NO_DESCRIPTION_TEXT: &str = "No description available.";

pub struct DetailModalController {
    client: Arc<dyn CatalogClient>,
    loading: LoadingIndicator,
}

impl DetailModalController {
    pub fn new(client: Arc<dyn CatalogClient>, loading: LoadingIndicator) -> Self {
        Self { client, loading }
    }

    /// Opens the detail view for `id`.
    ///
    /// On success the fetched record is merged over `fallback` field by
    /// field. On a transport error, an unusable payload, or a missing id,
    /// the view is built from `fallback` alone.
    pub async fn open_detail(&self, id: Option<&ItemId>, fallback: &PlantSummary) -> DetailView {
        let Some(id) = id else {
            tracing::warn!(name = %fallback.name, "plant has no id, showing card data");
            return fallback_view(fallback);
        };

        let result = {
            let _guard = self.loading.begin();
            self.client.plant_detail(id).await
        };

        match result {
            Ok(payload) => match extract_plant_detail(&payload) {
                Some(detail) => merge_detail(id, &detail, fallback),
                None => {
                    tracing::warn!(%id, "detail payload had no plant record, showing card data");
                    fallback_view(fallback)
                }
            },
            Err(err) => {
                tracing::error!(%id, error = %err, "failed to load plant detail");
                fallback_view(fallback)
            }
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn merge_detail(id: &ItemId, detail: &PlantDetail, fallback: &PlantSummary) -> DetailView {
    DetailView {
        id: detail.id.clone().or_else(|| Some(id.clone())),
        name: detail
            .name
            .clone()
            .or_else(|| non_empty(&fallback.name))
            .unwrap_or_else(|| DEFAULT_DETAIL_TITLE.to_string()),
        description: detail
            .description
            .clone()
            .or_else(|| non_empty(&fallback.description))
            .unwrap_or_else(|| NO_DESCRIPTION_TEXT.to_string()),
        price: detail.price.unwrap_or(fallback.price),
        category: detail
            .category
            .clone()
            .unwrap_or_else(|| fallback.category.clone()),
        source: DetailSource::Remote,
    }
}

fn fallback_view(fallback: &PlantSummary) -> DetailView {
    DetailView {
        id: fallback.id.clone(),
        name: non_empty(&fallback.name).unwrap_or_else(|| DEFAULT_DETAIL_TITLE.to_string()),
        description: non_empty(&fallback.description)
            .unwrap_or_else(|| NO_DESCRIPTION_TEXT.to_string()),
        price: fallback.price,
        category: fallback.category.clone(),
        source: DetailSource::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockCatalogClient;
    use serde_json::json;

    fn mango_summary() -> PlantSummary {
        PlantSummary {
            id: Some(ItemId::from(9)),
            name: "Mango".to_string(),
            description: "Sweet fruit".to_string(),
            price: 150.0,
            category: "Fruit Tree".to_string(),
        }
    }

    fn controller(client: MockCatalogClient) -> (Arc<MockCatalogClient>, DetailModalController) {
        let client = Arc::new(client);
        let controller = DetailModalController::new(client.clone(), LoadingIndicator::new());
        (client, controller)
    }

    #[tokio::test]
    async fn test_open_detail_uses_remote_record() {
        let (client, controller) = controller(MockCatalogClient::new().with_json(
            "/plant/9",
            json!({"plants": null, "data": {
                "id": 9,
                "plant_name": "Mango Tree",
                "description": "A tall tropical tree with sweet fruit.",
                "category": "Fruit Tree",
                "price": "175"
            }}),
        ));

        let view = controller
            .open_detail(Some(&ItemId::from(9)), &mango_summary())
            .await;

        assert_eq!(client.calls(), vec!["/plant/9"]);
        assert_eq!(view.source, DetailSource::Remote);
        assert_eq!(view.name, "Mango Tree");
        assert_eq!(view.description, "A tall tropical tree with sweet fruit.");
        assert_eq!(view.price, 175.0);
        assert_eq!(view.category, "Fruit Tree");
    }

    #[tokio::test]
    async fn test_open_detail_merges_missing_fields_from_summary() {
        let (_, controller) = controller(
            MockCatalogClient::new().with_json("/plant/9", json!({"plant": [{"id": 9}]})),
        );

        let view = controller
            .open_detail(Some(&ItemId::from(9)), &mango_summary())
            .await;

        assert_eq!(view.source, DetailSource::Remote);
        assert_eq!(view.name, "Mango");
        assert_eq!(view.description, "Sweet fruit");
        assert_eq!(view.price, 150.0);
    }

    #[tokio::test]
    async fn test_open_detail_server_error_shows_fallback() {
        let (_, controller) = controller(MockCatalogClient::new().with_status("/plant/9", 500));

        let fallback = PlantSummary {
            id: Some(ItemId::from(9)),
            name: "Mango".to_string(),
            price: 150.0,
            ..PlantSummary::default()
        };
        let view = controller.open_detail(Some(&ItemId::from(9)), &fallback).await;

        assert_eq!(view.source, DetailSource::Fallback);
        assert_eq!(view.name, "Mango");
        assert_eq!(view.price, 150.0);
        assert_eq!(view.description, NO_DESCRIPTION_TEXT);
        assert!(!controller.loading.is_loading());
    }

    #[tokio::test]
    async fn test_open_detail_unusable_payload_shows_fallback() {
        let (_, controller) =
            controller(MockCatalogClient::new().with_json("/plant/9", json!({"data": []})));

        let view = controller
            .open_detail(Some(&ItemId::from(9)), &mango_summary())
            .await;

        assert_eq!(view.source, DetailSource::Fallback);
        assert_eq!(view.description, "Sweet fruit");
    }

    #[tokio::test]
    async fn test_open_detail_without_id_skips_fetch() {
        let (client, controller) = controller(MockCatalogClient::new());

        let view = controller.open_detail(None, &PlantSummary::default()).await;

        assert!(client.calls().is_empty());
        assert_eq!(view.source, DetailSource::Fallback);
        assert_eq!(view.name, DEFAULT_DETAIL_TITLE);
        assert_eq!(view.price, 0.0);
    }
}
