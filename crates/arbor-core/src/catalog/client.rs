//! Remote catalog client trait.
//!
//! Defines the transport seam between the controllers and the catalog API.

use super::model::ItemId;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Read-only access to the four catalog endpoints.
///
/// Implementations are pure transport: they return the parsed JSON body and
/// leave envelope interpretation to the normalizer. A non-2xx status or a
/// request that cannot complete must surface as
/// [`ArborError::Transport`](crate::error::ArborError::Transport). No retries.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// `GET /categories`
    async fn categories(&self) -> Result<Value>;

    /// `GET /plants`
    async fn all_plants(&self) -> Result<Value>;

    /// `GET /category/{id}`
    async fn plants_by_category(&self, category_id: &ItemId) -> Result<Value>;

    /// `GET /plant/{id}`
    async fn plant_detail(&self, plant_id: &ItemId) -> Result<Value>;
}
