//! In-memory CatalogClient for controller tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use arbor_core::catalog::{CatalogClient, ItemId};
use arbor_core::error::{ArborError, Result};
use async_trait::async_trait;
use serde_json::Value;

#[derive(Clone)]
enum Reply {
    Json(Value),
    Status(u16),
}

#[derive(Clone)]
struct Route {
    reply: Reply,
    delay: Duration,
}

/// Answers catalog requests from a path table; unknown paths answer 404.
#[derive(Default)]
pub(crate) struct MockCatalogClient {
    routes: Mutex<HashMap<String, Route>>,
    calls: Mutex<Vec<String>>,
}

impl MockCatalogClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_json(self, path: &str, body: Value) -> Self {
        self.with_delayed_json(path, body, Duration::ZERO)
    }

    pub(crate) fn with_delayed_json(self, path: &str, body: Value, delay: Duration) -> Self {
        self.route(path, Reply::Json(body), delay)
    }

    pub(crate) fn with_status(self, path: &str, status: u16) -> Self {
        self.route(path, Reply::Status(status), Duration::ZERO)
    }

    fn route(self, path: &str, reply: Reply, delay: Duration) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_string(), Route { reply, delay });
        self
    }

    /// Paths requested so far, in request order.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn respond(&self, path: String) -> Result<Value> {
        self.calls.lock().unwrap().push(path.clone());
        let route = self.routes.lock().unwrap().get(&path).cloned();

        let Some(route) = route else {
            return Err(ArborError::http_status(404, path));
        };

        if !route.delay.is_zero() {
            tokio::time::sleep(route.delay).await;
        }

        match route.reply {
            Reply::Json(body) => Ok(body),
            Reply::Status(status) => Err(ArborError::http_status(status, path)),
        }
    }
}

#[async_trait]
impl CatalogClient for MockCatalogClient {
    async fn categories(&self) -> Result<Value> {
        self.respond("/categories".to_string()).await
    }

    async fn all_plants(&self) -> Result<Value> {
        self.respond("/plants".to_string()).await
    }

    async fn plants_by_category(&self, category_id: &ItemId) -> Result<Value> {
        self.respond(format!("/category/{}", category_id)).await
    }

    async fn plant_detail(&self, plant_id: &ItemId) -> Result<Value> {
        self.respond(format!("/plant/{}", plant_id)).await
    }
}
