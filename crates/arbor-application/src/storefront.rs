//! Storefront use case.
//!
//! Wires the controllers to one client and one loading indicator and
//! dispatches [`UiAction`]s coming back from a rendered UI tree. The cart is
//! owned by the caller and passed in, so the front-end decides where it
//! lives.

use std::sync::Arc;

use arbor_core::cart::{Cart, CartSummary};
use arbor_core::catalog::CatalogClient;
use arbor_core::view::{CatalogView, DetailView, UiAction};

use crate::catalog_controller::CatalogViewController;
use crate::detail_controller::DetailModalController;
use crate::loading::LoadingIndicator;

/// What changed after an action, for the front-end to redraw.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreUpdate {
    Catalog(CatalogView),
    Detail(DetailView),
    Cart(CartSummary),
}

/// Cheap to clone; clones share controllers and the loading indicator.
#[derive(Clone)]
pub struct Storefront {
    catalog: Arc<CatalogViewController>,
    detail: Arc<DetailModalController>,
    loading: LoadingIndicator,
}

impl Storefront {
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        let loading = LoadingIndicator::new();
        Self {
            catalog: Arc::new(CatalogViewController::new(
                Arc::clone(&client),
                loading.clone(),
            )),
            detail: Arc::new(DetailModalController::new(client, loading.clone())),
            loading,
        }
    }

    pub fn catalog(&self) -> &CatalogViewController {
        &self.catalog
    }

    pub fn detail(&self) -> &DetailModalController {
        &self.detail
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Initial page load: categories, then every plant.
    pub async fn start(&self) -> CatalogView {
        self.catalog.load_categories().await;
        self.catalog.snapshot().await
    }

    /// Runs a navigation action. Returns `None` for cart actions, which
    /// need the cart and go through [`Storefront::apply_to_cart`].
    pub async fn navigate(&self, action: &UiAction) -> Option<StoreUpdate> {
        match action {
            UiAction::SelectAll => {
                self.catalog.select_all_categories().await;
                Some(StoreUpdate::Catalog(self.catalog.snapshot().await))
            }
            UiAction::SelectCategory { id } => {
                self.catalog.select_category(id).await;
                Some(StoreUpdate::Catalog(self.catalog.snapshot().await))
            }
            UiAction::OpenDetail { summary } => {
                let view = self.detail.open_detail(summary.id.as_ref(), summary).await;
                Some(StoreUpdate::Detail(view))
            }
            UiAction::AddToCart { .. } | UiAction::RemoveFromCart { .. } => None,
        }
    }

    /// Applies a cart action synchronously. Returns `None` for navigation
    /// actions.
    ///
    /// # Panics
    ///
    /// Panics on a `RemoveFromCart` position that is not in `cart`; positions
    /// must come from a summary rendered from the same cart.
    pub fn apply_to_cart(action: &UiAction, cart: &mut Cart) -> Option<CartSummary> {
        match action {
            UiAction::AddToCart { item } => cart.add(item.clone()),
            UiAction::RemoveFromCart { position } => {
                cart.remove_at(*position);
            }
            _ => return None,
        }
        Some(cart.render_summary())
    }

    /// Dispatches any action.
    pub async fn dispatch(&self, action: &UiAction, cart: &mut Cart) -> StoreUpdate {
        if let Some(summary) = Self::apply_to_cart(action, cart) {
            return StoreUpdate::Cart(summary);
        }
        match self.navigate(action).await {
            Some(update) => update,
            // Every action is either a cart or a navigation action.
            None => StoreUpdate::Cart(cart.render_summary()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockCatalogClient;
    use arbor_core::cart::LineItem;
    use arbor_core::catalog::ItemId;
    use arbor_core::view::{
        ActiveCategory, DetailSource, SectionRole, render_cart, render_catalog,
    };
    use serde_json::json;

    fn storefront() -> Storefront {
        Storefront::new(Arc::new(
            MockCatalogClient::new()
                .with_json("/categories", json!({"data": [{"id": 1, "category_name": "Fruit"}]}))
                .with_json(
                    "/plants",
                    json!({"data": [
                        {"id": 9, "plant_name": "Mango", "price": "150"},
                        {"id": 10, "plant_name": "Neem", "price": 90}
                    ]}),
                )
                .with_json(
                    "/category/1",
                    json!({"data": [{"id": 9, "plant_name": "Mango", "price": "150"}]}),
                )
                .with_status("/plant/9", 500),
        ))
    }

    #[tokio::test]
    async fn test_start_renders_all_plants() {
        let store = storefront();
        let view = store.start().await;

        assert_eq!(view.active, ActiveCategory::All);
        assert_eq!(
            render_catalog(&view).count_sections(SectionRole::PlantCard),
            2
        );
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_actions_from_rendered_tree() {
        let store = storefront();
        let mut cart = Cart::new();
        let view = store.start().await;
        let tree = render_catalog(&view);

        // Category bar: All, Fruit. Then per card: open detail, add to cart.
        let actions: Vec<UiAction> = tree.actions().into_iter().cloned().collect();
        assert_eq!(actions.len(), 6);

        let update = store.dispatch(&actions[1], &mut cart).await;
        let StoreUpdate::Catalog(view) = update else {
            panic!("Expected catalog update");
        };
        assert_eq!(view.active, ActiveCategory::Category(ItemId::from(1)));
        assert_eq!(view.plants.plants().len(), 1);

        // Add Mango twice from the earlier tree.
        store.dispatch(&actions[3], &mut cart).await;
        let update = store.dispatch(&actions[3], &mut cart).await;
        let StoreUpdate::Cart(summary) = update else {
            panic!("Expected cart update");
        };
        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.total, 300.0);

        let cart_tree = render_cart(&summary);
        let remove_second = cart_tree.actions()[1].clone();
        let StoreUpdate::Cart(summary) = store.dispatch(&remove_second, &mut cart).await else {
            panic!("Expected cart update");
        };
        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.total, 150.0);
    }

    #[tokio::test]
    async fn test_open_detail_failure_shows_fallback() {
        let store = storefront();
        let view = store.start().await;
        let tree = render_catalog(&view);

        let open_mango = tree
            .actions()
            .into_iter()
            .find(|action| matches!(action, UiAction::OpenDetail { .. }))
            .cloned()
            .unwrap();

        let update = store.navigate(&open_mango).await.unwrap();
        let StoreUpdate::Detail(detail) = update else {
            panic!("Expected detail update");
        };
        assert_eq!(detail.source, DetailSource::Fallback);
        assert_eq!(detail.name, "Mango");
        assert_eq!(detail.price, 150.0);
    }

    #[test]
    fn test_apply_to_cart_ignores_navigation() {
        let mut cart = Cart::new();
        assert_eq!(Storefront::apply_to_cart(&UiAction::SelectAll, &mut cart), None);

        let item = LineItem::new(Some(ItemId::from(1)), "Mango", 150.0);
        let summary =
            Storefront::apply_to_cart(&UiAction::AddToCart { item }, &mut cart).unwrap();
        assert_eq!(summary.total, 150.0);
    }
}
