//! View layer module.
//!
//! View models describe what a screen region shows; the renderers turn them
//! into a [`UiNode`] tree that any front-end (terminal, JSON, a web shell)
//! can draw without knowing about payloads or controllers.
//!
//! # Module Structure
//!
//! - `model`: View models produced by the controllers
//! - `tree`: The structured UI tree and its actions
//! - `render`: Pure functions from view models to UI trees

mod model;
mod render;
mod tree;

// Re-export public API
pub use model::{ActiveCategory, CatalogView, CategoryBar, DetailSource, DetailView, PlantArea};
pub use render::{
    ALL_CATEGORIES_LABEL, CURRENCY_SIGN, EMPTY_CART_TEXT, EMPTY_PLANTS_TEXT, LOADING_TEXT,
    format_amount, format_price, render_cart, render_catalog, render_category_bar,
    render_detail, render_plant_area,
};
pub use tree::{SectionRole, Tone, UiAction, UiNode};
