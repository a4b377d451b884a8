//! Pure renderers from view models to [`UiNode`] trees.

use super::model::{ActiveCategory, CatalogView, CategoryBar, DetailView, PlantArea};
use super::tree::{SectionRole, Tone, UiAction, UiNode};
use crate::cart::{CartSummary, LineItem};
use crate::catalog::Plant;

/// Bangladeshi taka sign used in front of every price.
pub const CURRENCY_SIGN: &str = "৳";

pub const ALL_CATEGORIES_LABEL: &str = "All Trees";
pub const EMPTY_PLANTS_TEXT: &str = "No plants found in this category.";
pub const EMPTY_CART_TEXT: &str = "Cart is empty.";
pub const LOADING_TEXT: &str = "Loading…";

const ADD_TO_CART_LABEL: &str = "Add to Cart";
const REMOVE_LABEL: &str = "Remove";

/// Formats an amount the way the storefront shows it: integral values
/// without a fractional part.
pub fn format_amount(amount: f64) -> String {
    // -0 would otherwise print as "-0"
    if amount == 0.0 {
        return "0".to_string();
    }
    amount.to_string()
}

/// Formats an amount with the currency sign, e.g. `৳150`.
pub fn format_price(amount: f64) -> String {
    format!("{}{}", CURRENCY_SIGN, format_amount(amount))
}

fn price_node(amount: f64) -> UiNode {
    UiNode::Price {
        amount,
        label: format_price(amount),
    }
}

/// Renders the category bar: "All Trees" first, then one button per category.
pub fn render_category_bar(bar: &CategoryBar, active: &ActiveCategory) -> UiNode {
    let children = match bar {
        CategoryBar::NotLoaded => Vec::new(),
        CategoryBar::Failed(message) => vec![UiNode::text_with_tone(message, Tone::Error)],
        CategoryBar::Loaded(categories) => {
            let mut buttons = Vec::with_capacity(categories.len() + 1);
            buttons.push(UiNode::button(
                ALL_CATEGORIES_LABEL,
                Some(UiAction::SelectAll),
                *active == ActiveCategory::All,
            ));
            buttons.extend(categories.iter().map(|category| match &category.id {
                Some(id) => UiNode::button(
                    &category.display_name,
                    Some(UiAction::SelectCategory { id: id.clone() }),
                    active.is_category(id),
                ),
                // No id means nothing to fetch
                None => UiNode::button(&category.display_name, None, false),
            }));
            buttons
        }
    };

    UiNode::section(SectionRole::CategoryBar, children)
}

fn render_plant_card(plant: &Plant) -> UiNode {
    UiNode::section(
        SectionRole::PlantCard,
        vec![
            UiNode::Image {
                src: plant.image_url.clone(),
                alt: plant.name.clone(),
            },
            UiNode::Link {
                label: plant.name.clone(),
                action: UiAction::OpenDetail {
                    summary: plant.summary(),
                },
            },
            UiNode::text_with_tone(&plant.short_description, Tone::Muted),
            UiNode::badge(&plant.category),
            price_node(plant.price),
            UiNode::button(
                ADD_TO_CART_LABEL,
                Some(UiAction::AddToCart {
                    item: LineItem::from(plant),
                }),
                false,
            ),
        ],
    )
}

/// Renders the plant area: a grid of cards, the empty placeholder, or the
/// inline error.
pub fn render_plant_area(area: &PlantArea) -> UiNode {
    match area {
        PlantArea::NotLoaded => UiNode::section(SectionRole::PlantGrid, Vec::new()),
        PlantArea::Loaded(plants) => UiNode::section(
            SectionRole::PlantGrid,
            plants.iter().map(render_plant_card).collect(),
        ),
        PlantArea::Empty => UiNode::section(
            SectionRole::EmptyState,
            vec![UiNode::text_with_tone(EMPTY_PLANTS_TEXT, Tone::Muted)],
        ),
        PlantArea::Failed(message) => UiNode::section(
            SectionRole::PlantGrid,
            vec![UiNode::text_with_tone(message, Tone::Error)],
        ),
    }
}

/// Renders the whole catalog page: category bar followed by the plant area.
///
/// While a fetch is in flight a loading section sits between the two.
pub fn render_catalog(view: &CatalogView) -> UiNode {
    let mut children = vec![render_category_bar(&view.categories, &view.active)];
    if view.loading {
        children.push(UiNode::section(
            SectionRole::Loading,
            vec![UiNode::text_with_tone(LOADING_TEXT, Tone::Muted)],
        ));
    }
    children.push(render_plant_area(&view.plants));
    UiNode::section(SectionRole::Catalog, children)
}

/// Renders the detail modal body.
pub fn render_detail(view: &DetailView) -> UiNode {
    let mut children = vec![UiNode::heading(&view.name)];
    if !view.category.is_empty() {
        children.push(UiNode::badge(&view.category));
    }
    children.push(UiNode::text(&view.description));
    children.push(UiNode::section(
        SectionRole::Row,
        vec![
            UiNode::text_with_tone("Price", Tone::Strong),
            price_node(view.price),
        ],
    ));

    UiNode::section(SectionRole::Detail, children)
}

/// Renders the cart: one row per line and the grand total.
pub fn render_cart(summary: &CartSummary) -> UiNode {
    let mut children = Vec::with_capacity(summary.rows.len() + 1);

    if summary.is_empty() {
        children.push(UiNode::text_with_tone(EMPTY_CART_TEXT, Tone::Muted));
    } else {
        children.extend(summary.rows.iter().map(|row| {
            UiNode::section(
                SectionRole::CartRow,
                vec![
                    UiNode::text_with_tone(&row.name, Tone::Strong),
                    UiNode::text_with_tone(
                        format!("{} × {}", format_price(row.unit_price), row.quantity),
                        Tone::Muted,
                    ),
                    UiNode::button(
                        REMOVE_LABEL,
                        Some(UiAction::RemoveFromCart {
                            position: row.position,
                        }),
                        false,
                    ),
                ],
            )
        }));
    }

    children.push(UiNode::section(
        SectionRole::Row,
        vec![
            UiNode::text_with_tone("Total", Tone::Strong),
            price_node(summary.total),
        ],
    ));

    UiNode::section(SectionRole::Cart, children)
}
