//! Cart domain models.

use serde::{Deserialize, Serialize};

use crate::catalog::{ItemId, Plant};

/// One cart line, created by a single add-to-cart action.
///
/// Quantity is implicitly 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: Option<ItemId>,
    pub name: String,
    pub unit_price: f64,
}

impl LineItem {
    pub fn new(id: Option<ItemId>, name: impl Into<String>, unit_price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
        }
    }
}

impl From<&Plant> for LineItem {
    fn from(plant: &Plant) -> Self {
        Self::new(plant.id.clone(), plant.name.clone(), plant.price)
    }
}

/// One displayed row of the cart summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartRow {
    /// 0-based position, valid for [`Cart::remove_at`] until the next mutation.
    pub position: usize,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

/// View model of the whole cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub rows: Vec<CartRow>,
    pub total: f64,
}

impl CartSummary {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Ordered collection of line items.
///
/// Insertion order is display order. Adding the same plant twice yields two
/// lines; nothing is merged by id. The total is always derived from the
/// current lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line.
    pub fn add(&mut self, item: LineItem) {
        self.lines.push(item);
    }

    /// Removes the line at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds. Positions come from a
    /// [`CartSummary`] rendered from this cart, so an invalid one is a bug in
    /// the caller.
    pub fn remove_at(&mut self, position: usize) -> LineItem {
        assert!(
            position < self.lines.len(),
            "cart position {} out of bounds (len {})",
            position,
            self.lines.len()
        );
        self.lines.remove(position)
    }

    /// Removes the line at `position`, or returns `None` when out of bounds.
    ///
    /// For front-ends that take positions from free-form user input.
    pub fn try_remove_at(&mut self, position: usize) -> Option<LineItem> {
        (position < self.lines.len()).then(|| self.lines.remove(position))
    }

    /// Sum of unit prices over all lines.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(|line| line.unit_price).sum()
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Builds the ordered view model from the current lines.
    pub fn render_summary(&self) -> CartSummary {
        CartSummary {
            rows: self
                .lines
                .iter()
                .enumerate()
                .map(|(position, line)| CartRow {
                    position,
                    name: line.name.clone(),
                    unit_price: line.unit_price,
                    quantity: 1,
                })
                .collect(),
            total: self.total(),
        }
    }
}
