//! Structured UI tree.
//!
//! A front-end walks the tree and draws each node; interactive nodes carry
//! the [`UiAction`] to dispatch when activated.

use serde::{Deserialize, Serialize};

use crate::cart::LineItem;
use crate::catalog::{ItemId, PlantSummary};

/// What a grouping node represents on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionRole {
    Catalog,
    CategoryBar,
    PlantGrid,
    PlantCard,
    EmptyState,
    /// Shown while a catalog fetch is in flight.
    Loading,
    Detail,
    Cart,
    CartRow,
    /// A label/value pair laid out on one line.
    Row,
}

/// Emphasis of a text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tone {
    #[default]
    Normal,
    Muted,
    Strong,
    Error,
}

/// A user action a front-end can dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "payload", rename_all = "camelCase")]
pub enum UiAction {
    SelectAll,
    SelectCategory { id: ItemId },
    /// Open the detail modal; `summary` is shown if the fetch fails.
    OpenDetail { summary: PlantSummary },
    AddToCart { item: LineItem },
    RemoveFromCart { position: usize },
}

/// A node of the UI tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UiNode {
    Section {
        role: SectionRole,
        children: Vec<UiNode>,
    },
    Heading {
        text: String,
    },
    Text {
        text: String,
        #[serde(default)]
        tone: Tone,
    },
    Image {
        src: String,
        alt: String,
    },
    Badge {
        text: String,
    },
    Price {
        amount: f64,
        label: String,
    },
    /// Clickable text, such as a plant name that opens the detail modal.
    Link {
        label: String,
        action: UiAction,
    },
    Button {
        label: String,
        /// `None` renders a disabled control.
        action: Option<UiAction>,
        #[serde(default)]
        active: bool,
    },
}

impl UiNode {
    pub fn section(role: SectionRole, children: Vec<UiNode>) -> Self {
        Self::Section { role, children }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            tone: Tone::Normal,
        }
    }

    pub fn text_with_tone(text: impl Into<String>, tone: Tone) -> Self {
        Self::Text {
            text: text.into(),
            tone,
        }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading { text: text.into() }
    }

    pub fn badge(text: impl Into<String>) -> Self {
        Self::Badge { text: text.into() }
    }

    pub fn button(label: impl Into<String>, action: Option<UiAction>, active: bool) -> Self {
        Self::Button {
            label: label.into(),
            action,
            active,
        }
    }

    pub fn children(&self) -> &[UiNode] {
        match self {
            Self::Section { children, .. } => children,
            _ => &[],
        }
    }

    /// Collects the actions of all interactive nodes, depth first, in
    /// document order.
    pub fn actions(&self) -> Vec<&UiAction> {
        let mut out = Vec::new();
        self.collect_actions(&mut out);
        out
    }

    fn collect_actions<'a>(&'a self, out: &mut Vec<&'a UiAction>) {
        match self {
            Self::Link { action, .. } => out.push(action),
            Self::Button {
                action: Some(action),
                ..
            } => out.push(action),
            Self::Section { children, .. } => {
                for child in children {
                    child.collect_actions(out);
                }
            }
            _ => {}
        }
    }

    /// Finds the first section with `role`, searching depth first.
    pub fn find_section(&self, role: SectionRole) -> Option<&UiNode> {
        match self {
            Self::Section { role: own, .. } if *own == role => Some(self),
            Self::Section { children, .. } => {
                children.iter().find_map(|child| child.find_section(role))
            }
            _ => None,
        }
    }

    /// Counts sections with `role`, searching depth first.
    pub fn count_sections(&self, role: SectionRole) -> usize {
        match self {
            Self::Section {
                role: own,
                children,
            } => {
                let nested: usize = children.iter().map(|c| c.count_sections(role)).sum();
                nested + usize::from(*own == role)
            }
            _ => 0,
        }
    }
}
