//! Terminal painter for the UI tree.
//!
//! Interactive controls get the numbers the shop commands refer to:
//! category buttons from `0` ("All Trees"), plant cards and cart lines
//! from `1`.

use arbor_core::view::{SectionRole, Tone, UiAction, UiNode};
use colored::Colorize;

const INDENT: &str = "    ";

/// Paints a tree into printable lines.
pub fn paint(node: &UiNode) -> String {
    let mut painter = Painter::default();
    painter.node(node);
    painter.out
}

#[derive(Default)]
struct Painter {
    out: String,
}

impl Painter {
    fn line(&mut self, text: impl AsRef<str>) {
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    fn node(&mut self, node: &UiNode) {
        let UiNode::Section { role, children } = node else {
            let text = inline(node);
            self.line(text);
            return;
        };

        match role {
            SectionRole::CategoryBar => self.category_bar(children),
            SectionRole::PlantGrid => {
                let mut number = 0;
                for child in children {
                    if matches!(child, UiNode::Section { role: SectionRole::PlantCard, .. }) {
                        number += 1;
                        self.card(number, child.children());
                    } else {
                        self.node(child);
                    }
                }
            }
            SectionRole::PlantCard => self.card(1, children),
            SectionRole::Cart => {
                self.line("Your Cart".bold().to_string());
                let mut number = 0;
                for child in children {
                    if matches!(child, UiNode::Section { role: SectionRole::CartRow, .. }) {
                        number += 1;
                        self.cart_row(number, child.children());
                    } else {
                        self.node(child);
                    }
                }
            }
            SectionRole::CartRow => self.cart_row(1, children),
            SectionRole::Row => {
                let text = children.iter().map(inline).collect::<Vec<_>>().join("  ");
                self.line(text);
            }
            SectionRole::Catalog
            | SectionRole::EmptyState
            | SectionRole::Loading
            | SectionRole::Detail => {
                for child in children {
                    self.node(child);
                }
            }
        }
    }

    fn category_bar(&mut self, children: &[UiNode]) {
        let mut number = 0;
        let mut parts = Vec::with_capacity(children.len());

        for child in children {
            match child {
                UiNode::Button {
                    label,
                    action: Some(_),
                    active,
                } => {
                    let text = format!("[{}] {}", number, label);
                    number += 1;
                    parts.push(if *active {
                        text.black().on_green().bold().to_string()
                    } else {
                        text.green().to_string()
                    });
                }
                UiNode::Button { label, action: None, .. } => {
                    parts.push(label.bright_black().to_string());
                }
                other => parts.push(inline(other)),
            }
        }

        if !parts.is_empty() {
            self.line(parts.join("  "));
        }
    }

    fn card(&mut self, number: usize, children: &[UiNode]) {
        let mut title = String::new();
        let mut price = String::new();
        let mut badge = String::new();
        let mut description = String::new();
        let mut image = String::new();

        for child in children {
            match child {
                UiNode::Link { label, .. } => title = label.bold().to_string(),
                UiNode::Price { .. } => price = inline(child),
                UiNode::Badge { .. } => badge = inline(child),
                UiNode::Text { .. } => description = inline(child),
                UiNode::Image { src, .. } => image = src.bright_black().to_string(),
                _ => {}
            }
        }

        self.line(format!("#{} {}  {}  {}", number, title, price, badge));
        if !description.is_empty() {
            self.line(format!("{}{}", INDENT, description));
        }
        if !image.is_empty() {
            self.line(format!("{}{}", INDENT, image));
        }
    }

    fn cart_row(&mut self, number: usize, children: &[UiNode]) {
        let text = children
            .iter()
            .filter(|child| !matches!(child, UiNode::Button { .. }))
            .map(inline)
            .collect::<Vec<_>>()
            .join("  ");
        self.line(format!("{}{}. {}", INDENT, number, text));
    }
}

/// Single-line rendering of a leaf node.
fn inline(node: &UiNode) -> String {
    match node {
        UiNode::Heading { text } => text.bold().underline().to_string(),
        UiNode::Text { text, tone } => match tone {
            Tone::Normal => text.clone(),
            Tone::Muted => text.bright_black().to_string(),
            Tone::Strong => text.bold().to_string(),
            Tone::Error => text.red().to_string(),
        },
        UiNode::Image { src, alt } => format!("[{}: {}]", alt, src),
        UiNode::Badge { text } => format!("[{}]", text).green().to_string(),
        UiNode::Price { label, .. } => label.bold().to_string(),
        UiNode::Link { label, .. } => label.underline().to_string(),
        UiNode::Button { label, action, .. } => match action {
            Some(UiAction::RemoveFromCart { .. }) => format!("({})", label).red().to_string(),
            Some(_) => format!("({})", label),
            None => format!("({})", label).bright_black().to_string(),
        },
        UiNode::Section { children, .. } => children.iter().map(inline).collect::<Vec<_>>().join(" "),
    }
}
