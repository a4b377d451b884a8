//! Interactive shop.
//!
//! Navigation (category switches, detail lookups) runs in spawned tasks that
//! report back through a channel to a printer task, so the prompt stays
//! usable while a fetch is pending. Updates are printed in the order they
//! arrive. The cart is owned by this loop and changed synchronously.

use anyhow::Result;
use arbor_application::{StoreUpdate, Storefront};
use arbor_core::cart::Cart;
use arbor_core::view::{
    CatalogView, SectionRole, UiAction, UiNode, render_cart, render_catalog, render_category_bar,
    render_detail, render_plant_area,
};
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use tokio::sync::mpsc;

use crate::helper::ShopHelper;
use crate::render::paint;

/// A parsed shop command. Card and cart numbers are 1-based, category
/// numbers 0-based with `0` for "All Trees", matching the printed labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopCommand {
    All,
    Category(usize),
    Detail(usize),
    Add(usize),
    Remove(usize),
    Cart,
    Show,
    Help,
    Quit,
}

impl ShopCommand {
    pub fn parse(input: &str) -> Result<Self, String> {
        let mut words = input.split_whitespace();
        let command = words.next().unwrap_or("").to_lowercase();
        let argument = words.next();

        if words.next().is_some() {
            return Err(format!("Too many arguments for '{}'", command));
        }

        let number = |name: &str| -> Result<usize, String> {
            let raw = argument.ok_or_else(|| format!("Usage: {} <number>", name))?;
            raw.parse::<usize>()
                .map_err(|_| format!("'{}' is not a number", raw))
        };
        let positive = |name: &str| -> Result<usize, String> {
            match number(name)? {
                0 => Err(format!("Numbers for '{}' start at 1", name)),
                n => Ok(n),
            }
        };

        match command.as_str() {
            "all" => Ok(Self::All),
            "category" | "cat" => number("category").map(Self::Category),
            "detail" => positive("detail").map(Self::Detail),
            "add" => positive("add").map(Self::Add),
            "remove" | "rm" => positive("remove").map(Self::Remove),
            "cart" => Ok(Self::Cart),
            "show" => Ok(Self::Show),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("Unknown command '{}'. Type 'help'.", other)),
        }
    }
}

/// Action of the category button labelled `[index]`.
fn category_action(view: &CatalogView, index: usize) -> Option<UiAction> {
    render_category_bar(&view.categories, &view.active)
        .actions()
        .get(index)
        .map(|action| (*action).clone())
}

/// First action of card `#number` matching `wanted`.
fn card_action(
    view: &CatalogView,
    number: usize,
    wanted: fn(&UiAction) -> bool,
) -> Option<UiAction> {
    let area = render_plant_area(&view.plants);
    let card = area
        .children()
        .iter()
        .filter(|child| {
            matches!(
                child,
                UiNode::Section {
                    role: SectionRole::PlantCard,
                    ..
                }
            )
        })
        .nth(number.checked_sub(1)?)?;
    card.actions().into_iter().find(|action| wanted(*action)).cloned()
}

/// Remove action of cart line `number`.
fn cart_action(cart: &Cart, number: usize) -> Option<UiAction> {
    render_cart(&cart.render_summary())
        .actions()
        .get(number.checked_sub(1)?)
        .map(|action| (*action).clone())
}

fn print_update(update: &StoreUpdate) {
    match update {
        StoreUpdate::Catalog(view) => print!("{}", paint(&render_catalog(view))),
        StoreUpdate::Detail(view) => {
            println!("{}", "── Plant Details ──".bright_magenta());
            print!("{}", paint(&render_detail(view)));
        }
        StoreUpdate::Cart(summary) => print!("{}", paint(&render_cart(summary))),
    }
    println!();
}

fn print_help() {
    let lines = [
        ("all", "show every plant"),
        ("category <n>", "show plants of category [n]"),
        ("detail <card>", "open the details of plant #card"),
        ("add <card>", "add plant #card to the cart"),
        ("remove <line>", "remove cart line <line>"),
        ("cart", "show the cart"),
        ("show", "show the current catalog again"),
        ("quit", "leave the shop"),
    ];
    for (command, description) in lines {
        println!("  {:<16}{}", command.bright_cyan(), description.bright_black());
    }
}

/// Runs a navigation action in the background.
fn spawn_navigation(store: &Storefront, tx: &mpsc::Sender<StoreUpdate>, action: UiAction) {
    let store = store.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        if let Some(update) = store.navigate(&action).await {
            let _ = tx.send(update).await;
        }
    });
    println!("{}", "Loading…".bright_black());
}

pub async fn run(store: Storefront) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<StoreUpdate>(32);

    let printer = tokio::spawn(async move {
        while let Some(update) = rx.recv().await {
            print_update(&update);
        }
    });

    println!("{}", "=== Arbor Plant Shop ===".bright_green().bold());
    println!("{}", "Type 'help' for commands or 'quit' to exit.".bright_black());
    println!();

    {
        let store = store.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let view = store.start().await;
            let _ = tx.send(StoreUpdate::Catalog(view)).await;
        });
    }

    let mut cart = Cart::new();
    let mut rl: Editor<ShopHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ShopHelper::new()));

    loop {
        match rl.readline("arbor> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                let command = match ShopCommand::parse(trimmed) {
                    Ok(command) => command,
                    Err(message) => {
                        println!("{}", message.yellow());
                        continue;
                    }
                };

                match command {
                    ShopCommand::Quit => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    ShopCommand::Help => print_help(),
                    ShopCommand::Cart => print_update(&StoreUpdate::Cart(cart.render_summary())),
                    ShopCommand::Show => {
                        let view = store.catalog().snapshot().await;
                        print_update(&StoreUpdate::Catalog(view));
                    }
                    ShopCommand::All => spawn_navigation(&store, &tx, UiAction::SelectAll),
                    ShopCommand::Category(index) => {
                        let view = store.catalog().snapshot().await;
                        match category_action(&view, index) {
                            Some(action) => spawn_navigation(&store, &tx, action),
                            None => println!("{}", format!("No category [{}]", index).yellow()),
                        }
                    }
                    ShopCommand::Detail(number) => {
                        let view = store.catalog().snapshot().await;
                        match card_action(&view, number, |a| {
                            matches!(a, UiAction::OpenDetail { .. })
                        }) {
                            Some(action) => spawn_navigation(&store, &tx, action),
                            None => println!("{}", format!("No plant #{}", number).yellow()),
                        }
                    }
                    ShopCommand::Add(number) => {
                        let view = store.catalog().snapshot().await;
                        let action = card_action(&view, number, |a| {
                            matches!(a, UiAction::AddToCart { .. })
                        });
                        match action.and_then(|a| Storefront::apply_to_cart(&a, &mut cart)) {
                            Some(summary) => print_update(&StoreUpdate::Cart(summary)),
                            None => println!("{}", format!("No plant #{}", number).yellow()),
                        }
                    }
                    ShopCommand::Remove(number) => {
                        let action = cart_action(&cart, number);
                        match action.and_then(|a| Storefront::apply_to_cart(&a, &mut cart)) {
                            Some(summary) => print_update(&StoreUpdate::Cart(summary)),
                            None => println!("{}", format!("No cart line {}", number).yellow()),
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    // Drop the sender so the printer drains and stops
    drop(tx);
    let _ = printer.await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_core::cart::LineItem;
    use arbor_core::catalog::{Category, ItemId, Plant};
    use arbor_core::view::{ActiveCategory, CategoryBar, PlantArea};

    fn view() -> CatalogView {
        let plant = |id: u64, name: &str, price: f64| Plant {
            id: Some(ItemId::from(id)),
            name: name.to_string(),
            image_url: String::new(),
            category: "Fruit Tree".to_string(),
            price,
            short_description: String::new(),
        };
        CatalogView {
            categories: CategoryBar::Loaded(vec![Category {
                id: Some(ItemId::from(1)),
                display_name: "Fruit".to_string(),
            }]),
            active: ActiveCategory::All,
            plants: PlantArea::Loaded(vec![plant(9, "Mango", 150.0), plant(10, "Neem", 90.0)]),
            loading: false,
        }
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ShopCommand::parse("all"), Ok(ShopCommand::All));
        assert_eq!(ShopCommand::parse("category 0"), Ok(ShopCommand::Category(0)));
        assert_eq!(ShopCommand::parse("ADD 2"), Ok(ShopCommand::Add(2)));
        assert_eq!(ShopCommand::parse("rm 1"), Ok(ShopCommand::Remove(1)));
        assert_eq!(ShopCommand::parse("exit"), Ok(ShopCommand::Quit));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(ShopCommand::parse("add").is_err());
        assert!(ShopCommand::parse("add x").is_err());
        assert!(ShopCommand::parse("add 0").is_err());
        assert!(ShopCommand::parse("add 1 2").is_err());
        assert!(ShopCommand::parse("water").is_err());
    }

    #[test]
    fn test_category_action_by_label() {
        let view = view();
        assert_eq!(category_action(&view, 0), Some(UiAction::SelectAll));
        assert_eq!(
            category_action(&view, 1),
            Some(UiAction::SelectCategory {
                id: ItemId::from(1)
            })
        );
        assert_eq!(category_action(&view, 2), None);
    }

    #[test]
    fn test_card_action_by_number() {
        let view = view();
        let add = card_action(&view, 2, |a| matches!(a, UiAction::AddToCart { .. }));
        assert_eq!(
            add,
            Some(UiAction::AddToCart {
                item: LineItem::new(Some(ItemId::from(10)), "Neem", 90.0)
            })
        );
        assert_eq!(
            card_action(&view, 3, |a| matches!(a, UiAction::AddToCart { .. })),
            None
        );
        assert_eq!(
            card_action(&view, 0, |a| matches!(a, UiAction::AddToCart { .. })),
            None
        );
    }

    #[test]
    fn test_cart_action_by_line() {
        let mut cart = Cart::new();
        cart.add(LineItem::new(None, "Mango", 150.0));

        assert_eq!(
            cart_action(&cart, 1),
            Some(UiAction::RemoveFromCart { position: 0 })
        );
        assert_eq!(cart_action(&cart, 2), None);
        assert_eq!(cart_action(&cart, 0), None);
    }
}
