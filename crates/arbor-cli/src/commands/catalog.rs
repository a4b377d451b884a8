//! One-shot catalog commands.
//!
//! Each command drives the same controllers and renderers as the shop and
//! prints the resulting tree. A view that ended in an inline error or a
//! fallback still gets printed, then the command exits with an error.

use anyhow::{Result, bail};
use arbor_application::Storefront;
use arbor_core::catalog::{ItemId, PlantSummary};
use arbor_core::view::{
    CategoryBar, DetailSource, PlantArea, UiNode, render_category_bar, render_detail,
    render_plant_area,
};

use crate::render::paint;

fn print_tree(tree: &UiNode, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(tree)?);
    } else {
        print!("{}", paint(tree));
    }
    Ok(())
}

pub async fn categories(store: &Storefront, json: bool) -> Result<()> {
    store.catalog().refresh_categories().await;
    let view = store.catalog().snapshot().await;

    print_tree(&render_category_bar(&view.categories, &view.active), json)?;

    if let CategoryBar::Failed(message) = &view.categories {
        bail!("{}", message);
    }
    Ok(())
}

pub async fn plants(store: &Storefront, category: Option<&ItemId>, json: bool) -> Result<()> {
    match category {
        Some(id) => store.catalog().select_category(id).await,
        None => store.catalog().select_all_categories().await,
    }
    let view = store.catalog().snapshot().await;

    print_tree(&render_plant_area(&view.plants), json)?;

    if let PlantArea::Failed(message) = &view.plants {
        bail!("{}", message);
    }
    Ok(())
}

pub async fn detail(store: &Storefront, id: &ItemId, json: bool) -> Result<()> {
    // Nothing is known about the plant up front, so the fallback is bare.
    let fallback = PlantSummary {
        id: Some(id.clone()),
        ..PlantSummary::default()
    };
    let view = store.detail().open_detail(Some(id), &fallback).await;

    print_tree(&render_detail(&view), json)?;

    if view.source == DetailSource::Fallback {
        bail!("Could not load details for plant {}", id);
    }
    Ok(())
}
