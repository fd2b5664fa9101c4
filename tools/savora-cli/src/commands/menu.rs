//! Browse the menu.

use anyhow::Result;
use savora_commerce::catalog::{ProductFilter, SortKey};

use super::{MenuArgs, SortOrder};
use crate::context::Context;

/// Run the menu command.
pub async fn run(args: MenuArgs, ctx: &mut Context) -> Result<()> {
    if let Some(query) = &args.query {
        ctx.store.set_search_query(query.clone())?;
    }

    let mut filter = ProductFilter::default();
    filter.category = args.category.clone();
    filter.in_stock = args.in_stock.then_some(true);
    filter.sort_by = args.sort.map(|s| match s {
        SortOrder::PriceAsc => SortKey::PriceAsc,
        SortOrder::PriceDesc => SortKey::PriceDesc,
        SortOrder::Rating => SortKey::Rating,
        SortOrder::Newest => SortKey::Newest,
    });
    ctx.store.set_filters(filter.clone())?;

    let query = ctx.store.state().search_query.clone();
    let menu: Vec<_> = filter
        .apply(&savora_backend::data::menu())
        .into_iter()
        .filter(|p| query.is_empty() || p.matches_query(&query))
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&menu);
        return Ok(());
    }

    ctx.output.header("Menu");
    if menu.is_empty() {
        ctx.output.info("No items match.");
        return Ok(());
    }

    for product in &menu {
        let mut line = format!("{}  {}  {}", product.id, product.name, product.effective_price());
        if product.discount.is_some() {
            line.push_str(&format!(" (was {})", product.price));
        }
        if product.is_new {
            line.push_str("  NEW");
        }
        if !product.is_in_stock() {
            line.push_str("  (out of stock)");
        }
        ctx.output.list_item(&line);

        if args.detailed {
            ctx.output.kv("Category", &product.category);
            ctx.output.kv("Rating", &format!("{:.1}", product.rating));
            if !product.description.is_empty() {
                ctx.output.kv("About", &product.description);
            }
            if let Some(minutes) = product.preparation_time {
                ctx.output.kv("Prep time", &format!("{} min", minutes));
            }
        }
    }

    Ok(())
}
