//! Product listing.

use anyhow::{bail, Result};
use serde::Serialize;
use storefront_commerce::catalog::Product;
use storefront_commerce::search::{PriceRange, ShopTab, DEFAULT_PRICE_CEILING};
use storefront_commerce::storefront::Storefront;
use storefront_commerce::Money;

use super::BrowseArgs;
use crate::context::Context;
use crate::output::{format_price, format_rating, product_tags};

#[derive(Serialize)]
struct BrowseReport<'a> {
    title: &'a str,
    result_count: usize,
    products: Vec<&'a Product>,
}

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let currency = catalog.currency();
    let mut store = Storefront::new(catalog);

    let tab = match args.tab.as_deref() {
        Some(slug) => match ShopTab::from_str(slug) {
            Some(tab) => tab,
            None => bail!("Unknown tab: {}", slug),
        },
        None => ctx.config.default_tab(),
    };
    store.change_tab(tab);

    if let Some(ref category) = args.category {
        store.set_category(category);
    }
    if let Some(ref brand) = args.brand {
        store.set_brand(brand);
    }
    if args.min.is_some() || args.max.is_some() {
        let low = Money::from_decimal(args.min.unwrap_or(0.0), currency);
        let high = match args.max {
            Some(max) => Money::from_decimal(max, currency),
            None => Money::from_major(DEFAULT_PRICE_CEILING, currency),
        };
        store.set_price_range(PriceRange::new(low, high));
    }
    match args.sort.as_deref() {
        Some(slug) => store.set_sort_slug(slug),
        None => store.set_sort(ctx.config.default_sort()),
    }

    let products = store.visible_products();

    if ctx.output.is_json() {
        ctx.output.json(&BrowseReport {
            title: store.page_title(),
            result_count: products.len(),
            products,
        });
        return Ok(());
    }

    ctx.output.header(store.page_title());
    let selection = store.selection();
    ctx.output.kv("category", selection.category.label());
    ctx.output.kv("brand", selection.brand.label());
    ctx.output.kv(
        "price",
        &format!(
            "{} - {}",
            selection.price_range.low.display(),
            selection.price_range.high.display()
        ),
    );
    ctx.output.kv("sort", selection.sort.display_name());
    println!();

    if products.is_empty() {
        ctx.output.warn("No products found");
        if selection.has_active_filters() {
            ctx.output
                .info("Try adjusting your filters (omit --category, --brand, --min, --max)");
        }
        return Ok(());
    }

    let widths = [4, 30, 12, 22, 12];
    ctx.output
        .table_row(&["ID", "NAME", "CATEGORY", "BRAND", "RATING"], &widths);
    for product in &products {
        ctx.output.table_row(
            &[
                product.id.as_str(),
                product.name.as_str(),
                product.category.as_str(),
                product.brand.as_str(),
                format_rating(product).as_str(),
            ],
            &widths,
        );
        println!("        {} {}", format_price(product), product_tags(product));
    }

    println!();
    ctx.output.info(&format!(
        "{} product{}",
        products.len(),
        if products.len() == 1 { "" } else { "s" }
    ));

    Ok(())
}
