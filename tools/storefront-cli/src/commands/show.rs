//! Quick view of a single product.

use anyhow::Result;
use storefront_commerce::ids::ProductId;
use storefront_commerce::storefront::Storefront;

use super::ShowArgs;
use crate::context::Context;
use crate::output::{format_price, format_rating, product_tags};

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let mut store = Storefront::new(ctx.catalog()?);
    let product = store.quick_view(&ProductId::new(args.id))?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv("price", &format_price(product));
    ctx.output.kv("category", &product.category);
    ctx.output.kv("brand", &product.brand);
    ctx.output.kv("rating", &format_rating(product));
    let tags = product_tags(product);
    if !tags.is_empty() {
        ctx.output.kv("tags", &tags);
    }
    ctx.output.kv("sizes", &product.sizes.join(", "));
    ctx.output.kv("colors", &product.colors.join(", "));

    if !product.description.is_empty() {
        println!();
        println!("  {}", product.description);
    }

    ctx.output.header("Images");
    for image in &product.images {
        ctx.output.list_item(image);
    }

    Ok(())
}
