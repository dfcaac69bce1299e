//! Admin console commands.
//!
//! The console lives in memory; changes last for one invocation.

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;
use storefront_commerce::admin::{
    AdminConsole, AdminSection, BrandDraft, CategoryDraft, OrderQuery, OrderStatus, ProductDraft,
    StatusFilter,
};
use storefront_commerce::ids::{BrandId, CategoryId, OrderId, ProductId};

use super::{AdminArgs, AdminCommand, ProductFields, ProductsCommand, TaxonomyCommand};
use crate::context::Context;
use crate::output::status_badge;

/// Run the admin command.
pub fn run(args: AdminArgs, ctx: &Context) -> Result<()> {
    let mut console = AdminConsole::from_catalog(&ctx.catalog()?);

    match args.command {
        AdminCommand::Dashboard => {
            console.set_section(AdminSection::Dashboard);
            dashboard(&console, ctx)
        }
        AdminCommand::Orders {
            search,
            status,
            set,
        } => {
            console.set_section(AdminSection::Orders);
            orders(&mut console, search, &status, &set, ctx)
        }
        AdminCommand::Products { search, command } => {
            console.set_section(AdminSection::Products);
            products(&mut console, search, command, ctx)
        }
        AdminCommand::Categories { search, command } => {
            console.set_section(AdminSection::Categories);
            categories(&mut console, search, command, ctx)
        }
        AdminCommand::Brands { search, command } => {
            console.set_section(AdminSection::Brands);
            brands(&mut console, search, command, ctx)
        }
    }
}

fn dashboard(console: &AdminConsole, ctx: &Context) -> Result<()> {
    let stats = console.dashboard();

    if ctx.output.is_json() {
        ctx.output.json(&stats);
        return Ok(());
    }

    ctx.output.header(console.section().display_name());
    ctx.output.kv("products", &stats.product_count.to_string());
    ctx.output.kv("orders", &stats.order_count.to_string());
    ctx.output.kv("revenue", &stats.revenue.display());
    for (status, count) in &stats.orders_by_status {
        ctx.output
            .kv(&format!("  {}", status.as_str()), &count.to_string());
    }

    ctx.output.header("Recent Orders");
    let widths = [8, 16, 10, 12, 10];
    for order in &stats.recent_orders {
        ctx.output.table_row(
            &[
                order.id.as_str(),
                order.customer_name.as_str(),
                order.total.display().as_str(),
                status_badge(order.status).as_str(),
                order.order_date.to_string().as_str(),
            ],
            &widths,
        );
    }

    Ok(())
}

fn orders(
    console: &mut AdminConsole,
    search: Option<String>,
    status: &str,
    set: &[String],
    ctx: &Context,
) -> Result<()> {
    for change in set {
        let (id, status) = change
            .rsplit_once('=')
            .with_context(|| format!("Expected ORDER=STATUS, got '{}'", change))?;
        let Some(status) = OrderStatus::from_str(status) else {
            bail!("Unknown order status: {}", status);
        };
        console.update_order_status(&OrderId::new(id), status)?;
        ctx.output
            .success(&format!("Order {} is now {}", id, status.display_name()));
    }

    let Some(status) = StatusFilter::from_str(status) else {
        bail!("Unknown status filter: {}", status);
    };
    let query = OrderQuery {
        term: search.unwrap_or_default(),
        status,
    };
    let found = console.filter_orders(&query);

    if ctx.output.is_json() {
        ctx.output.json(&found);
        return Ok(());
    }

    ctx.output.header(console.section().display_name());
    if found.is_empty() {
        ctx.output.warn("No orders found");
        return Ok(());
    }

    let widths = [8, 16, 28, 6, 10, 12, 10];
    ctx.output.table_row(
        &["ORDER", "CUSTOMER", "EMAIL", "ITEMS", "TOTAL", "STATUS", "DATE"],
        &widths,
    );
    for order in found {
        ctx.output.table_row(
            &[
                order.id.as_str(),
                order.customer_name.as_str(),
                order.customer_email.as_str(),
                order.item_count().to_string().as_str(),
                order.total.display().as_str(),
                status_badge(order.status).as_str(),
                order.order_date.to_string().as_str(),
            ],
            &widths,
        );
    }

    Ok(())
}

fn products(
    console: &mut AdminConsole,
    search: Option<String>,
    command: Option<ProductsCommand>,
    ctx: &Context,
) -> Result<()> {
    match command {
        Some(ProductsCommand::Add(fields)) => {
            let draft = apply_fields(ProductDraft::new(), fields);
            let id = console.add_product(draft)?;
            ctx.output.success(&format!("Added product {}", id));
        }
        Some(ProductsCommand::Edit { id, fields }) => {
            let id = ProductId::new(id);
            let draft = apply_fields(console.edit_draft(&id)?, fields);
            console.update_product(&id, draft)?;
            ctx.output.success(&format!("Updated product {}", id));
        }
        Some(ProductsCommand::Delete { id, yes }) => {
            let id = ProductId::new(id);
            let Some(product) = console.product(&id) else {
                bail!("Product not found: {}", id);
            };
            if !confirm(&format!("Delete product '{}'?", product.name), yes, ctx)? {
                return Ok(());
            }
            let removed = console.delete_product(&id)?;
            ctx.output.success(&format!("Deleted product '{}'", removed.name));
        }
        None => {}
    }

    let found = console.search_products(search.as_deref().unwrap_or_default());

    if ctx.output.is_json() {
        ctx.output.json(&found);
        return Ok(());
    }

    ctx.output.header(console.section().display_name());
    let widths = [14, 30, 12, 22, 10];
    ctx.output
        .table_row(&["ID", "NAME", "CATEGORY", "BRAND", "PRICE"], &widths);
    for product in found {
        ctx.output.table_row(
            &[
                product.id.as_str(),
                product.name.as_str(),
                product.category.as_str(),
                product.brand.as_str(),
                product.price.display().as_str(),
            ],
            &widths,
        );
    }

    Ok(())
}

fn categories(
    console: &mut AdminConsole,
    search: Option<String>,
    command: Option<TaxonomyCommand>,
    ctx: &Context,
) -> Result<()> {
    match command {
        Some(TaxonomyCommand::Add {
            name, description, ..
        }) => {
            let id = console.add_category(CategoryDraft::new(name, description))?;
            ctx.output.success(&format!("Added category {}", id));
        }
        Some(TaxonomyCommand::Delete { id, yes }) => {
            let id = CategoryId::new(id);
            let Some(category) = console.categories().iter().find(|c| c.id == id) else {
                bail!("Category not found: {}", id);
            };
            if !confirm(&format!("Delete category '{}'?", category.name), yes, ctx)? {
                return Ok(());
            }
            let removed = console.delete_category(&id)?;
            ctx.output
                .success(&format!("Deleted category '{}'", removed.name));
        }
        None => {}
    }

    let found = console.search_categories(search.as_deref().unwrap_or_default());

    if ctx.output.is_json() {
        ctx.output.json(&found);
        return Ok(());
    }

    ctx.output.header(console.section().display_name());
    let widths = [14, 16, 10, 30];
    for category in found {
        ctx.output.table_row(
            &[
                category.id.as_str(),
                category.name.as_str(),
                format!("{} products", category.product_count).as_str(),
                category.description.as_str(),
            ],
            &widths,
        );
    }

    Ok(())
}

fn brands(
    console: &mut AdminConsole,
    search: Option<String>,
    command: Option<TaxonomyCommand>,
    ctx: &Context,
) -> Result<()> {
    match command {
        Some(TaxonomyCommand::Add {
            name,
            description,
            logo,
        }) => {
            let mut draft = BrandDraft::new(name, description);
            if let Some(logo) = logo {
                draft = draft.with_logo(logo);
            }
            let id = console.add_brand(draft)?;
            ctx.output.success(&format!("Added brand {}", id));
        }
        Some(TaxonomyCommand::Delete { id, yes }) => {
            let id = BrandId::new(id);
            let Some(brand) = console.brands().iter().find(|b| b.id == id) else {
                bail!("Brand not found: {}", id);
            };
            if !confirm(&format!("Delete brand '{}'?", brand.name), yes, ctx)? {
                return Ok(());
            }
            let removed = console.delete_brand(&id)?;
            ctx.output.success(&format!("Deleted brand '{}'", removed.name));
        }
        None => {}
    }

    let found = console.search_brands(search.as_deref().unwrap_or_default());

    if ctx.output.is_json() {
        ctx.output.json(&found);
        return Ok(());
    }

    ctx.output.header(console.section().display_name());
    let widths = [14, 22, 10, 30];
    for brand in found {
        ctx.output.table_row(
            &[
                brand.id.as_str(),
                brand.name.as_str(),
                format!("{} products", brand.product_count).as_str(),
                brand.logo.as_deref().unwrap_or("-"),
            ],
            &widths,
        );
    }

    Ok(())
}

/// Ask before deleting unless `--yes` was given.
fn confirm(prompt: &str, yes: bool, ctx: &Context) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;

    if !confirmed {
        ctx.output.warn("Cancelled");
    }
    Ok(confirmed)
}

/// Overlay the given flags on a draft.
fn apply_fields(mut draft: ProductDraft, fields: ProductFields) -> ProductDraft {
    if let Some(name) = fields.name {
        draft.name = name;
    }
    if let Some(price) = fields.price {
        draft.price = price;
    }
    if let Some(original) = fields.original_price {
        draft.original_price = original;
    }
    if let Some(category) = fields.category {
        draft.category = category;
    }
    if let Some(brand) = fields.brand {
        draft.brand = brand;
    }
    if let Some(description) = fields.description {
        draft.description = description;
    }
    if !fields.images.is_empty() {
        draft.images = fields.images;
    }
    if !fields.sizes.is_empty() {
        draft.sizes = fields.sizes;
    }
    if !fields.colors.is_empty() {
        draft.colors = fields.colors;
    }
    draft.is_new |= fields.new;
    draft.is_sale |= fields.sale;
    draft
}
