//! Output formatting for the CLI.

use console::style;
use storefront_commerce::admin::OrderStatus;
use storefront_commerce::catalog::Product;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a step in a process.
    pub fn step(&self, num: usize, total: usize, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style(format!("[{}/{}]", num, total)).dim(), msg);
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Colored order status, matching the admin status pills.
pub fn status_badge(status: OrderStatus) -> String {
    let name = status.display_name();
    match status {
        OrderStatus::Delivered => style(name).green().to_string(),
        OrderStatus::Processing => style(name).yellow().to_string(),
        OrderStatus::Shipped => style(name).blue().to_string(),
        OrderStatus::Cancelled => style(name).red().to_string(),
        OrderStatus::Pending => style(name).dim().to_string(),
    }
}

/// Price with the compare-at price and discount badge when on sale.
pub fn format_price(product: &Product) -> String {
    let price = product.price.display();
    match (product.original_price, product.discount_percent()) {
        (Some(original), Some(percent)) => format!(
            "{} {} {}",
            style(price).bold(),
            style(format!("was {}", original.display())).dim(),
            style(format!("{}% OFF", percent)).red()
        ),
        _ => style(price).bold().to_string(),
    }
}

/// Product flags as short tags.
pub fn product_tags(product: &Product) -> String {
    let mut tags = Vec::new();
    if product.is_new {
        tags.push(style("NEW").green().to_string());
    }
    if product.is_sale {
        tags.push(style("SALE").red().to_string());
    }
    tags.join(" ")
}

/// Rating as `4.8★ (124)`.
pub fn format_rating(product: &Product) -> String {
    format!("{:.1}★ ({})", product.rating, product.reviews)
}
