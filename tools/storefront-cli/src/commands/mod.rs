//! CLI command implementations.

pub mod admin;
pub mod browse;
pub mod cart;
pub mod config;
pub mod show;

use clap::{Args, Subcommand};

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Tab (home, new-arrivals, men, women, accessories, sale).
    #[arg(short, long)]
    pub tab: Option<String>,

    /// Category name, or "All".
    #[arg(long)]
    pub category: Option<String>,

    /// Brand name, or "All".
    #[arg(long)]
    pub brand: Option<String>,

    /// Lowest price.
    #[arg(long)]
    pub min: Option<f64>,

    /// Highest price.
    #[arg(long)]
    pub max: Option<f64>,

    /// Sort (featured, newest, price-low, price-high, rating).
    #[arg(short, long)]
    pub sort: Option<String>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Add one unit: `ID`, `ID:SIZE` or `ID:SIZE:COLOR`.
    #[arg(short, long = "add", value_name = "ITEM")]
    pub add: Vec<String>,

    /// Set a line's quantity: `LINE=QTY`, where LINE is `ID-SIZE-COLOR`.
    #[arg(long = "set", value_name = "LINE=QTY")]
    pub set: Vec<String>,

    /// Remove a line.
    #[arg(short, long = "remove", value_name = "LINE")]
    pub remove: Vec<String>,

    /// Press checkout at the end.
    #[arg(long)]
    pub checkout: bool,
}

/// Arguments for the admin command.
#[derive(Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// Show dashboard figures.
    Dashboard,
    /// List and update orders.
    Orders {
        /// Match order number, customer name or email.
        #[arg(short, long)]
        search: Option<String>,

        /// Status filter (all, pending, processing, shipped, delivered, cancelled).
        #[arg(long, default_value = "all")]
        status: String,

        /// Change a status first: `ORDER=STATUS`.
        #[arg(long = "set", value_name = "ORDER=STATUS")]
        set: Vec<String>,
    },
    /// Manage products.
    Products {
        /// Match name, category or brand.
        #[arg(short, long)]
        search: Option<String>,

        #[command(subcommand)]
        command: Option<ProductsCommand>,
    },
    /// Manage categories.
    Categories {
        /// Match name.
        #[arg(short, long)]
        search: Option<String>,

        #[command(subcommand)]
        command: Option<TaxonomyCommand>,
    },
    /// Manage brands.
    Brands {
        /// Match name.
        #[arg(short, long)]
        search: Option<String>,

        #[command(subcommand)]
        command: Option<TaxonomyCommand>,
    },
}

#[derive(Subcommand)]
pub enum ProductsCommand {
    /// Add a product.
    Add(ProductFields),
    /// Edit a product; unset fields keep their value.
    Edit {
        /// Product ID.
        id: String,

        #[command(flatten)]
        fields: ProductFields,
    },
    /// Delete a product.
    Delete {
        /// Product ID.
        id: String,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Product editor fields.
#[derive(Args)]
pub struct ProductFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub price: Option<f64>,
    /// Compare-at price; 0 clears it.
    #[arg(long)]
    pub original_price: Option<f64>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub brand: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Image URL (repeatable).
    #[arg(long = "image")]
    pub images: Vec<String>,
    /// Size (repeatable).
    #[arg(long = "size")]
    pub sizes: Vec<String>,
    /// Color (repeatable).
    #[arg(long = "color")]
    pub colors: Vec<String>,
    /// Mark as new arrival.
    #[arg(long)]
    pub new: bool,
    /// Mark as on sale.
    #[arg(long)]
    pub sale: bool,
}

#[derive(Subcommand)]
pub enum TaxonomyCommand {
    /// Add a record.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Logo URL (brands only).
        #[arg(long)]
        logo: Option<String>,
    },
    /// Delete a record.
    Delete {
        /// Record ID.
        id: String,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file and its catalog.
    Validate,
    /// Print the config file in use.
    Path,
}
