//! CLI configuration.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::search::{ShopTab, SortKey};
use storefront_commerce::Currency;

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Price display.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Defaults for `browse`.
    #[serde(default)]
    pub browse: BrowseConfig,

    /// Log filter.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Currency catalog prices are read in.
    pub fn currency(&self) -> Result<Currency> {
        match Currency::from_code(&self.display.currency) {
            Some(currency) => Ok(currency),
            None => bail!("Unknown currency: {}", self.display.currency),
        }
    }

    /// Default tab; unknown names fall back to home.
    pub fn default_tab(&self) -> ShopTab {
        ShopTab::from_str(&self.browse.tab).unwrap_or_else(|| {
            tracing::warn!(tab = %self.browse.tab, "unknown tab in config, using home");
            ShopTab::default()
        })
    }

    /// Default sort; unknown keys fall back to featured.
    pub fn default_sort(&self) -> SortKey {
        SortKey::from_str(&self.browse.sort).unwrap_or_else(|| {
            tracing::warn!(sort = %self.browse.sort, "unknown sort in config, using featured");
            SortKey::default()
        })
    }
}

/// Catalog source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file, relative to the config file. The built-in catalog
    /// is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Price display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// ISO currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

/// Defaults applied to `browse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Tab slug (home, new-arrivals, men, women, accessories, sale).
    #[serde(default = "default_tab")]
    pub tab: String,

    /// Sort slug (featured, newest, price-low, price-high, rating).
    #[serde(default = "default_sort")]
    pub sort: String,
}

fn default_tab() -> String {
    ShopTab::default().slug().to_string()
}

fn default_sort() -> String {
    SortKey::default().slug().to_string()
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            tab: default_tab(),
            sort: default_sort(),
        }
    }
}

/// Log filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `info` or `storefront_commerce=debug`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront configuration

[catalog]
# JSON array of products; the built-in catalog is used when unset
# path = "catalog.json"

[display]
currency = "USD"

[browse]
tab = "home"
sort = "featured"

[logging]
# level = "info"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: StorefrontConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.catalog.path, None);
        assert_eq!(config.currency().unwrap(), Currency::USD);
        assert_eq!(config.default_tab(), ShopTab::Home);
        assert_eq!(config.default_sort(), SortKey::Featured);
        assert_eq!(config.logging.level, None);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: StorefrontConfig = toml::from_str("[browse]\nsort = \"rating\"\n").unwrap();
        assert_eq!(config.browse.tab, "home");
        assert_eq!(config.default_sort(), SortKey::Rating);
        assert_eq!(config.display.currency, "USD");
    }

    #[test]
    fn test_bad_values() {
        let mut config = StorefrontConfig::default();
        config.browse.tab = "kids".to_string();
        config.display.currency = "XYZ".to_string();
        assert_eq!(config.default_tab(), ShopTab::Home);
        assert!(config.currency().is_err());
    }
}
