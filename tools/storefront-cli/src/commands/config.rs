//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, StorefrontConfig, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
        ConfigCommand::Path => show_path(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.info("[catalog]");
    ctx.output.kv(
        "path",
        ctx.config.catalog.path.as_deref().unwrap_or("(built-in)"),
    );

    ctx.output.info("[display]");
    ctx.output.kv("currency", &ctx.config.display.currency);

    ctx.output.info("[browse]");
    ctx.output.kv("tab", &ctx.config.browse.tab);
    ctx.output.kv("sort", &ctx.config.browse.sort);

    ctx.output.info("[logging]");
    ctx.output.kv(
        "level",
        ctx.config.logging.level.as_deref().unwrap_or("warn"),
    );

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value.unwrap_or_else(|| "null".to_string()));
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(ref path) = ctx.config_path else {
        bail!("No config file found. Run `storefront config init` to create one.");
    };
    let path = path.to_string_lossy().to_string();

    let mut config = StorefrontConfig::load(&path)?;
    set_config_value(&mut config, key, value)?;
    config.save(&path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.resolve_path(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if let Err(e) = ctx.config.currency() {
        errors.push(format!("display.currency: {}", e));
    }

    if storefront_commerce::search::ShopTab::from_str(&ctx.config.browse.tab).is_none() {
        warnings.push(format!(
            "browse.tab '{}' is unknown, home will be used",
            ctx.config.browse.tab
        ));
    }

    if storefront_commerce::search::SortKey::from_str(&ctx.config.browse.sort).is_none() {
        warnings.push(format!(
            "browse.sort '{}' is unknown, featured will be used",
            ctx.config.browse.sort
        ));
    }

    if errors.is_empty() {
        match ctx.catalog() {
            Ok(catalog) => ctx
                .output
                .info(&format!("Catalog: {} products", catalog.len())),
            Err(e) => errors.push(format!("catalog: {:#}", e)),
        }
    }

    // Print results
    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    let path = ctx
        .config_path
        .as_ref()
        .map(|p| p.display().to_string());

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "path": path }));
        return Ok(());
    }

    match path {
        Some(path) => println!("{}", path),
        None => ctx
            .output
            .warn("No config file found, using defaults"),
    }

    Ok(())
}

fn get_config_value(config: &StorefrontConfig, key: &str) -> Result<Option<String>> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["catalog", "path"] => Ok(config.catalog.path.clone()),
        ["display", "currency"] => Ok(Some(config.display.currency.clone())),
        ["browse", "tab"] => Ok(Some(config.browse.tab.clone())),
        ["browse", "sort"] => Ok(Some(config.browse.sort.clone())),
        ["logging", "level"] => Ok(config.logging.level.clone()),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut StorefrontConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["catalog", "path"] => config.catalog.path = Some(value.to_string()),
        ["display", "currency"] => config.display.currency = value.to_uppercase(),
        ["browse", "tab"] => config.browse.tab = value.to_string(),
        ["browse", "sort"] => config.browse.sort = value.to_string(),
        ["logging", "level"] => config.logging.level = Some(value.to_string()),
        _ => bail!("Unknown config key: {}", key),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_roundtrip() {
        let mut config = StorefrontConfig::default();
        set_config_value(&mut config, "browse.sort", "rating").unwrap();
        set_config_value(&mut config, "display.currency", "eur").unwrap();
        assert_eq!(
            get_config_value(&config, "browse.sort").unwrap(),
            Some("rating".to_string())
        );
        assert_eq!(config.display.currency, "EUR");
        assert_eq!(get_config_value(&config, "catalog.path").unwrap(), None);
        assert!(get_config_value(&config, "deploy.canary").is_err());
        assert!(set_config_value(&mut config, "browse", "x").is_err());
    }
}
