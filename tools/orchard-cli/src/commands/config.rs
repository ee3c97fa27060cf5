//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use orchard_commerce::catalog::Catalog;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, OrchardConfig};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { output, force } => init_config(&output, force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(built-in defaults)"),
    }

    let site = &ctx.config.site;
    ctx.output.info("");
    ctx.output.info("[site]");
    ctx.output.kv("name", &site.name);
    ctx.output.kv("tagline", &site.tagline);
    ctx.output.kv("contact_name", &site.contact_name);
    ctx.output.kv("phone", &site.phone);
    ctx.output.kv("email", &site.email);
    ctx.output.kv("address", &site.address);
    ctx.output.kv("facebook", &site.facebook);

    ctx.output.info("");
    ctx.output.info("[site.bank]");
    ctx.output.kv("bank_name", &site.bank.bank_name);
    ctx.output.kv("account_name", &site.bank.account_name);
    ctx.output.kv("account_number", &site.bank.account_number);

    ctx.output.info("");
    ctx.output.info("[checkout]");
    ctx.output
        .kv("customer_defaults", ctx.config.checkout.customer_defaults.as_str());
    ctx.output.kv("payment", ctx.config.checkout.payment.as_str());

    ctx.output.info("");
    if ctx.config.products.is_empty() {
        ctx.output.info("Catalog: built-in");
    } else {
        ctx.output.info("[[products]]");
        for product in &ctx.config.products {
            ctx.output.list_item(&format!(
                "{} {} ({})",
                product.id, product.name, product.price
            ));
        }
    }

    Ok(())
}

fn init_config(output: &str, force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.resolve_path(output);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if output.ends_with(".json") {
        OrchardConfig::default().save(&config_path.to_string_lossy())?;
    } else {
        fs::write(&config_path, generate_default_config())?;
    }

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    let site = &ctx.config.site;
    if site.email.is_empty() {
        errors.push("site.email is required for orders".to_string());
    } else if !site.email.contains('@') {
        errors.push(format!("site.email '{}' is not an email address", site.email));
    }
    if site.name.is_empty() {
        warnings.push("site.name is empty".to_string());
    }
    if site.bank.account_number.is_empty() {
        warnings.push("site.bank.account_number is empty; bank transfer has no target".to_string());
    }

    if !ctx.config.products.is_empty() {
        if let Err(e) = Catalog::new(ctx.config.products.clone()) {
            errors.push(format!("products: {}", e));
        }
    }
    for product in &ctx.config.products {
        if product.price.is_negative() {
            errors.push(format!("products[{}].price must not be negative", product.id));
        }
        if product.name.is_empty() {
            errors.push(format!("products[{}].name is required", product.id));
        }
        if product.price.is_zero() {
            warnings.push(format!("products[{}].price is zero", product.id));
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
