//! CLI configuration.

use anyhow::{Context, Result};
use orchard_commerce::catalog::{Catalog, Product};
use orchard_commerce::checkout::{CustomerDefaults, PaymentMethod};
use orchard_commerce::{SiteConfig, Storefront};
use serde::{Deserialize, Serialize};

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["orchard.toml", ".orchard.toml", "orchard.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrchardConfig {
    /// Seller details.
    #[serde(default)]
    pub site: SiteConfig,

    /// Session defaults.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Catalog override. Empty means the built-in catalog.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<Product>,
}

impl OrchardConfig {
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

    /// The catalog for this config.
    pub fn catalog(&self) -> Result<Catalog> {
        if self.products.is_empty() {
            return Ok(Catalog::reference());
        }
        Catalog::new(self.products.clone()).context("Invalid [[products]] in config")
    }

    /// Start a shopping session from this config.
    pub fn storefront(&self) -> Result<Storefront> {
        Ok(Storefront::new(
            self.site.clone(),
            self.catalog()?,
            self.checkout.customer_defaults,
        )
        .with_payment(self.checkout.payment))
    }
}

/// Session defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// How the order form is pre-filled.
    #[serde(default)]
    pub customer_defaults: CustomerDefaults,

    /// Initially selected payment method.
    #[serde(default)]
    pub payment: PaymentMethod,
}

/// Generate a default orchard.toml config file.
pub fn generate_default_config() -> String {
    let site = SiteConfig::default();
    format!(
        r#"# Orchard storefront configuration

[site]
name = "{name}"
tagline = "{tagline}"
contact_name = "{contact_name}"
phone = "{phone}"
email = "{email}"
address = "{address}"
facebook = "{facebook}"

[site.bank]
bank_name = "{bank_name}"
account_name = "{account_name}"
account_number = "{account_number}"

[checkout]
# "seller-contact" pre-fills phone/address with the seller's own details,
# "blank" leaves the order form empty.
customer_defaults = "seller-contact"
# "bank" or "cod"
payment = "bank"

# Uncomment to replace the built-in catalog.
# [[products]]
# id = 1
# name = "Cam Mường Khương - Hộp 5kg"
# price = 450000
# short = "Cam vườn chín cây - vỏ mỏng, ngọt, mọng nước."
# image = "/src/assets/cam.jpg"
# stock = 120
"#,
        name = site.name,
        tagline = site.tagline,
        contact_name = site.contact_name,
        phone = site.phone,
        email = site.email,
        address = site.address,
        facebook = site.facebook,
        bank_name = site.bank.bank_name,
        account_name = site.bank.account_name,
        account_number = site.bank.account_number,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use orchard_commerce::{Money, ProductId};

    #[test]
    fn test_default_template_parses() {
        let config: OrchardConfig = toml::from_str(&generate_default_config()).unwrap();

        assert_eq!(config.site, SiteConfig::default());
        assert_eq!(config.checkout.customer_defaults, CustomerDefaults::SellerContact);
        assert_eq!(config.checkout.payment, PaymentMethod::Bank);
        assert!(config.products.is_empty());
    }

    #[test]
    fn test_empty_config_uses_reference_catalog() {
        let config: OrchardConfig = toml::from_str("").unwrap();
        assert_eq!(config.catalog().unwrap(), Catalog::reference());
    }

    #[test]
    fn test_products_override_catalog() {
        let config: OrchardConfig = toml::from_str(
            r#"
[checkout]
customer_defaults = "blank"
payment = "cod"

[[products]]
id = 10
name = "Mật ong bạc hà"
price = 350000
"#,
        )
        .unwrap();

        let store = config.storefront().unwrap();
        assert_eq!(store.catalog().len(), 1);
        assert_eq!(
            store.catalog().get(ProductId::new(10)).map(|p| p.price),
            Some(Money::vnd(350_000))
        );
        assert_eq!(store.payment(), PaymentMethod::Cod);
        assert!(store.customer().phone.is_empty());
    }

    #[test]
    fn test_duplicate_products_rejected() {
        let config: OrchardConfig = toml::from_str(
            r#"
[[products]]
id = 1
name = "A"
price = 1

[[products]]
id = 1
name = "B"
price = 2
"#,
        )
        .unwrap();

        assert!(config.catalog().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = OrchardConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: OrchardConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.site, config.site);
    }
}
