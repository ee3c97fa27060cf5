//! Seller configuration.
//!
//! A [`SiteConfig`] is handed to whatever needs seller details (the order
//! formatter, the mail hand-off, the contact display). Every field has a
//! default so a config file only needs to override what differs.

use serde::{Deserialize, Serialize};

/// Seller identity and contact details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// Shop name, used as the order heading.
    pub name: String,
    /// One-line tagline.
    pub tagline: String,
    /// Person to contact.
    pub contact_name: String,
    /// Seller phone number.
    pub phone: String,
    /// Address orders are mailed to.
    pub email: String,
    /// Seller postal address.
    pub address: String,
    /// Social page URL.
    pub facebook: String,
    /// Account for bank transfers.
    pub bank: BankAccount,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Cam Quít Mường Khương - H'Mông Farm".to_string(),
            tagline: "Nông sản sạch từ Mường Khương, Lào Cai — cam & quít tươi ngon".to_string(),
            contact_name: "Giàng Seo Páo".to_string(),
            phone: "0989 123 456".to_string(),
            email: "lienhe@camquitmuongkhuong.vn".to_string(),
            address: "Bản Na Pan, Xã Mường Khương, H. Mường Khương, Lào Cai".to_string(),
            facebook: "https://www.facebook.com/camquitmuongkhuong".to_string(),
            bank: BankAccount::default(),
        }
    }
}

/// Bank account shown when the shopper pays by transfer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BankAccount {
    pub bank_name: String,
    pub account_name: String,
    pub account_number: String,
}

impl Default for BankAccount {
    fn default() -> Self {
        Self {
            bank_name: "Agribank - CN Mường Khương".to_string(),
            account_name: "Giàng Seo Páo".to_string(),
            account_number: "4500201234567".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let json = r#"{ "email": "orders@example.vn", "bank": { "account_number": "123" } }"#;
        let site: SiteConfig = serde_json::from_str(json).unwrap();

        assert_eq!(site.email, "orders@example.vn");
        assert_eq!(site.bank.account_number, "123");
        assert_eq!(site.bank.bank_name, BankAccount::default().bank_name);
        assert_eq!(site.name, SiteConfig::default().name);
    }
}
