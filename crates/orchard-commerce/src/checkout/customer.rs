//! Customer form state.

use crate::site::SiteConfig;
use serde::{Deserialize, Serialize};

/// What the order form says about the shopper.
///
/// Nothing is validated; empty fields go into the order text as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CustomerInfo {
    /// Full name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Delivery address.
    pub address: String,
    /// Free-form note.
    pub note: String,
}

/// How the form is pre-filled when a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CustomerDefaults {
    /// Phone and address start as the seller's own phone and address.
    /// Matches the live site. Likely a leftover placeholder.
    #[default]
    SellerContact,
    /// Every field starts empty.
    Blank,
}

impl CustomerDefaults {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerDefaults::SellerContact => "seller-contact",
            CustomerDefaults::Blank => "blank",
        }
    }
}

impl CustomerInfo {
    /// Create the form state for a new session.
    pub fn seeded(site: &SiteConfig, defaults: CustomerDefaults) -> Self {
        match defaults {
            CustomerDefaults::SellerContact => Self {
                phone: site.phone.clone(),
                address: site.address.clone(),
                ..Self::default()
            },
            CustomerDefaults::Blank => Self::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seller_contact_seeding() {
        let site = SiteConfig::default();
        let customer = CustomerInfo::seeded(&site, CustomerDefaults::SellerContact);

        assert_eq!(customer.name, "");
        assert_eq!(customer.phone, "0989 123 456");
        assert_eq!(customer.address, site.address);
        assert_eq!(customer.note, "");
    }

    #[test]
    fn test_blank_seeding() {
        let customer = CustomerInfo::seeded(&SiteConfig::default(), CustomerDefaults::Blank);
        assert_eq!(customer, CustomerInfo::default());
    }

    #[test]
    fn test_default_policy_is_seller_contact() {
        assert_eq!(CustomerDefaults::default(), CustomerDefaults::SellerContact);
        let policy: CustomerDefaults = serde_json::from_str(r#""blank""#).unwrap();
        assert_eq!(policy, CustomerDefaults::Blank);
        assert_eq!(CustomerDefaults::SellerContact.as_str(), "seller-contact");
    }
}
