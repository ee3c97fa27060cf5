//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod order;
pub mod quick_order;
pub mod shop;

use std::str::FromStr;

use clap::{Args, Subcommand};
use orchard_commerce::checkout::{CustomerInfo, PaymentMethod};
use orchard_commerce::ProductId;
use thiserror::Error;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only show products whose name contains this text.
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Order form fields shared by the ordering commands.
#[derive(Args, Default)]
pub struct CustomerArgs {
    /// Customer name.
    #[arg(long)]
    pub name: Option<String>,

    /// Customer phone number.
    #[arg(long)]
    pub phone: Option<String>,

    /// Delivery address.
    #[arg(long)]
    pub address: Option<String>,

    /// Note for the seller.
    #[arg(long)]
    pub note: Option<String>,
}

impl CustomerArgs {
    /// Overwrite the fields that were given on the command line.
    pub fn apply(&self, customer: &mut CustomerInfo) {
        if let Some(ref name) = self.name {
            customer.name = name.clone();
        }
        if let Some(ref phone) = self.phone {
            customer.phone = phone.clone();
        }
        if let Some(ref address) = self.address {
            customer.address = address.clone();
        }
        if let Some(ref note) = self.note {
            customer.note = note.clone();
        }
    }
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Product to add, as ID or ID:QTY. Repeat to add more.
    #[arg(short, long = "add", value_name = "ID[:QTY]", required = true)]
    pub add: Vec<LineSpec>,

    #[command(flatten)]
    pub customer: CustomerArgs,

    /// Payment method (bank or cod).
    #[arg(short, long)]
    pub payment: Option<PaymentMethod>,

    /// Open the order in the system mail client.
    #[arg(long, conflicts_with = "print")]
    pub send: bool,

    /// Print the mailto: link instead of opening it.
    #[arg(long)]
    pub print: bool,
}

/// Arguments for the quick-order command.
#[derive(Args)]
pub struct QuickOrderArgs {
    #[command(flatten)]
    pub customer: CustomerArgs,

    /// Open the message in the system mail client.
    #[arg(long, conflicts_with = "print")]
    pub send: bool,

    /// Print the mailto: link instead of opening it.
    #[arg(long)]
    pub print: bool,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    #[command(flatten)]
    pub customer: CustomerArgs,

    /// Print mailto: links instead of opening the mail client.
    #[arg(long)]
    pub print: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Write a default config file.
    Init {
        /// Output path (.toml or .json).
        #[arg(short, long, default_value = "orchard.toml")]
        output: String,

        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Check the configuration for mistakes.
    Validate,
}

/// Errors parsing an `ID[:QTY]` argument.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LineSpecError {
    #[error("invalid product id '{0}'")]
    InvalidId(String),

    #[error("invalid quantity '{0}'")]
    InvalidQuantity(String),
}

/// A product id with an optional quantity, e.g. `2` or `2:3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpec {
    pub id: ProductId,
    pub qty: Option<i64>,
}

impl FromStr for LineSpec {
    type Err = LineSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, qty) = match s.split_once(':') {
            Some((id, qty)) => (id, Some(qty)),
            None => (s, None),
        };

        let id = id
            .parse::<ProductId>()
            .map_err(|_| LineSpecError::InvalidId(id.to_string()))?;
        let qty = qty
            .map(|q| {
                q.trim()
                    .parse::<i64>()
                    .map_err(|_| LineSpecError::InvalidQuantity(q.to_string()))
            })
            .transpose()?;

        Ok(Self { id, qty })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_spec_parsing() {
        assert_eq!(
            "2".parse::<LineSpec>(),
            Ok(LineSpec {
                id: ProductId::new(2),
                qty: None
            })
        );
        assert_eq!(
            "3:5".parse::<LineSpec>(),
            Ok(LineSpec {
                id: ProductId::new(3),
                qty: Some(5)
            })
        );
        assert_eq!(
            "1:-4".parse::<LineSpec>().map(|l| l.qty),
            Ok(Some(-4))
        );
    }

    #[test]
    fn test_line_spec_errors() {
        assert_eq!(
            "cam".parse::<LineSpec>(),
            Err(LineSpecError::InvalidId("cam".to_string()))
        );
        assert_eq!(
            "1:many".parse::<LineSpec>(),
            Err(LineSpecError::InvalidQuantity("many".to_string()))
        );
    }

    #[test]
    fn test_customer_args_apply() {
        let args = CustomerArgs {
            name: Some("Ly Seo Chu".to_string()),
            note: Some("".to_string()),
            ..CustomerArgs::default()
        };
        let mut customer = CustomerInfo::default().with_phone("0989 123 456").with_note("x");

        args.apply(&mut customer);

        assert_eq!(customer.name, "Ly Seo Chu");
        assert_eq!(customer.phone, "0989 123 456");
        assert_eq!(customer.note, "");
    }
}
