//! Payment method selection.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the shopper intends to pay. Nothing is charged here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Bank transfer to the seller's account.
    #[default]
    Bank,
    /// Cash on delivery.
    Cod,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Bank => "bank",
            PaymentMethod::Cod => "cod",
        }
    }

    /// Label used in the order text and the payment panel.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Bank => "Chuyển khoản",
            PaymentMethod::Cod => "COD",
        }
    }

    pub fn all() -> [PaymentMethod; 2] {
        [PaymentMethod::Bank, PaymentMethod::Cod]
    }
}

impl FromStr for PaymentMethod {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bank" => Ok(PaymentMethod::Bank),
            "cod" => Ok(PaymentMethod::Cod),
            other => Err(StoreError::UnknownPaymentMethod(other.to_string())),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(PaymentMethod::Bank.label(), "Chuyển khoản");
        assert_eq!(PaymentMethod::Cod.label(), "COD");
        assert_eq!(PaymentMethod::default(), PaymentMethod::Bank);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("bank".parse::<PaymentMethod>(), Ok(PaymentMethod::Bank));
        assert_eq!(" COD ".parse::<PaymentMethod>(), Ok(PaymentMethod::Cod));
        assert_eq!(
            "card".parse::<PaymentMethod>(),
            Err(StoreError::UnknownPaymentMethod("card".to_string()))
        );
    }
}
