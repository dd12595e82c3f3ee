//! # Receipts
//!
//! Formatted confirmations of purchase and refund transactions.
//!
//! The store *returns* receipts as values; the console (or a test) decides
//! where the text goes. Receipts follow the dual-key identity pattern: a
//! generated UUID plus the business title/amount they confirm.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::money::Money;

/// Whether a receipt confirms a purchase or a refund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptKind {
    Purchase,
    Refund,
}

/// A transaction confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Generated receipt id (UUID v4).
    pub id: String,

    /// Purchase or refund.
    pub kind: ReceiptKind,

    /// Title of the item the transaction was for.
    pub title: String,

    /// Transaction amount in cents.
    pub amount_cents: i64,

    /// When the receipt was issued.
    pub issued_at: DateTime<Utc>,
}

impl Receipt {
    fn new(kind: ReceiptKind, title: impl Into<String>, amount_cents: i64) -> Self {
        Receipt {
            id: Uuid::new_v4().to_string(),
            kind,
            title: title.into(),
            amount_cents,
            issued_at: Utc::now(),
        }
    }

    /// Receipt for a completed purchase.
    pub fn purchase(title: impl Into<String>, amount_cents: i64) -> Self {
        Receipt::new(ReceiptKind::Purchase, title, amount_cents)
    }

    /// Receipt for a completed refund.
    pub fn refund(title: impl Into<String>, amount_cents: i64) -> Self {
        Receipt::new(ReceiptKind::Refund, title, amount_cents)
    }

    /// Transaction amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

/// Renders the full receipt block the console prints.
impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-------------------------")?;
        writeln!(f, "YOUR RECEIPT")?;
        writeln!(f, "-------------------------")?;
        match self.kind {
            ReceiptKind::Purchase => {
                writeln!(f, "Thank you for purchasing {}", self.title)?;
                write!(f, "Purchase amount: {}", self.amount())
            }
            ReceiptKind::Refund => {
                writeln!(f, "We are refunding the purchase of {}", self.title)?;
                write!(f, "Refund amount: {}", self.amount())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_receipt_display() {
        let receipt = Receipt::purchase("GTA SA", 5000);
        let text = receipt.to_string();
        assert!(text.contains("YOUR RECEIPT"));
        assert!(text.contains("Thank you for purchasing GTA SA"));
        assert!(text.contains("Purchase amount: $50.00"));
        assert!(!text.contains("Refund"));
    }

    #[test]
    fn test_refund_receipt_display() {
        let receipt = Receipt::refund("8 Mile", 1500);
        let text = receipt.to_string();
        assert!(text.contains("We are refunding the purchase of 8 Mile"));
        assert!(text.contains("Refund amount: $15.00"));
    }

    #[test]
    fn test_receipts_get_distinct_ids() {
        let a = Receipt::purchase("A", 100);
        let b = Receipt::purchase("A", 100);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serde_round_trip() {
        let receipt = Receipt::refund("8 Mile", 1500);
        let json = serde_json::to_string(&receipt).unwrap();
        let back: Receipt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, receipt);
        assert!(json.contains("\"kind\":\"refund\""));
    }
}
