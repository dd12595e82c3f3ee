//! # Customer State
//!
//! The customer's balance and owned-items list.
//!
//! ## Ownership Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Owned Item Lifecycle                                │
//! │                                                                         │
//! │  Store::buy_item ──────► OwnedItem created (snapshot, 0 minutes)       │
//! │                               │                                         │
//! │  Customer::use_item ────► minutes_used += n  (monotonic, unbounded)    │
//! │                               │                                         │
//! │  Store::issue_refund ───► removed from the list (if under the window)  │
//! │                                                                         │
//! │  The snapshot freezes id/title/price at purchase time: a later catalog │
//! │  price change never alters what a refund pays back.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;
use crate::error::{StoreError, StoreResult};
use crate::money::Money;

// =============================================================================
// Owned Item
// =============================================================================

/// A purchased copy of a catalog item.
///
/// Uses the snapshot pattern: `item_id`, `title`, and `price_cents` are
/// frozen at purchase time so refunds always pay back exactly what was paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedItem {
    /// Catalog id at time of purchase (frozen).
    pub item_id: String,

    /// Title at time of purchase (frozen).
    pub title: String,

    /// Price paid, in cents (frozen).
    pub price_cents: i64,

    /// Cumulative minutes of use. Starts at 0, never decreases.
    pub minutes_used: i64,

    /// When the purchase happened.
    pub purchased_at: DateTime<Utc>,
}

impl OwnedItem {
    /// Creates an owned copy from a catalog entry, with zero usage.
    pub fn from_catalog(item: &CatalogItem) -> Self {
        OwnedItem {
            item_id: item.id.clone(),
            title: item.title.clone(),
            price_cents: item.price_cents,
            minutes_used: 0,
            purchased_at: Utc::now(),
        }
    }

    /// Returns the recorded purchase price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Human-readable description including accumulated usage.
    pub fn info(&self) -> String {
        format!(
            "{}, {}\n  Minutes Used: {}",
            self.title,
            self.price(),
            self.minutes_used
        )
    }
}

// =============================================================================
// Usage Report
// =============================================================================

/// Structured result of a `use_item` call, for the caller to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageReport {
    pub item_id: String,
    pub title: String,
    /// Minutes added by this call.
    pub minutes_added: i64,
    /// Cumulative minutes after this call.
    pub minutes_total: i64,
}

// =============================================================================
// Customer
// =============================================================================

/// A customer with a cash balance and an ordered list of owned items.
///
/// ## Invariants
/// - Items are unique by `item_id` (enforced by the purchase guard in
///   `Store::buy_item`, not by a structural constraint here)
/// - Insertion order is preserved; lookups take the first match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    balance_cents: i64,
    items: Vec<OwnedItem>,
}

impl Customer {
    /// Creates a customer with the given starting balance and no items.
    pub fn new(balance_cents: i64) -> Self {
        Customer {
            balance_cents,
            items: Vec::new(),
        }
    }

    /// Current balance in cents.
    #[inline]
    pub fn balance_cents(&self) -> i64 {
        self.balance_cents
    }

    /// Current balance as Money.
    #[inline]
    pub fn balance(&self) -> Money {
        Money::from_cents(self.balance_cents)
    }

    /// The owned items, in purchase order.
    #[inline]
    pub fn items(&self) -> &[OwnedItem] {
        &self.items
    }

    /// Whether the customer owns an item with this id.
    pub fn owns(&self, item_id: &str) -> bool {
        self.items.iter().any(|i| i.item_id == item_id)
    }

    /// The owned item with this id, if any (first match).
    pub fn owned_item(&self, item_id: &str) -> Option<&OwnedItem> {
        self.items.iter().find(|i| i.item_id == item_id)
    }

    /// Adds `amount_cents` to the balance and returns the new balance.
    ///
    /// Unconditional: the core does not reject negative amounts (the
    /// application boundary validates before calling, see
    /// [`validation`](crate::validation)).
    pub fn reload_account(&mut self, amount_cents: i64) -> i64 {
        self.balance_cents += amount_cents;
        self.balance_cents
    }

    /// Records usage minutes against an owned item.
    ///
    /// Minutes accumulate additively across calls (10 then 25 yields 35).
    /// Fails with [`StoreError::NotOwned`] if the id is not in the list.
    /// No upper bound is applied here.
    pub fn use_item(&mut self, item_id: &str, minutes: i64) -> StoreResult<UsageReport> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.item_id == item_id)
            .ok_or_else(|| StoreError::NotOwned(item_id.to_string()))?;

        item.minutes_used += minutes;

        Ok(UsageReport {
            item_id: item.item_id.clone(),
            title: item.title.clone(),
            minutes_added: minutes,
            minutes_total: item.minutes_used,
        })
    }

    // -------------------------------------------------------------------------
    // Crate-internal mutation entry points for Store transactions
    // -------------------------------------------------------------------------

    /// Deducts the price and appends a fresh owned copy. Caller (the store)
    /// has already run the not-found / already-owned / funds guards.
    pub(crate) fn record_purchase(&mut self, item: &CatalogItem) {
        self.balance_cents -= item.price_cents;
        self.items.push(OwnedItem::from_catalog(item));
    }

    /// Removes the owned item at `index` and credits its recorded price back.
    pub(crate) fn record_refund(&mut self, index: usize) -> OwnedItem {
        let item = self.items.remove(index);
        self.balance_cents += item.price_cents;
        item
    }

    /// Position of an owned item by id, for refund removal.
    pub(crate) fn position_of(&self, item_id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.item_id == item_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(id: &str, price_cents: i64) -> OwnedItem {
        OwnedItem {
            item_id: id.to_string(),
            title: format!("Item {}", id),
            price_cents,
            minutes_used: 0,
            purchased_at: Utc::now(),
        }
    }

    #[test]
    fn test_reload_account_adds_and_returns_new_balance() {
        let mut customer = Customer::new(1000);
        assert_eq!(customer.reload_account(2500), 3500);
        assert_eq!(customer.balance().cents(), 3500);
    }

    #[test]
    fn test_reload_account_is_permissive_about_negative_amounts() {
        // Boundary validation rejects these before core is called; the core
        // itself applies whatever it is handed
        let mut customer = Customer::new(1000);
        assert_eq!(customer.reload_account(-400), 600);
    }

    #[test]
    fn test_use_item_accumulates_minutes() {
        let mut customer = Customer::new(0);
        customer.items.push(owned("game1", 5000));

        let report = customer.use_item("game1", 10).unwrap();
        assert_eq!(report.minutes_total, 10);

        let report = customer.use_item("game1", 25).unwrap();
        assert_eq!(report.minutes_added, 25);
        assert_eq!(report.minutes_total, 35);
        assert_eq!(customer.owned_item("game1").unwrap().minutes_used, 35);
    }

    #[test]
    fn test_use_item_not_owned() {
        let mut customer = Customer::new(0);
        let err = customer.use_item("ghost", 10).unwrap_err();
        assert!(matches!(err, StoreError::NotOwned(id) if id == "ghost"));
    }

    #[test]
    fn test_use_item_first_match_by_insertion_order() {
        let mut customer = Customer::new(0);
        customer.items.push(owned("a", 100));
        customer.items.push(owned("b", 200));

        customer.use_item("b", 5).unwrap();
        assert_eq!(customer.items()[0].minutes_used, 0);
        assert_eq!(customer.items()[1].minutes_used, 5);
    }

    #[test]
    fn test_owned_item_info_includes_usage() {
        let mut item = owned("game1", 5000);
        item.title = "GTA SA".to_string();
        item.minutes_used = 42;
        let info = item.info();
        assert!(info.contains("GTA SA, $50.00"));
        assert!(info.contains("Minutes Used: 42"));
    }

    #[test]
    fn test_record_purchase_and_refund_round_trip() {
        let mut customer = Customer::new(8000);
        let catalog_item =
            crate::catalog::CatalogItem::game("game1", "Game One", 5000, "Acme", true);

        customer.record_purchase(&catalog_item);
        assert_eq!(customer.balance_cents(), 3000);
        assert!(customer.owns("game1"));

        let index = customer.position_of("game1").unwrap();
        let removed = customer.record_refund(index);
        assert_eq!(removed.price_cents, 5000);
        assert_eq!(customer.balance_cents(), 8000);
        assert!(!customer.owns("game1"));
    }
}
