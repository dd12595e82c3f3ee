//! # Store — Transactional Core
//!
//! The catalog plus the operations that move money and items between the
//! store and a customer.
//!
//! ## Transaction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      buy_item / issue_refund                            │
//! │                                                                         │
//! │  buy_item(customer, id)                                                 │
//! │       │                                                                 │
//! │       ├── id in catalog? ──────────── no ──► Err(ItemNotFound)          │
//! │       ├── already owned? ──────────── yes ─► Err(AlreadyOwned)          │
//! │       ├── balance >= price? ───────── no ──► Err(InsufficientFunds)     │
//! │       │                                                                 │
//! │       └── deduct price, append OwnedItem(0 min), Ok(purchase receipt)  │
//! │                                                                         │
//! │  issue_refund(customer, id)                                             │
//! │       │                                                                 │
//! │       ├── owned? ──────────────────── no ──► Err(NotOwned)              │
//! │       ├── minutes_used < 30? ──────── no ──► Err(UsageLimitExceeded)    │
//! │       │                                                                 │
//! │       └── credit recorded price, remove item, Ok(refund receipt)       │
//! │                                                                         │
//! │  Guard ordering is part of the contract: each check short-circuits,    │
//! │  and no state mutates until every guard has passed.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;
use crate::customer::Customer;
use crate::error::{StoreError, StoreResult};
use crate::receipt::Receipt;
use crate::REFUND_WINDOW_MINUTES;

/// The store: a catalog fixed at construction plus transactional operations.
///
/// The store holds no customer state. Callers own the [`Customer`] and pass
/// it in, so the same store can serve a console loop, a test, or a future
/// API front-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    items: Vec<CatalogItem>,
}

impl Store {
    /// Creates a store with the given catalog.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Store { items }
    }

    /// The full catalog, in construction order.
    #[inline]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Looks up a catalog entry by id.
    pub fn find_item(&self, item_id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Purchases a catalog item for the customer.
    ///
    /// ## Guards (in order, each short-circuits)
    /// 1. [`StoreError::ItemNotFound`] if the id is not in the catalog
    /// 2. [`StoreError::AlreadyOwned`] if the customer owns the id,
    ///    regardless of balance or refund history
    /// 3. [`StoreError::InsufficientFunds`] if balance < price
    ///
    /// On success the price is deducted, a fresh zero-usage
    /// [`OwnedItem`](crate::customer::OwnedItem) snapshot is appended, and a
    /// purchase receipt for the price is returned. Failure paths mutate
    /// nothing.
    pub fn buy_item(&self, customer: &mut Customer, item_id: &str) -> StoreResult<Receipt> {
        let item = self
            .find_item(item_id)
            .ok_or_else(|| StoreError::ItemNotFound(item_id.to_string()))?;

        if customer.owns(item_id) {
            return Err(StoreError::AlreadyOwned(item_id.to_string()));
        }

        if customer.balance() < item.price() {
            return Err(StoreError::InsufficientFunds {
                item_id: item_id.to_string(),
                price_cents: item.price_cents,
                balance_cents: customer.balance_cents(),
            });
        }

        customer.record_purchase(item);
        Ok(Receipt::purchase(item.title.clone(), item.price_cents))
    }

    /// Refunds an owned item back to the store.
    ///
    /// ## Guards (in order)
    /// 1. [`StoreError::NotOwned`] if the id is not in the owned list
    /// 2. [`StoreError::UsageLimitExceeded`] if the item has been used for
    ///    [`REFUND_WINDOW_MINUTES`] minutes or more (inclusive boundary:
    ///    exactly 30 blocks the refund)
    ///
    /// On success the *recorded* purchase price (not the current catalog
    /// price) is credited back, the owned item is removed, and a refund
    /// receipt for that amount is returned.
    pub fn issue_refund(&self, customer: &mut Customer, item_id: &str) -> StoreResult<Receipt> {
        let index = customer
            .position_of(item_id)
            .ok_or_else(|| StoreError::NotOwned(item_id.to_string()))?;

        let minutes_used = customer.items()[index].minutes_used;
        if minutes_used >= REFUND_WINDOW_MINUTES {
            return Err(StoreError::UsageLimitExceeded {
                item_id: item_id.to_string(),
                minutes_used,
            });
        }

        let removed = customer.record_refund(index);
        Ok(Receipt::refund(removed.title, removed.price_cents))
    }

    /// Case-insensitive substring search against catalog titles.
    ///
    /// Returns all matches in catalog order. An empty result is not an
    /// error; the caller renders a "no matches" message for it. The caller
    /// also decides which matches to *print*: only entries with a
    /// [`kind_label`](CatalogItem::kind_label) appear in rendered output.
    pub fn find_by_title(&self, keyword: &str) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|i| i.matches_title(keyword))
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
