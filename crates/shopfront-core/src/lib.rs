//! # shopfront-core: Pure Business Logic for Shopfront
//!
//! This crate is the **heart** of Shopfront. It contains the catalog model
//! and the transactional purchase/refund logic as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Shopfront Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     apps/console                                │   │
//! │  │    Menu loop ──► Line parsing ──► Rendering ──► stdout          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopfront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   store   │  │ customer  │  │  receipt  │  │   │
//! │  │   │CatalogItem│  │ buy/refund│  │ balance   │  │  Receipt  │  │   │
//! │  │   │ ItemKind  │  │  search   │  │ OwnedItem │  │  Display  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO STDIN • NO STDOUT • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Catalog entries ([`CatalogItem`], [`ItemKind`])
//! - [`customer`] - Customer balance and owned items
//! - [`store`] - The transactional core (buy, refund, search)
//! - [`receipt`] - Purchase/refund receipts
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for the application boundary
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation takes already-parsed arguments and
//!    returns a structured result; the caller does all printing
//! 2. **No I/O**: stdin, stdout, file system, and network access are
//!    FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid
//!    float errors
//! 4. **Explicit Errors**: All failures are typed `Result`s, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::{CatalogItem, Customer, Store};
//!
//! let store = Store::new(vec![
//!     CatalogItem::game("gtasa", "GTA SA", 5000, "Game Studios", true),
//!     CatalogItem::movie("8mile", "8 Mile", 1500, 120),
//! ]);
//! let mut customer = Customer::new(10_000); // $100.00
//!
//! let receipt = store.buy_item(&mut customer, "gtasa").unwrap();
//! assert_eq!(receipt.amount_cents, 5000);
//! assert_eq!(customer.balance_cents(), 5000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod customer;
pub mod error;
pub mod money;
pub mod receipt;
pub mod store;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopfront_core::Money` instead of
// `use shopfront_core::money::Money`

pub use catalog::{CatalogItem, ItemKind};
pub use customer::{Customer, OwnedItem, UsageReport};
pub use error::{StoreError, StoreResult, ValidationError};
pub use money::Money;
pub use receipt::{Receipt, ReceiptKind};
pub use store::Store;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Refund window in minutes of use.
///
/// An owned item used for this many minutes **or more** is no longer
/// refundable (the boundary is inclusive: exactly 30 minutes blocks the
/// refund).
pub const REFUND_WINDOW_MINUTES: i64 = 30;

/// Maximum length of a catalog item id.
///
/// Catalog ids are short human-assigned business ids ("gtasa", "8mile");
/// anything longer is a parsing mistake, not an id.
pub const MAX_ITEM_ID_LEN: usize = 50;

/// Maximum length of a title search keyword.
pub const MAX_SEARCH_KEYWORD_LEN: usize = 100;
