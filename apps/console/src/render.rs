//! # Rendering
//!
//! Turns structured core results and errors into the user-facing lines the
//! console prints. Typed domain errors translate into per-operation user
//! messages here, at the outermost layer, so the core never formats text
//! for humans.

use shopfront_core::{CatalogItem, Customer, StoreError, REFUND_WINDOW_MINUTES};

// =============================================================================
// Error Lines
// =============================================================================

/// User-facing line for a failed purchase.
pub fn purchase_error_line(err: &StoreError) -> String {
    match err {
        StoreError::ItemNotFound(_) => "Item not found.".to_string(),
        StoreError::AlreadyOwned(_) => {
            "Purchase failed: Customer already owns this item.".to_string()
        }
        StoreError::InsufficientFunds { .. } => "Purchase failed: Insufficient funds.".to_string(),
        other => format!("Purchase failed: {}", other),
    }
}

/// User-facing line for a failed refund.
pub fn refund_error_line(err: &StoreError) -> String {
    match err {
        StoreError::NotOwned(_) => "Refund failed: Item not found in customer's list.".to_string(),
        StoreError::UsageLimitExceeded { .. } => format!(
            "Refund failed: Item used for {} minutes or more.",
            REFUND_WINDOW_MINUTES
        ),
        other => format!("Refund failed: {}", other),
    }
}

/// User-facing line for a failed use-item call.
pub fn usage_error_line(err: &StoreError, item_id: &str) -> String {
    match err {
        StoreError::NotOwned(_) => format!("Item with ID {} not found.", item_id),
        other => format!("Use failed: {}", other),
    }
}

// =============================================================================
// Result Lines
// =============================================================================

/// Lines for title-search hits: one per match, tagged with the kind label.
///
/// Matches without a kind label are silently excluded from the output (they
/// still counted as matches for the caller's empty check). Every current
/// catalog variant carries a label, so in practice every hit prints.
pub fn search_result_lines(hits: &[&CatalogItem]) -> Vec<String> {
    hits.iter()
        .filter_map(|item| {
            item.kind_label()
                .map(|label| format!("{} {}", label, item.info()))
        })
        .collect()
}

/// Lines for the account summary: balance plus each owned item's info.
pub fn account_summary_lines(customer: &Customer) -> Vec<String> {
    let mut lines = vec![format!("Balance: {}", customer.balance())];

    if customer.items().is_empty() {
        lines.push("No items owned.".to_string());
    } else {
        lines.push(format!("Owned items ({}):", customer.items().len()));
        for item in customer.items() {
            lines.push(item.info());
        }
    }

    lines
}

// =============================================================================
// Unit Tests
// =============================================================================
