//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                     │
//! │  ├── StoreError       - Transactional failures (buy/refund/use)        │
//! │  └── ValidationError  - Input validation failures at the boundary      │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → console renders a user message   │
//! │                                                                         │
//! │  Every error is recoverable: the menu loop reports it and re-prompts.  │
//! │  Nothing here terminates the process.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item id, balance, minutes)
//! 3. Errors are enum variants, never String
//! 4. Each variant maps to a user-facing message in the console renderer

use thiserror::Error;

// =============================================================================
// Store Error
// =============================================================================

/// Transactional errors from store and customer operations.
///
/// Operations are side-effect-free on failure: no partial mutation occurs
/// before a guard fails, so the caller can always retry with different input.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The referenced catalog id does not exist.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Purchase attempted for an id the customer already owns.
    ///
    /// ## When This Occurs
    /// - Buying the same item twice
    /// - Buying again after a refund is fine; this only fires while the
    ///   item is in the owned list
    #[error("Customer already owns item: {0}")]
    AlreadyOwned(String),

    /// Balance is below the item price.
    #[error("Insufficient funds for {item_id}: price {price_cents}, balance {balance_cents}")]
    InsufficientFunds {
        item_id: String,
        price_cents: i64,
        balance_cents: i64,
    },

    /// Refund or use attempted for an id not in the owned list.
    #[error("Item not in owned list: {0}")]
    NotOwned(String),

    /// Refund attempted after the refund window closed.
    ///
    /// The boundary is inclusive: an item used for exactly
    /// [`REFUND_WINDOW_MINUTES`](crate::REFUND_WINDOW_MINUTES) minutes is
    /// already non-refundable.
    #[error("Refund window exceeded for {item_id}: used for {minutes_used} minutes")]
    UsageLimitExceeded { item_id: String, minutes_used: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when parsed user input doesn't meet requirements. They are
/// raised at the application boundary, before business logic runs; the core
/// operations themselves stay permissive.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (bad characters, not a number, etc.).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::InsufficientFunds {
            item_id: "gtasa".to_string(),
            price_cents: 5000,
            balance_cents: 3000,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds for gtasa: price 5000, balance 3000"
        );

        let err = StoreError::UsageLimitExceeded {
            item_id: "gtasa".to_string(),
            minutes_used: 110,
        };
        assert_eq!(
            err.to_string(),
            "Refund window exceeded for gtasa: used for 110 minutes"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "item id".to_string(),
        };
        assert_eq!(err.to_string(), "item id is required");

        let err = ValidationError::MustBePositive {
            field: "amount".to_string(),
        };
        assert_eq!(err.to_string(), "amount must be positive");
    }

    #[test]
    fn test_validation_converts_to_store_error() {
        let validation_err = ValidationError::Required {
            field: "item id".to_string(),
        };
        let store_err: StoreError = validation_err.into();
        assert!(matches!(store_err, StoreError::Validation(_)));
    }
}
