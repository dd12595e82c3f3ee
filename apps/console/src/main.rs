//! # Shopfront Console Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Shopfront Console                                 │
//! │                                                                         │
//! │  main.rs ────► Sets up logging, seeds Store and Customer               │
//! │                                                                         │
//! │  repl.rs ────► Menu loop: read line, parse, validate, dispatch         │
//! │                                                                         │
//! │  render.rs ──► Structured results / errors → user-facing text          │
//! │                                                                         │
//! │  All business decisions happen in shopfront-core; this binary only     │
//! │  moves lines of text in and out.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Seed the catalog and the customer account
//! 3. Run the menu loop until exit or EOF

use std::io;

use shopfront_core::{CatalogItem, Customer, Store};
use tracing_subscriber::EnvFilter;

mod render;
mod repl;

/// Starting balance for the demo customer account: $100.00.
const STARTING_BALANCE_CENTS: i64 = 10_000;

fn main() -> io::Result<()> {
    // Logs go to stderr; stdout belongs to the menu
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let store = Store::new(seed_catalog());
    let mut customer = Customer::new(STARTING_BALANCE_CENTS);

    tracing::info!(
        catalog_size = store.items().len(),
        balance = %customer.balance(),
        "shopfront ready"
    );

    repl::run(&store, &mut customer)
}

/// The demo catalog. Fixed at construction; there is no runtime catalog
/// management.
fn seed_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::game("gtasa", "GTA SA", 5000, "Game Studios", true),
        CatalogItem::movie("8mile", "8 Mile", 1500, 120),
        CatalogItem::game("hollow", "Hollow Crown", 2999, "Night Owl Interactive", false),
        CatalogItem::movie("ntrain", "Night Train", 999, 101),
    ]
}
