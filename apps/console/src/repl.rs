//! # Menu Loop
//!
//! Reads menu choices and operation arguments line by line, validates them,
//! dispatches into `shopfront-core`, and hands the structured results to the
//! renderer.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Console Dispatch                                  │
//! │                                                                         │
//! │  stdin line ──► parse_choice ──► MenuChoice                             │
//! │                                     │                                   │
//! │   Buy ────► prompt id ──► validate ──► store.buy_item ──► receipt      │
//! │   Use ────► prompt id, minutes ──────► customer.use_item ──► report    │
//! │   Refund ─► prompt id ──► validate ──► store.issue_refund ──► receipt  │
//! │   Find ───► prompt keyword ──────────► store.find_by_title ──► hits    │
//! │   Reload ─► prompt amount ──► validate ──► customer.reload_account     │
//! │   Account ► (no prompt) ─────────────► balance + owned-item infos      │
//! │   Exit ───► leave the loop                                             │
//! │                                                                         │
//! │  Unparseable or invalid input prints a message and re-shows the menu;  │
//! │  nothing terminates the process except Exit or EOF.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Lines, StdinLock};

use shopfront_core::{validation, Customer, Store};
use tracing::{info, warn};

use crate::render;

// =============================================================================
// Menu Model
// =============================================================================

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Buy,
    Use,
    Refund,
    Find,
    Reload,
    Account,
    Exit,
}

const MENU: &str = "\
1. Buy Item
2. Use Item
3. Issue Refund
4. Find Item by Title
5. Reload Account
6. Account Summary
7. Exit";

/// Parses a menu choice from an input line.
pub fn parse_choice(line: &str) -> Option<MenuChoice> {
    match line.trim() {
        "1" => Some(MenuChoice::Buy),
        "2" => Some(MenuChoice::Use),
        "3" => Some(MenuChoice::Refund),
        "4" => Some(MenuChoice::Find),
        "5" => Some(MenuChoice::Reload),
        "6" => Some(MenuChoice::Account),
        "7" => Some(MenuChoice::Exit),
        _ => None,
    }
}

// =============================================================================
// Input Parsing
// =============================================================================

/// Parses a money amount typed as `X`, `X.Y`, or `X.YY` into cents.
///
/// Negative amounts parse fine; rejecting them is the validator's job,
/// not the parser's. Returns `None` for anything that is not a number
/// with at most two decimal places.
pub fn parse_amount_cents(input: &str) -> Option<i64> {
    let input = input.trim();
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (major_str, minor_str) = match digits.split_once('.') {
        Some((major, minor)) => (major, minor),
        None => (digits, ""),
    };

    if major_str.is_empty() || !major_str.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if minor_str.len() > 2 || !minor_str.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let major: i64 = major_str.parse().ok()?;
    let minor: i64 = if minor_str.is_empty() {
        0
    } else {
        // "5" means 50 cents, "05" means 5 cents
        let parsed: i64 = minor_str.parse().ok()?;
        if minor_str.len() == 1 {
            parsed * 10
        } else {
            parsed
        }
    };

    let cents = major.checked_mul(100)?.checked_add(minor)?;
    Some(if negative { -cents } else { cents })
}

/// Parses a whole number of minutes.
pub fn parse_minutes(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

// =============================================================================
// Loop
// =============================================================================

type InputLines<'a> = Lines<StdinLock<'a>>;

/// Runs the menu loop until the user exits or stdin closes.
pub fn run(store: &Store, customer: &mut Customer) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", MENU);

        let Some(line) = next_line(&mut lines)? else {
            break; // EOF ends the session like Exit does
        };

        match parse_choice(&line) {
            Some(MenuChoice::Exit) => {
                println!("Exiting...");
                break;
            }
            Some(choice) => dispatch(choice, store, customer, &mut lines)?,
            None => println!("Invalid option. Please try again."),
        }
    }

    Ok(())
}

fn dispatch(
    choice: MenuChoice,
    store: &Store,
    customer: &mut Customer,
    lines: &mut InputLines<'_>,
) -> io::Result<()> {
    match choice {
        MenuChoice::Buy => handle_buy(store, customer, lines),
        MenuChoice::Use => handle_use(customer, lines),
        MenuChoice::Refund => handle_refund(store, customer, lines),
        MenuChoice::Find => handle_find(store, lines),
        MenuChoice::Reload => handle_reload(customer, lines),
        MenuChoice::Account => {
            for line in render::account_summary_lines(customer) {
                println!("{}", line);
            }
            Ok(())
        }
        MenuChoice::Exit => unreachable!("Exit is handled by the caller"),
    }
}

// =============================================================================
// Handlers
// =============================================================================

fn handle_buy(store: &Store, customer: &mut Customer, lines: &mut InputLines<'_>) -> io::Result<()> {
    let Some(raw) = prompt(lines, "Enter item ID to buy:")? else {
        return Ok(());
    };
    let item_id = match validation::validate_item_id(&raw) {
        Ok(id) => id,
        Err(err) => {
            println!("Invalid input: {}", err);
            return Ok(());
        }
    };

    match store.buy_item(customer, &item_id) {
        Ok(receipt) => {
            info!(%item_id, amount = %receipt.amount(), "purchase completed");
            println!("Purchase success!");
            println!("{}", receipt);
        }
        Err(err) => {
            warn!(%item_id, %err, "purchase rejected");
            println!("{}", render::purchase_error_line(&err));
        }
    }
    Ok(())
}

fn handle_use(customer: &mut Customer, lines: &mut InputLines<'_>) -> io::Result<()> {
    let Some(raw) = prompt(lines, "Enter item ID to use:")? else {
        return Ok(());
    };
    let item_id = match validation::validate_item_id(&raw) {
        Ok(id) => id,
        Err(err) => {
            println!("Invalid input: {}", err);
            return Ok(());
        }
    };

    let Some(raw_minutes) = prompt(lines, "Enter minutes to use:")? else {
        return Ok(());
    };
    let Some(minutes) = parse_minutes(&raw_minutes) else {
        println!("Invalid input: minutes must be a whole number.");
        return Ok(());
    };
    if let Err(err) = validation::validate_minutes(minutes) {
        println!("Invalid input: {}", err);
        return Ok(());
    }

    match customer.use_item(&item_id, minutes) {
        Ok(report) => {
            info!(%item_id, minutes, total = report.minutes_total, "usage recorded");
            println!("Used {} for {} minutes.", report.title, report.minutes_added);
        }
        Err(err) => {
            warn!(%item_id, %err, "usage rejected");
            println!("{}", render::usage_error_line(&err, &item_id));
        }
    }
    Ok(())
}

fn handle_refund(
    store: &Store,
    customer: &mut Customer,
    lines: &mut InputLines<'_>,
) -> io::Result<()> {
    let Some(raw) = prompt(lines, "Enter item ID to refund:")? else {
        return Ok(());
    };
    let item_id = match validation::validate_item_id(&raw) {
        Ok(id) => id,
        Err(err) => {
            println!("Invalid input: {}", err);
            return Ok(());
        }
    };

    match store.issue_refund(customer, &item_id) {
        Ok(receipt) => {
            info!(%item_id, amount = %receipt.amount(), "refund completed");
            println!("Refund success!");
            println!("{}", receipt);
        }
        Err(err) => {
            warn!(%item_id, %err, "refund rejected");
            println!("{}", render::refund_error_line(&err));
        }
    }
    Ok(())
}

fn handle_find(store: &Store, lines: &mut InputLines<'_>) -> io::Result<()> {
    let Some(raw) = prompt(lines, "Enter keyword to search by title:")? else {
        return Ok(());
    };
    let keyword = match validation::validate_search_keyword(&raw) {
        Ok(k) => k,
        Err(err) => {
            println!("Invalid input: {}", err);
            return Ok(());
        }
    };

    let hits = store.find_by_title(&keyword);
    info!(%keyword, hits = hits.len(), "title search");
    if hits.is_empty() {
        println!("Sorry, no matching items found.");
    } else {
        for line in render::search_result_lines(&hits) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn handle_reload(customer: &mut Customer, lines: &mut InputLines<'_>) -> io::Result<()> {
    let Some(raw) = prompt(lines, "Enter amount to reload:")? else {
        return Ok(());
    };
    let Some(amount_cents) = parse_amount_cents(&raw) else {
        println!("Invalid input: amount must look like 12 or 12.50.");
        return Ok(());
    };
    if let Err(err) = validation::validate_reload_amount_cents(amount_cents) {
        println!("Invalid input: {}", err);
        return Ok(());
    }

    customer.reload_account(amount_cents);
    info!(amount_cents, balance = %customer.balance(), "account reloaded");
    println!("Account reloaded. New balance: {}", customer.balance());
    Ok(())
}

// =============================================================================
// Line Helpers
// =============================================================================

/// Prints a prompt and reads the next line. `None` means EOF.
fn prompt(lines: &mut InputLines<'_>, text: &str) -> io::Result<Option<String>> {
    println!("{}", text);
    next_line(lines)
}

fn next_line(lines: &mut InputLines<'_>) -> io::Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1"), Some(MenuChoice::Buy));
        assert_eq!(parse_choice(" 4 "), Some(MenuChoice::Find));
        assert_eq!(parse_choice("7"), Some(MenuChoice::Exit));
        assert_eq!(parse_choice("8"), None);
        assert_eq!(parse_choice("buy"), None);
        assert_eq!(parse_choice(""), None);
    }

    #[test]
    fn test_parse_amount_cents_whole_and_decimal() {
        assert_eq!(parse_amount_cents("12"), Some(1200));
        assert_eq!(parse_amount_cents("12.50"), Some(1250));
        assert_eq!(parse_amount_cents("12.5"), Some(1250));
        assert_eq!(parse_amount_cents("12.05"), Some(1205));
        assert_eq!(parse_amount_cents("0.99"), Some(99));
        assert_eq!(parse_amount_cents(" 100 "), Some(10_000));
    }

    #[test]
    fn test_parse_amount_cents_negative_parses() {
        // The validator rejects these later; the parser just parses
        assert_eq!(parse_amount_cents("-5"), Some(-500));
        assert_eq!(parse_amount_cents("-5.50"), Some(-550));
    }

    #[test]
    fn test_parse_amount_cents_rejects_garbage() {
        assert_eq!(parse_amount_cents(""), None);
        assert_eq!(parse_amount_cents("abc"), None);
        assert_eq!(parse_amount_cents("12.345"), None); // sub-cent precision
        assert_eq!(parse_amount_cents("12."), Some(1200)); // trailing dot, empty minor
        assert_eq!(parse_amount_cents(".50"), None); // no major digits
        assert_eq!(parse_amount_cents("1,50"), None);
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("30"), Some(30));
        assert_eq!(parse_minutes(" 5 "), Some(5));
        assert_eq!(parse_minutes("-3"), Some(-3)); // validator's problem
        assert_eq!(parse_minutes("ten"), None);
        assert_eq!(parse_minutes("1.5"), None);
    }
}
