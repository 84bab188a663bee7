//! Opt-in commit checks
//!
//! The desk is permissive by default and commits whatever a draft holds.
//! With [`ValidationMode::Strict`](crate::config::ValidationMode::Strict) a
//! commit first runs the rules below; each returns a message on failure.

use crate::core::error::{DeskError, Result};
use crate::core::invoice::Invoice;

/// A single commit rule
pub type Rule = fn(&Invoice) -> std::result::Result<(), String>;

/// Rule: client must not be blank
pub fn client_present(invoice: &Invoice) -> std::result::Result<(), String> {
    if invoice.client.trim().is_empty() {
        Err("client is required".to_string())
    } else {
        Ok(())
    }
}

/// Rule: amount must be a finite number
pub fn amount_numeric(invoice: &Invoice) -> std::result::Result<(), String> {
    match invoice.amount.value() {
        Some(n) if n.is_finite() => Ok(()),
        _ => Err(format!("amount '{}' is not a number", invoice.amount)),
    }
}

/// Rule: amount must not be negative
///
/// Non-numeric amounts are left to [`amount_numeric`].
pub fn amount_non_negative(invoice: &Invoice) -> std::result::Result<(), String> {
    match invoice.amount.value() {
        Some(n) if n < 0.0 => Err(format!("amount must not be negative (value: {})", n)),
        _ => Ok(()),
    }
}

/// Rule: due date must be on or after the issue date
pub fn due_on_or_after_issue(invoice: &Invoice) -> std::result::Result<(), String> {
    if invoice.due_date < invoice.date {
        Err(format!(
            "due date {} is before issue date {}",
            invoice.due_date, invoice.date
        ))
    } else {
        Ok(())
    }
}

/// The rules strict mode applies, in reporting order
pub const STRICT_RULES: [Rule; 4] = [
    client_present,
    amount_numeric,
    amount_non_negative,
    due_on_or_after_issue,
];

/// Run every strict rule and report all failures at once
pub fn check_strict(invoice: &Invoice) -> Result<()> {
    let failures: Vec<String> = STRICT_RULES
        .iter()
        .filter_map(|rule| rule(invoice).err())
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(DeskError::Validation(failures.join("; ")))
    }
}
