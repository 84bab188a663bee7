//! Shared fixtures for integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use invoice_desk::prelude::*;
use uuid::Uuid;

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// A fully populated invoice with a predictable id
pub fn invoice(n: u128, client: &str, amount: f64, date: &str, due: &str) -> Invoice {
    Invoice {
        id: InvoiceId::from(Uuid::from_u128(n)),
        client: client.to_string(),
        amount: Amount::Number(amount),
        date: day(date),
        due_date: day(due),
        description: String::new(),
        status: InvoiceStatus::Pending,
    }
}

/// The record used by the documented example scenario
pub fn acme() -> Invoice {
    Invoice {
        description: "Consulting".to_string(),
        ..invoice(1, "Acme", 500.0, "2024-01-01", "2024-01-31")
    }
}

/// A session over `records` with a fixed clock and fixed scan amounts
pub fn session_with(records: Vec<Invoice>) -> Session {
    Session::with_store(
        DeskConfig::default(),
        InMemoryInvoiceStore::with_invoices(records),
    )
    .with_clock(FixedClock(day("2024-03-01")))
    .with_amounts(FixedAmount(400))
}
