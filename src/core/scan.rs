//! The "scan" stub
//!
//! No document is read. Scanning fabricates a plausible pending invoice that
//! the session commits straight to the store.

use chrono::NaiveDate;
use rand::Rng;

use crate::config::ScanConfig;
use crate::core::invoice::{Amount, Invoice, InvoiceId, InvoiceStatus, add_days};

/// Picks the amount of a fabricated invoice
pub trait AmountSource {
    /// A whole amount in `min..=max`
    fn pick(&self, min: u32, max: u32) -> u32;
}

/// Uniformly random amounts from the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAmounts;

impl AmountSource for RandomAmounts {
    fn pick(&self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        rand::rng().random_range(min..=max)
    }
}

/// Always the same amount, clamped into range
#[derive(Debug, Clone, Copy)]
pub struct FixedAmount(pub u32);

impl AmountSource for FixedAmount {
    fn pick(&self, min: u32, max: u32) -> u32 {
        self.0.clamp(min, max.max(min))
    }
}

/// Build the record a scan produces
///
/// `existing` is the current collection size; the client is named after the
/// position the new record will take.
pub fn fabricate(
    id: InvoiceId,
    existing: usize,
    today: NaiveDate,
    due_in_days: u64,
    config: &ScanConfig,
    amounts: &dyn AmountSource,
) -> Invoice {
    let amount = amounts.pick(config.min_amount, config.max_amount);
    Invoice {
        id,
        client: format!("{} {}", config.client_prefix, existing + 1),
        amount: Amount::from(amount),
        date: today,
        due_date: add_days(today, due_in_days),
        description: config.description.clone(),
        status: InvoiceStatus::Pending,
    }
}
