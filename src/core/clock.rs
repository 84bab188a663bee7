//! Sources of time and identity
//!
//! New records need today's date and a fresh id. Both come through small
//! traits so sessions can be driven deterministically in tests.

use chrono::{NaiveDate, Utc};
use std::cell::Cell;
use uuid::Uuid;

use crate::core::invoice::InvoiceId;

/// Provides the current calendar date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Today's date in UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock stuck on one date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Provides ids for new records
///
/// Implementations must never hand out the same id twice within a session;
/// the store relies on this instead of checking.
pub trait IdGenerator {
    fn next_id(&self) -> InvoiceId;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self) -> InvoiceId {
        InvoiceId::new_v4()
    }
}

/// Monotonically increasing ids: `00000000-0000-0000-0000-000000000001`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: Cell<u128>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> InvoiceId {
        let n = self.next.get() + 1;
        self.next.set(n);
        InvoiceId::from(Uuid::from_u128(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(FixedClock(day).today(), day);
    }

    #[test]
    fn test_sequential_ids_are_unique_and_ordered() {
        let ids = SequentialIds::new();
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(a < b);
        assert_eq!(a.as_uuid(), Uuid::from_u128(1));
    }

    #[test]
    fn test_random_ids_differ() {
        assert_ne!(RandomIds.next_id(), RandomIds.next_id());
    }
}
