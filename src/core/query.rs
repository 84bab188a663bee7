//! Sorting and filtering of invoice collections
//!
//! Both operations are pure: they take records by reference and return a new
//! sequence, leaving the input untouched.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::core::error::DeskError;
use crate::core::invoice::{Amount, Invoice};

/// Column an invoice list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Client,
    Amount,
    Date,
    DueDate,
    Status,
}

impl SortKey {
    /// Every key, in the order the sort menu lists them
    pub const ALL: [SortKey; 5] = [
        SortKey::Client,
        SortKey::Amount,
        SortKey::Date,
        SortKey::DueDate,
        SortKey::Status,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Client => "client",
            SortKey::Amount => "amount",
            SortKey::Date => "date",
            SortKey::DueDate => "dueDate",
            SortKey::Status => "status",
        }
    }

    /// Human-readable label for menus and column headers
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Client => "Client Name",
            SortKey::Amount => "Amount",
            SortKey::Date => "Invoice Date",
            SortKey::DueDate => "Due Date",
            SortKey::Status => "Status",
        }
    }

    /// Natural (ascending) ordering of two records on this key
    pub fn compare(&self, a: &Invoice, b: &Invoice) -> Ordering {
        match self {
            SortKey::Amount => compare_amounts(&a.amount, &b.amount),
            SortKey::Client => locale_cmp(&a.client, &b.client),
            // Canonical YYYY-MM-DD text orders the same as the calendar.
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::DueDate => a.due_date.cmp(&b.due_date),
            SortKey::Status => locale_cmp(a.status.as_str(), b.status.as_str()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(SortKey::Client),
            "amount" => Ok(SortKey::Amount),
            "date" => Ok(SortKey::Date),
            "dueDate" | "due_date" => Ok(SortKey::DueDate),
            "status" => Ok(SortKey::Status),
            other => Err(DeskError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: SortKey::Date,
            direction: SortDirection::Desc,
        }
    }
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Select a column: repeating the active ascending key flips it to
    /// descending, anything else sorts ascending.
    pub fn select(self, key: SortKey) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self { key, direction }
    }

    /// Direction indicator for a column header, only on the active key
    pub fn indicator_for(&self, key: SortKey) -> Option<SortDirection> {
        (self.key == key).then_some(self.direction)
    }

    /// Comparator for this configuration
    ///
    /// Descending negates the comparator rather than reversing the output,
    /// so equal keys keep their input order in both directions.
    pub fn compare(&self, a: &Invoice, b: &Invoice) -> Ordering {
        self.direction.apply(self.key.compare(a, b))
    }
}

/// Stable sort of `records` under `config`
pub fn sort(records: &[Invoice], config: SortConfig) -> Vec<Invoice> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| config.compare(a, b));
    sorted
}

/// Records whose client or description contains `term`, case-insensitively
///
/// An empty term keeps everything. Order is preserved.
pub fn filter(records: &[Invoice], term: &str) -> Vec<Invoice> {
    if term.is_empty() {
        return records.to_vec();
    }
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|inv| matches_term(inv, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lower-cased
pub fn matches_term(invoice: &Invoice, needle: &str) -> bool {
    invoice.client.to_lowercase().contains(needle)
        || invoice.description.to_lowercase().contains(needle)
}

/// Numbers order numerically and a cleared amount counts as zero. Other
/// non-numeric amounts sort after every number and tie with each other.
fn compare_amounts(a: &Amount, b: &Amount) -> Ordering {
    match (a.sort_value(), b.sort_value()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or_else(|| x.total_cmp(&y)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Case-insensitive text ordering in the manner of a default locale collator
///
/// Letters compare ignoring case first; among strings equal except for case,
/// lower case comes first.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a
        .cmp(folded_b)
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .map(|(x, y)| x.is_uppercase().cmp(&y.is_uppercase()))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.cmp(b))
}
