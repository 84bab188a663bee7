//! The invoice record schema
//!
//! An [`Invoice`] is the only entity managed by the desk. Its fields are kept
//! permissive on purpose: a draft may carry an empty client, a negative or
//! non-numeric amount, or a due date before its issue date, and all of those
//! are stored exactly as entered.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::core::error::DeskError;

/// Opaque unique identifier of an invoice
///
/// Assigned at creation and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(Uuid);

impl InvoiceId {
    /// Generate a fresh random id
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for InvoiceId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for InvoiceId {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| DeskError::invalid_value("id", s, e.to_string()))
    }
}

/// Payment status of an invoice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    /// Every status, in the order the status picker lists them
    pub const ALL: [InvoiceStatus; 3] = [
        InvoiceStatus::Pending,
        InvoiceStatus::Paid,
        InvoiceStatus::Overdue,
    ];

    /// The lower-case name used on the boundary and for text comparison
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            "overdue" => Ok(InvoiceStatus::Overdue),
            _ => Err(DeskError::invalid_value(
                "status",
                s,
                "expected one of pending, paid, overdue",
            )),
        }
    }
}

/// Invoice amount as entered
///
/// Text that parses as a finite decimal is kept as a number. Anything else is
/// retained verbatim so nothing the user typed is lost. Negative zero is
/// stored as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Unparsed(String),
}

impl Amount {
    /// Interpret a text entry
    pub fn parse(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Amount::from_number(n),
            _ => Amount::Unparsed(text.to_string()),
        }
    }

    /// Interpret a numeric entry
    ///
    /// `NaN` and infinities are not amounts and are kept as their text.
    pub fn from_number(n: f64) -> Self {
        if !n.is_finite() {
            Amount::Unparsed(n.to_string())
        } else if n == 0.0 {
            Amount::Number(0.0)
        } else {
            Amount::Number(n)
        }
    }

    /// Numeric value, if the amount is numeric
    pub fn value(&self) -> Option<f64> {
        match self {
            Amount::Number(n) => Some(*n),
            Amount::Unparsed(_) => None,
        }
    }

    /// Value used for ordering: a cleared entry counts as zero
    pub fn sort_value(&self) -> Option<f64> {
        match self {
            Amount::Number(n) => Some(*n),
            Amount::Unparsed(s) if s.trim().is_empty() => Some(0.0),
            Amount::Unparsed(_) => None,
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Number(0.0)
    }
}

impl From<f64> for Amount {
    fn from(n: f64) -> Self {
        Amount::from_number(n)
    }
}

impl From<u32> for Amount {
    fn from(n: u32) -> Self {
        Amount::Number(f64::from(n))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(n) => write!(f, "{}", n),
            Amount::Unparsed(s) => f.write_str(s),
        }
    }
}

/// An invoice record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    pub client: String,
    pub amount: Amount,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub description: String,
    pub status: InvoiceStatus,
}

impl Invoice {
    /// A blank record as shown when the user starts a new invoice
    ///
    /// Issued `today`, due `due_in_days` later, pending, amount 0.
    pub fn blank(id: InvoiceId, today: NaiveDate, due_in_days: u64) -> Self {
        Self {
            id,
            client: String::new(),
            amount: Amount::default(),
            date: today,
            due_date: add_days(today, due_in_days),
            description: String::new(),
            status: InvoiceStatus::Pending,
        }
    }
}

/// `date + days`, saturating at the calendar's upper bound
pub(crate) fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}
