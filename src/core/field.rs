//! Field names and dynamic field access
//!
//! The boundary layer edits drafts by field name (`fieldChange(name, value)`),
//! so every editable field has a name and accepts a [`FieldValue`]. Values are
//! converted to the field's type but never validated: an empty client or a
//! negative amount is applied as-is.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::{DeskError, Result};
use crate::core::invoice::{Amount, Invoice, InvoiceStatus};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// An editable invoice field
///
/// `id` is deliberately absent: it is fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvoiceField {
    Client,
    Amount,
    Date,
    DueDate,
    Description,
    Status,
}

impl InvoiceField {
    pub const ALL: [InvoiceField; 6] = [
        InvoiceField::Client,
        InvoiceField::Amount,
        InvoiceField::Date,
        InvoiceField::DueDate,
        InvoiceField::Description,
        InvoiceField::Status,
    ];

    /// Name of the field as the form inputs use it
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceField::Client => "client",
            InvoiceField::Amount => "amount",
            InvoiceField::Date => "date",
            InvoiceField::DueDate => "dueDate",
            InvoiceField::Description => "description",
            InvoiceField::Status => "status",
        }
    }
}

impl fmt::Display for InvoiceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceField {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "client" => Ok(InvoiceField::Client),
            "amount" => Ok(InvoiceField::Amount),
            "date" => Ok(InvoiceField::Date),
            "dueDate" | "due_date" => Ok(InvoiceField::DueDate),
            "description" => Ok(InvoiceField::Description),
            "status" => Ok(InvoiceField::Status),
            other => Err(DeskError::UnknownField(other.to_string())),
        }
    }
}

/// A value coming from (or going to) a form input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Date(NaiveDate),
    Status(InvoiceStatus),
    Text(String),
}

impl FieldValue {
    /// Get the value as text if it is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Render the value the way a text input would show it
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Date(d) => d.format(DATE_FORMAT).to_string(),
            FieldValue::Status(s) => s.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

impl From<InvoiceStatus> for FieldValue {
    fn from(s: InvoiceStatus) -> Self {
        FieldValue::Status(s)
    }
}

impl From<&Amount> for FieldValue {
    fn from(amount: &Amount) -> Self {
        match amount {
            Amount::Number(n) => FieldValue::Number(*n),
            Amount::Unparsed(s) => FieldValue::Text(s.clone()),
        }
    }
}

fn parse_date(field: InvoiceField, value: FieldValue) -> Result<NaiveDate> {
    match value {
        FieldValue::Date(d) => Ok(d),
        FieldValue::Text(s) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map_err(|_| DeskError::invalid_value(field.as_str(), s, "expected YYYY-MM-DD")),
        other => Err(DeskError::invalid_value(
            field.as_str(),
            other.to_text(),
            "expected a calendar date",
        )),
    }
}

impl Invoice {
    /// Read a field by name
    pub fn field_value(&self, field: InvoiceField) -> FieldValue {
        match field {
            InvoiceField::Client => FieldValue::Text(self.client.clone()),
            InvoiceField::Amount => FieldValue::from(&self.amount),
            InvoiceField::Date => FieldValue::Date(self.date),
            InvoiceField::DueDate => FieldValue::Date(self.due_date),
            InvoiceField::Description => FieldValue::Text(self.description.clone()),
            InvoiceField::Status => FieldValue::Status(self.status),
        }
    }

    /// Write a field, converting the value to the field's type
    ///
    /// On error the invoice is left unchanged.
    pub fn set_field(&mut self, field: InvoiceField, value: FieldValue) -> Result<()> {
        match field {
            InvoiceField::Client => self.client = value.to_text(),
            InvoiceField::Description => self.description = value.to_text(),
            InvoiceField::Amount => {
                self.amount = match value {
                    FieldValue::Number(n) => Amount::from_number(n),
                    FieldValue::Text(s) => Amount::parse(&s),
                    other => Amount::Unparsed(other.to_text()),
                }
            }
            InvoiceField::Date => self.date = parse_date(field, value)?,
            InvoiceField::DueDate => self.due_date = parse_date(field, value)?,
            InvoiceField::Status => {
                self.status = match value {
                    FieldValue::Status(s) => s,
                    FieldValue::Text(s) => s.parse()?,
                    other => {
                        return Err(DeskError::invalid_value(
                            "status",
                            other.to_text(),
                            "expected one of pending, paid, overdue",
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}
