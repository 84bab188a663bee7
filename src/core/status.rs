//! Status to style mapping
//!
//! The renderer resolves row tint, badge tint and badge icon through this
//! table. Nothing else in the core looks at styling.

use serde::Serialize;

use crate::core::invoice::InvoiceStatus;

/// Colour family used for a row background and its badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Green,
    Yellow,
    Red,
}

/// Icon shown inside a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusIcon {
    CheckCircle,
    Clock,
    ExclamationCircle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusStyle {
    pub tone: Tone,
    pub icon: StatusIcon,
}

impl InvoiceStatus {
    pub fn style(&self) -> StatusStyle {
        match self {
            InvoiceStatus::Paid => StatusStyle {
                tone: Tone::Green,
                icon: StatusIcon::CheckCircle,
            },
            InvoiceStatus::Pending => StatusStyle {
                tone: Tone::Yellow,
                icon: StatusIcon::Clock,
            },
            InvoiceStatus::Overdue => StatusStyle {
                tone: Tone::Red,
                icon: StatusIcon::ExclamationCircle,
            },
        }
    }
}
