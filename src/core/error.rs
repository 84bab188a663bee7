//! Typed error handling for invoice-desk
//!
//! The core has a deliberately thin error taxonomy. Missing records on
//! `update`/`remove` are silent no-ops and never surface here; what does
//! surface is misuse of the modal state machine, boundary values that cannot
//! be converted to a field's type, and (only in strict mode) failed commits.
//!
//! # Example
//!
//! ```rust
//! use invoice_desk::prelude::*;
//!
//! let mut session = Session::new(DeskConfig::default());
//! match session.commit() {
//!     Err(DeskError::ModalClosed { action }) => assert_eq!(action, "commit"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use crate::core::invoice::InvoiceId;
use thiserror::Error;

/// The main error type for invoice-desk
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DeskError {
    /// A field name from the boundary does not name an editable field
    #[error("Unknown invoice field '{0}'")]
    UnknownField(String),

    /// A boundary value could not be converted to the field's type
    #[error("Invalid value '{value}' for field '{field}': {reason}")]
    InvalidFieldValue {
        field: String,
        value: String,
        reason: String,
    },

    /// A draft operation was invoked while no modal is open
    #[error("Cannot {action}: no invoice is being created or edited")]
    ModalClosed { action: &'static str },

    /// A modal was opened while another one is still active
    #[error("Another invoice is already being created or edited")]
    ModalBusy,

    /// A delete action was invoked outside of edit mode
    #[error("Cannot {action}: no existing invoice is being edited")]
    NotEditing { action: &'static str },

    /// `confirm_delete` was invoked without a pending request
    #[error("Delete was not requested")]
    DeleteNotRequested,

    /// No stored invoice has this id
    #[error("Invoice not found: {0}")]
    InvoiceNotFound(InvoiceId),

    /// Strict-mode commit rejected the draft
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Configuration could not be parsed or is inconsistent
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DeskError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DeskError::UnknownField(_) => "UNKNOWN_FIELD",
            DeskError::InvalidFieldValue { .. } => "INVALID_FIELD_VALUE",
            DeskError::ModalClosed { .. } => "MODAL_CLOSED",
            DeskError::ModalBusy => "MODAL_BUSY",
            DeskError::NotEditing { .. } => "NOT_EDITING",
            DeskError::DeleteNotRequested => "DELETE_NOT_REQUESTED",
            DeskError::InvoiceNotFound(_) => "INVOICE_NOT_FOUND",
            DeskError::Validation(_) => "VALIDATION_ERROR",
            DeskError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Build an [`DeskError::InvalidFieldValue`]
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DeskError::InvalidFieldValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error reports misuse of the modal state machine
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            DeskError::ModalClosed { .. }
                | DeskError::ModalBusy
                | DeskError::NotEditing { .. }
                | DeskError::DeleteNotRequested
        )
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, DeskError>;
