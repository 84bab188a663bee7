//! # Invoice Desk
//!
//! The state and interaction core of a single-screen invoice manager.
//!
//! ## Features
//!
//! - **Ordered Store**: insertion-ordered invoice collection with add/update/remove
//! - **View Pipeline**: case-insensitive search followed by a stable, direction-aware sort
//! - **Modal State Machine**: create and edit through a draft that only reaches the store on commit
//! - **Two-Phase Delete**: the boundary confirms before anything is removed
//! - **Scan Stub**: fabricates a plausible pending invoice in one step
//! - **Permissive by Default**: drafts are stored as entered; strict checks are opt-in
//!
//! Rendering is not part of this crate. A renderer reads [`Session::view`],
//! [`Session::modal`] and [`Session::sort_config`] and maps statuses to
//! styles through [`InvoiceStatus::style`](core::InvoiceStatus::style).
//!
//! ## Quick Start
//!
//! ```rust
//! use invoice_desk::prelude::*;
//!
//! let mut session = Session::new(DeskConfig::default());
//! let id = session.scan_action()?;
//!
//! session.begin_edit(&id)?;
//! session.field_change("status", "paid")?;
//! session.commit()?;
//!
//! assert_eq!(session.view()[0].status, InvoiceStatus::Paid);
//! assert_eq!(session.modal(), &ModalState::Closed);
//! # Ok::<(), DeskError>(())
//! ```

pub mod config;
pub mod core;
pub mod session;
pub mod storage;

pub use session::{Session, ViewSnapshot};

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        Amount, CommitOutcome, DeleteConfirmation, DeskError, FieldValue, Invoice, InvoiceField,
        InvoiceId, InvoiceStatus, ModalState, SortConfig, SortDirection, SortKey, StatusIcon,
        StatusStyle, Tone,
    };

    // === Seams ===
    pub use crate::core::{
        AmountSource, Clock, FixedAmount, FixedClock, IdGenerator, RandomAmounts, RandomIds,
        SequentialIds, SystemClock,
    };

    // === Storage ===
    pub use crate::core::InvoiceStore;
    pub use crate::storage::InMemoryInvoiceStore;

    // === Config ===
    pub use crate::config::{DeskConfig, ScanConfig, ValidationMode};

    // === Session ===
    pub use crate::session::{Session, ViewSnapshot, view};
}
