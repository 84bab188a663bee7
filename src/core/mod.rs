//! Core module containing the record schema, queries and the modal state machine

pub mod clock;
pub mod error;
pub mod field;
pub mod invoice;
pub mod modal;
pub mod query;
pub mod scan;
pub mod status;
pub mod store;
pub mod validation;

pub use clock::{Clock, FixedClock, IdGenerator, RandomIds, SequentialIds, SystemClock};
pub use error::{DeskError, Result};
pub use field::{FieldValue, InvoiceField};
pub use invoice::{Amount, Invoice, InvoiceId, InvoiceStatus};
pub use modal::{CommitOutcome, DeleteConfirmation, ModalController, ModalState};
pub use query::{SortConfig, SortDirection, SortKey};
pub use scan::{AmountSource, FixedAmount, RandomAmounts};
pub use status::{StatusIcon, StatusStyle, Tone};
pub use store::InvoiceStore;
