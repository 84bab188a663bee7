//! View pipeline and the session boundary
//!
//! A [`Session`] is everything one screen holds: the store, the modal, the
//! search term and the sort. The UI layer feeds it discrete actions and reads
//! back the current view, modal state and sort config. Actions run to
//! completion one at a time, so nothing here is shared or locked.
//!
//! # Example
//!
//! ```rust
//! use invoice_desk::prelude::*;
//!
//! let mut session = Session::new(DeskConfig::default());
//! session.begin_create()?;
//! session.field_change("client", "Acme")?;
//! session.field_change("amount", "500")?;
//! session.commit()?;
//!
//! session.set_search_term("acm");
//! assert_eq!(session.view().len(), 1);
//! # Ok::<(), DeskError>(())
//! ```

use serde::Serialize;

use crate::config::DeskConfig;
use crate::core::clock::{Clock, IdGenerator, RandomIds, SystemClock};
use crate::core::error::{DeskError, Result};
use crate::core::field::{FieldValue, InvoiceField};
use crate::core::invoice::{Invoice, InvoiceId};
use crate::core::modal::{CommitOutcome, DeleteConfirmation, ModalController, ModalState};
use crate::core::query::{SortConfig, SortKey, matches_term};
use crate::core::scan::{self, AmountSource, RandomAmounts};
use crate::core::store::InvoiceStore;
use crate::storage::InMemoryInvoiceStore;

/// The displayed sequence: filter by `term`, then sort by `config`
pub fn view(records: &[Invoice], term: &str, config: SortConfig) -> Vec<Invoice> {
    view_of(records.iter(), term, config)
}

/// Filters and sorts borrowed records, cloning only the rows kept
fn view_of<'a>(
    records: impl Iterator<Item = &'a Invoice>,
    term: &str,
    config: SortConfig,
) -> Vec<Invoice> {
    let needle = term.to_lowercase();
    let mut rows: Vec<&Invoice> = records
        .filter(|inv| needle.is_empty() || matches_term(inv, &needle))
        .collect();
    rows.sort_by(|a, b| config.compare(a, b));
    rows.into_iter().cloned().collect()
}

/// The view plus what a renderer needs for its empty state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    /// Rows to display, filtered and sorted
    pub rows: Vec<Invoice>,

    /// Number of records in the store, ignoring the search term
    pub total: usize,

    pub sort: SortConfig,
}

impl ViewSnapshot {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when rows are hidden by the search term rather than absent
    pub fn is_filtered_out(&self) -> bool {
        self.rows.is_empty() && self.total > 0
    }
}

/// One screen's worth of invoice state
pub struct Session<S: InvoiceStore = InMemoryInvoiceStore> {
    config: DeskConfig,
    store: S,
    modal: ModalController,
    search_term: String,
    sort: SortConfig,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    amounts: Box<dyn AmountSource>,
}

impl Session<InMemoryInvoiceStore> {
    /// Start a session on an empty in-memory store
    pub fn new(config: DeskConfig) -> Self {
        Self::with_store(config, InMemoryInvoiceStore::new())
    }
}

impl<S: InvoiceStore> Session<S> {
    /// Start a session on an existing store
    pub fn with_store(config: DeskConfig, store: S) -> Self {
        let sort = config.default_sort;
        Self {
            config,
            store,
            modal: ModalController::new(),
            search_term: String::new(),
            sort,
            clock: Box::new(SystemClock),
            ids: Box::new(RandomIds),
            amounts: Box::new(RandomAmounts),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_ids(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_amounts(mut self, amounts: impl AmountSource + 'static) -> Self {
        self.amounts = Box::new(amounts);
        self
    }

    // === Inputs ===

    /// Fabricate a record and add it straight to the store
    ///
    /// Bypasses the modal entirely, so it is refused while one is open.
    pub fn scan_action(&mut self) -> Result<InvoiceId> {
        if self.modal.is_open() {
            return Err(DeskError::ModalBusy);
        }
        let invoice = scan::fabricate(
            self.ids.next_id(),
            self.store.len(),
            self.clock.today(),
            self.config.due_in_days,
            &self.config.scan,
            self.amounts.as_ref(),
        );
        let id = invoice.id;
        tracing::debug!(invoice_id = %id, client = %invoice.client, amount = %invoice.amount, "scanned invoice");
        self.store.add(invoice);
        Ok(id)
    }

    /// Open the create modal on a blank draft
    pub fn begin_create(&mut self) -> Result<()> {
        if self.modal.is_open() {
            return Err(DeskError::ModalBusy);
        }
        let draft = Invoice::blank(
            self.ids.next_id(),
            self.clock.today(),
            self.config.due_in_days,
        );
        self.modal.begin_create(draft)
    }

    /// Open the edit modal on the stored record `id`
    pub fn begin_edit(&mut self, id: &InvoiceId) -> Result<()> {
        let existing = self
            .store
            .get(id)
            .ok_or(DeskError::InvoiceNotFound(*id))?;
        self.modal.begin_edit(existing)
    }

    /// Apply a form edit by field name
    pub fn field_change(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<()> {
        let field: InvoiceField = name.parse()?;
        self.modal.field_change(field, value.into())
    }

    /// Apply a form edit by typed field
    pub fn set_field(&mut self, field: InvoiceField, value: impl Into<FieldValue>) -> Result<()> {
        self.modal.field_change(field, value.into())
    }

    /// Write the draft to the store and close the modal
    pub fn commit(&mut self) -> Result<CommitOutcome> {
        self.modal.commit(&mut self.store, self.config.validation)
    }

    pub fn request_delete(&mut self) -> Result<DeleteConfirmation> {
        self.modal.request_delete()
    }

    pub fn confirm_delete(&mut self) -> Result<InvoiceId> {
        self.modal.confirm_delete(&mut self.store)
    }

    pub fn cancel_delete(&mut self) -> Result<()> {
        self.modal.cancel_delete()
    }

    /// Close the modal and discard the draft
    pub fn cancel(&mut self) -> Result<()> {
        self.modal.cancel()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Select a sort column, toggling direction when it repeats
    pub fn set_sort(&mut self, key: SortKey) -> SortConfig {
        self.sort = self.sort.select(key);
        tracing::debug!(key = %self.sort.key, direction = ?self.sort.direction, "sort changed");
        self.sort
    }

    /// [`set_sort`](Self::set_sort) by column name
    pub fn set_sort_by_name(&mut self, key: &str) -> Result<SortConfig> {
        Ok(self.set_sort(key.parse()?))
    }

    // === Outputs ===

    /// The filtered, sorted records to display
    pub fn view(&self) -> Vec<Invoice> {
        let rows = view_of(self.store.records(), &self.search_term, self.sort);
        tracing::trace!(rows = rows.len(), total = self.store.len(), "view computed");
        rows
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            rows: self.view(),
            total: self.store.len(),
            sort: self.sort,
        }
    }

    pub fn modal(&self) -> &ModalState {
        self.modal.state()
    }

    pub fn draft(&self) -> Option<&Invoice> {
        self.modal.draft()
    }

    pub fn sort_config(&self) -> SortConfig {
        self.sort
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }
}
