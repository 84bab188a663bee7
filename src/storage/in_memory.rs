//! In-memory implementation of InvoiceStore

use crate::core::invoice::{Invoice, InvoiceId};
use crate::core::store::InvoiceStore;
use indexmap::IndexMap;

/// In-memory invoice store
///
/// Backed by an insertion-ordered map so lookups are by id while iteration
/// follows insertion order. The desk is single-threaded: callers hold it by
/// `&mut` and no locking is involved.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInvoiceStore {
    invoices: IndexMap<InvoiceId, Invoice>,
}

impl InMemoryInvoiceStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with records, in the given order
    pub fn with_invoices(invoices: impl IntoIterator<Item = Invoice>) -> Self {
        let mut store = Self::new();
        for invoice in invoices {
            store.add(invoice);
        }
        store
    }

    /// Iterate records in insertion order without cloning
    pub fn iter(&self) -> impl Iterator<Item = &Invoice> {
        self.invoices.values()
    }
}

impl InvoiceStore for InMemoryInvoiceStore {
    fn add(&mut self, invoice: Invoice) {
        tracing::debug!(invoice_id = %invoice.id, client = %invoice.client, "invoice added");
        self.invoices.insert(invoice.id, invoice);
    }

    fn update(&mut self, invoice: Invoice) -> bool {
        match self.invoices.get_mut(&invoice.id) {
            Some(slot) => {
                tracing::debug!(invoice_id = %invoice.id, "invoice updated");
                *slot = invoice;
                true
            }
            None => {
                tracing::warn!(invoice_id = %invoice.id, "update ignored: no such invoice");
                false
            }
        }
    }

    fn remove(&mut self, id: &InvoiceId) -> bool {
        // shift_remove keeps the remaining records in insertion order
        if self.invoices.shift_remove(id).is_some() {
            tracing::debug!(invoice_id = %id, "invoice removed");
            true
        } else {
            tracing::warn!(invoice_id = %id, "remove ignored: no such invoice");
            false
        }
    }

    fn records(&self) -> Box<dyn Iterator<Item = &Invoice> + '_> {
        Box::new(self.invoices.values())
    }

    fn get(&self, id: &InvoiceId) -> Option<&Invoice> {
        self.invoices.get(id)
    }

    fn len(&self) -> usize {
        self.invoices.len()
    }
}
