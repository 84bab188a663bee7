//! Store trait for the authoritative invoice collection

use crate::core::invoice::{Invoice, InvoiceId};

/// Owner of the invoice collection
///
/// All mutation goes through `add`, `update` and `remove`. Records are
/// exposed in insertion order; `update` keeps a record's position.
///
/// Missing ids are not errors: `update` and `remove` simply report `false`.
pub trait InvoiceStore {
    /// Append a new record
    ///
    /// The caller guarantees `invoice.id` is not already present. The store
    /// does not re-check this.
    fn add(&mut self, invoice: Invoice);

    /// Replace the record with the same id in place
    ///
    /// Returns whether a record was replaced.
    fn update(&mut self, invoice: Invoice) -> bool;

    /// Delete the record with this id
    ///
    /// Returns whether a record was removed.
    fn remove(&mut self, id: &InvoiceId) -> bool;

    /// Borrow every record in insertion order
    fn records(&self) -> Box<dyn Iterator<Item = &Invoice> + '_>;

    /// All records in insertion order
    fn all(&self) -> Vec<Invoice> {
        self.records().cloned().collect()
    }

    /// Get a record by id
    fn get(&self, id: &InvoiceId) -> Option<&Invoice>;

    /// Number of records
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: &InvoiceId) -> bool {
        self.get(id).is_some()
    }
}
