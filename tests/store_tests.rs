//! Integration tests for the in-memory invoice store

mod common;

use common::*;
use invoice_desk::prelude::*;
use std::collections::HashSet;

fn ids(store: &InMemoryInvoiceStore) -> Vec<InvoiceId> {
    store.all().iter().map(|i| i.id).collect()
}

#[test]
fn test_add_then_remove_restores_collection() {
    let mut store = InMemoryInvoiceStore::with_invoices([
        invoice(1, "A", 1.0, "2024-01-01", "2024-01-31"),
        invoice(2, "B", 2.0, "2024-01-02", "2024-02-01"),
    ]);
    let before: HashSet<InvoiceId> = ids(&store).into_iter().collect();

    let x = invoice(3, "X", 3.0, "2024-01-03", "2024-02-02");
    store.add(x.clone());
    assert_eq!(store.len(), 3);
    assert!(store.remove(&x.id));

    let after: HashSet<InvoiceId> = ids(&store).into_iter().collect();
    assert_eq!(before, after);
}

#[test]
fn test_add_then_update_amount_changes_only_amount() {
    let mut store = InMemoryInvoiceStore::new();
    let x = acme();
    store.add(x.clone());

    store.update(Invoice {
        amount: Amount::Number(725.0),
        ..x.clone()
    });

    let saved = store.get(&x.id).expect("record present");
    assert_eq!(saved.amount, Amount::Number(725.0));
    assert_eq!(saved.client, x.client);
    assert_eq!(saved.date, x.date);
    assert_eq!(saved.due_date, x.due_date);
    assert_eq!(saved.description, x.description);
    assert_eq!(saved.status, x.status);
}

#[test]
fn test_update_and_remove_of_missing_ids_are_silent() {
    let mut store = InMemoryInvoiceStore::with_invoices([acme()]);
    let snapshot = store.all();

    assert!(!store.update(invoice(99, "Ghost", 0.0, "2024-01-01", "2024-01-01")));
    assert!(!store.remove(&invoice(98, "", 0.0, "2024-01-01", "2024-01-01").id));

    assert_eq!(store.all(), snapshot);
}

#[test]
fn test_positions_survive_updates_and_removals() {
    let mut store = InMemoryInvoiceStore::new();
    for n in 1..=5 {
        store.add(invoice(n, &format!("C{}", n), n as f64, "2024-01-01", "2024-01-31"));
    }

    store.update(invoice(2, "C2-edited", 20.0, "2024-01-01", "2024-01-31"));
    store.remove(&invoice(4, "", 0.0, "2024-01-01", "2024-01-01").id);

    let clients: Vec<String> = store.all().into_iter().map(|i| i.client).collect();
    assert_eq!(clients, vec!["C1", "C2-edited", "C3", "C5"]);
}

#[test]
fn test_all_returns_an_independent_copy() {
    let store = InMemoryInvoiceStore::with_invoices([acme()]);
    let mut copy = store.all();
    copy[0].client = "Mutated".into();

    assert_eq!(store.all()[0].client, "Acme");
}

#[test]
fn test_store_is_usable_through_the_trait() {
    fn touch(store: &mut dyn InvoiceStore, invoice: Invoice) -> usize {
        store.add(invoice);
        store.len()
    }

    let mut store = InMemoryInvoiceStore::new();
    assert_eq!(touch(&mut store, acme()), 1);
    assert!(store.contains(&acme().id));
}
