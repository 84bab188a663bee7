//! End-to-end tests driving a Session the way the UI layer does

mod common;

use common::*;
use invoice_desk::prelude::*;

#[test]
fn test_documented_scenario() {
    let original = acme();
    let mut session = session_with(vec![original.clone()]);

    session.set_search_term("acm");
    let rows = session.view();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, original.id);

    assert_eq!(
        session.set_sort(SortKey::Amount),
        SortConfig::new(SortKey::Amount, SortDirection::Asc)
    );
    assert_eq!(
        session.set_sort(SortKey::Amount),
        SortConfig::new(SortKey::Amount, SortDirection::Desc)
    );
    assert_eq!(
        session.sort_config().indicator_for(SortKey::Amount),
        Some(SortDirection::Desc)
    );

    session.begin_edit(&original.id).unwrap();
    session.field_change("status", "paid").unwrap();
    let outcome = session.commit().unwrap();

    assert_eq!(outcome, CommitOutcome::Updated(original.id));
    let saved = session.store().get(&original.id).unwrap();
    assert_eq!(
        saved,
        &Invoice {
            status: InvoiceStatus::Paid,
            ..original
        }
    );
    assert_eq!(session.modal(), &ModalState::Closed);
}

#[test]
fn test_edit_then_cancel_leaves_record_identical() {
    let original = acme();
    let mut session = session_with(vec![original.clone()]);

    session.begin_edit(&original.id).unwrap();
    session.field_change("client", "").unwrap();
    session.field_change("amount", "not a number").unwrap();
    session.field_change("dueDate", "1999-01-01").unwrap();
    session.field_change("description", "scribbles").unwrap();
    session.field_change("status", "overdue").unwrap();
    session.cancel().unwrap();

    let stored = session.store().get(&original.id).unwrap();
    assert_eq!(
        serde_json::to_string(stored).unwrap(),
        serde_json::to_string(&original).unwrap()
    );
    assert_eq!(session.modal(), &ModalState::Closed);
}

#[test]
fn test_store_untouched_until_commit() {
    let mut session = session_with(vec![]);
    session.begin_create().unwrap();
    session.field_change("client", "Initech").unwrap();
    session.field_change("amount", "1200").unwrap();
    assert!(session.store().is_empty());
    assert!(session.view().is_empty());

    let CommitOutcome::Created(id) = session.commit().unwrap() else {
        panic!("expected a create");
    };
    let saved = session.store().get(&id).unwrap();
    assert_eq!(saved.client, "Initech");
    assert_eq!(saved.amount, Amount::Number(1200.0));
    assert_eq!(saved.date, day("2024-03-01"));
    assert_eq!(saved.due_date, day("2024-03-31"));
    assert_eq!(saved.status, InvoiceStatus::Pending);
}

#[test]
fn test_cancelled_create_adds_nothing() {
    let mut session = session_with(vec![acme()]);
    session.begin_create().unwrap();
    session.field_change("client", "Never saved").unwrap();
    session.cancel().unwrap();

    assert_eq!(session.store().len(), 1);
}

#[test]
fn test_invalid_values_are_committed_as_is() {
    let mut session = session_with(vec![]);
    session.begin_create().unwrap();
    session.field_change("amount", "-40").unwrap();
    session.field_change("dueDate", "2024-02-01").unwrap();
    let id = session.commit().unwrap().id();

    let saved = session.store().get(&id).unwrap();
    assert_eq!(saved.client, "");
    assert_eq!(saved.amount, Amount::Number(-40.0));
    assert!(saved.due_date < saved.date);
}

#[test]
fn test_strict_mode_blocks_bad_commit() {
    let config = DeskConfig {
        validation: ValidationMode::Strict,
        ..DeskConfig::default()
    };
    let mut session = Session::new(config).with_clock(FixedClock(day("2024-03-01")));
    session.begin_create().unwrap();

    assert!(matches!(session.commit(), Err(DeskError::Validation(_))));
    assert!(session.store().is_empty());

    session.field_change("client", "Acme").unwrap();
    session.field_change("amount", 10.0).unwrap();
    session.commit().unwrap();
    assert_eq!(session.store().len(), 1);
}

#[test]
fn test_strict_mode_rejects_non_finite_amounts() {
    for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let config = DeskConfig {
            validation: ValidationMode::Strict,
            ..DeskConfig::default()
        };
        let mut session = Session::new(config).with_clock(FixedClock(day("2024-03-01")));
        session.begin_create().unwrap();
        session.field_change("client", "Acme").unwrap();
        session.field_change("amount", amount).unwrap();

        assert_eq!(session.draft().unwrap().amount.value(), None);
        assert!(matches!(session.commit(), Err(DeskError::Validation(_))));
        assert!(session.store().is_empty());
    }
}

#[test]
fn test_delete_requires_confirmation() {
    let original = acme();
    let other = invoice(2, "Globex", 80.0, "2024-01-05", "2024-02-04");
    let mut session = session_with(vec![original.clone(), other.clone()]);

    session.begin_edit(&original.id).unwrap();
    assert_eq!(
        session.confirm_delete().unwrap_err(),
        DeskError::DeleteNotRequested
    );

    let confirmation = session.request_delete().unwrap();
    assert_eq!(confirmation.id, original.id);

    session.cancel_delete().unwrap();
    assert!(session.store().contains(&original.id));
    assert!(matches!(session.modal(), ModalState::Editing { .. }));

    session.request_delete().unwrap();
    assert_eq!(session.confirm_delete().unwrap(), original.id);

    let remaining: Vec<InvoiceId> = session.view().iter().map(|i| i.id).collect();
    assert_eq!(remaining, vec![other.id]);
    assert_eq!(session.modal(), &ModalState::Closed);
}

#[test]
fn test_delete_removes_the_original_even_after_draft_edits() {
    let original = acme();
    let mut session = session_with(vec![original.clone()]);

    session.begin_edit(&original.id).unwrap();
    session.field_change("client", "Renamed").unwrap();
    session.request_delete().unwrap();
    session.confirm_delete().unwrap();

    assert!(session.store().is_empty());
}

#[test]
fn test_scan_bypasses_modal_and_commits() {
    let mut session = session_with(vec![acme()]);
    let id = session.scan_action().unwrap();

    let scanned = session.store().get(&id).unwrap();
    assert_eq!(scanned.client, "Client 2");
    assert_eq!(scanned.amount, Amount::Number(400.0));
    assert_eq!(scanned.description, "Service rendered");
    assert_eq!(scanned.date, day("2024-03-01"));
    assert_eq!(scanned.due_date, day("2024-03-31"));
    assert_eq!(scanned.status, InvoiceStatus::Pending);
    assert_eq!(session.modal(), &ModalState::Closed);
}

#[test]
fn test_random_scan_amounts_in_range() {
    let mut session = Session::new(DeskConfig::default());
    for _ in 0..50 {
        session.scan_action().unwrap();
    }
    for inv in session.store().all() {
        let amount = inv.amount.value().unwrap();
        assert!((100.0..=1099.0).contains(&amount));
    }
    let ids: std::collections::HashSet<InvoiceId> =
        session.store().all().iter().map(|i| i.id).collect();
    assert_eq!(ids.len(), 50);
}

#[test]
fn test_default_view_is_newest_first() {
    let mut session = session_with(vec![
        invoice(1, "Old", 1.0, "2023-01-01", "2023-01-31"),
        invoice(2, "New", 1.0, "2024-02-01", "2024-03-02"),
        invoice(3, "Mid", 1.0, "2023-07-01", "2023-07-31"),
    ]);
    let clients: Vec<String> = session.view().into_iter().map(|i| i.client).collect();
    assert_eq!(clients, vec!["New", "Mid", "Old"]);

    session.set_sort_by_name("client").unwrap();
    let clients: Vec<String> = session.view().into_iter().map(|i| i.client).collect();
    assert_eq!(clients, vec!["Mid", "New", "Old"]);
}

#[test]
fn test_search_is_case_insensitive_over_client_and_description() {
    let mut session = session_with(vec![
        acme(),
        Invoice {
            description: "acme referral".into(),
            ..invoice(2, "Globex", 10.0, "2024-01-02", "2024-02-01")
        },
        invoice(3, "Initech", 10.0, "2024-01-03", "2024-02-02"),
    ]);

    session.set_search_term("ACME");
    assert_eq!(session.view().len(), 2);

    session.set_search_term("consult");
    assert_eq!(session.view().len(), 1);

    session.set_search_term("");
    assert_eq!(session.view().len(), 3);
}
