//! Scripted walk through a desk session
//!
//! Run with `RUST_LOG=invoice_desk=trace` to see every store mutation and
//! modal transition.

use anyhow::Result;
use invoice_desk::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_view(title: &str, session: &Session) {
    let snapshot = session.snapshot();
    println!(
        "\n== {} (sort: {} {:?}, search: {:?}) ==",
        title,
        snapshot.sort.key.label(),
        snapshot.sort.direction,
        session.search_term()
    );
    if snapshot.is_filtered_out() {
        println!("  No invoices match the search.");
    } else if snapshot.is_empty() {
        println!("  No invoices found. Add or scan one to start!");
    }
    for inv in &snapshot.rows {
        let style = inv.status.style();
        println!(
            "  {:<12} ${:>8} {} -> {}  [{:?}/{:?}] {}",
            inv.client,
            inv.amount.to_string(),
            inv.date,
            inv.due_date,
            style.tone,
            style.icon,
            inv.status
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("invoice_desk=debug")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => DeskConfig::from_yaml_file(&path)?,
        None => DeskConfig::default(),
    };
    let mut session = Session::new(config);
    print_view("Empty desk", &session);

    for _ in 0..3 {
        session.scan_action()?;
    }
    print_view("After three scans", &session);

    session.begin_create()?;
    session.field_change("client", "Acme")?;
    session.field_change("amount", "500")?;
    session.field_change("description", "Consulting")?;
    session.commit()?;

    session.set_sort(SortKey::Amount);
    print_view("Sorted by amount", &session);

    let acme_id = session
        .view()
        .into_iter()
        .find(|inv| inv.client == "Acme")
        .map(|inv| inv.id)
        .ok_or_else(|| anyhow::anyhow!("Acme invoice missing"))?;

    session.begin_edit(&acme_id)?;
    session.field_change("status", "paid")?;
    session.commit()?;

    session.set_search_term("acm");
    print_view("Search for 'acm'", &session);

    session.set_search_term("");
    session.begin_edit(&acme_id)?;
    let confirmation = session.request_delete()?;
    println!("\n{} yes", confirmation.prompt());
    session.confirm_delete()?;
    print_view("After delete", &session);

    Ok(())
}
