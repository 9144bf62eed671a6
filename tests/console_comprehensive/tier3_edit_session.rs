//! Tier 3: Edit session lifecycle through a table

use crate::test_utils::*;
use wewin::screens::{account_table, disposition_table};
use wewin::{ActiveStatus, SessionState, TicketType};

#[test]
fn test_create_submit_appends_and_closes() {
    init_tracing();
    let mut table = disposition_table(&config()).unwrap();
    table.open_create();
    assert_eq!(table.session().state(), &SessionState::Creating);

    for (name, value) in disposition_form("Callback").iter() {
        table.set_field(name, value);
    }
    let created = table.submit().unwrap();

    assert_eq!(table.session().state(), &SessionState::Closed);
    assert_eq!(table.store().len(), 6);
    assert_eq!(created.ticket_type, TicketType::Query);
    assert_eq!(created.status, ActiveStatus::Active);
    assert_eq!(table.store().list().last(), Some(&created));
}

#[test]
fn test_edit_submit_replaces_fields_and_keeps_key() {
    let mut table = disposition_table(&config()).unwrap();
    table.open_edit("2").unwrap();
    table.set_field("status", "Active");
    table.set_field("dispositionAcronym", "AGR");
    let updated = table.submit().unwrap();

    assert_eq!(updated.key, "2");
    assert_eq!(updated.status, ActiveStatus::Active);
    assert_eq!(updated.disposition_acronym, "AGR");
    assert_eq!(updated.disposition_name, "Aarav Guar");
    assert_eq!(keys(&table.store().list()[1..2]), vec!["2"]);
}

#[test]
fn test_invalid_submit_keeps_dialog_and_store() {
    let mut table = account_table(&config()).unwrap();
    table.open_create();
    table.set_field("accountName", "Acme");
    table.set_field("accountEmail", "acme");

    let err = table.submit().unwrap_err();
    assert!(err.validation_errors().is_some());
    assert!(table.session().is_open());
    assert_eq!(
        table.session().field_error("accountEmail"),
        Some("Please enter a valid email!")
    );
    assert_eq!(
        table.session().field_error("accountPhone"),
        Some("Please input account phone!")
    );
    assert_eq!(table.store().len(), 5);

    // Fix the form and resubmit
    table.set_field("accountEmail", "ops@acme.in");
    table.set_field("accountPhone", "90000 00000");
    table.set_field("internalAccountManager", "Priya Sharma");
    assert!(table.submit().is_ok());
    assert_eq!(table.store().len(), 6);
}

#[test]
fn test_cancel_discards_draft() {
    let mut table = account_table(&config()).unwrap();
    table.open_edit("1").unwrap();
    table.set_field("accountName", "Someone else");
    table.cancel();

    assert!(!table.session().is_open());
    assert_eq!(table.store().get("1").unwrap().account_name, "Rajesh sharma");
}

#[test]
fn test_submit_without_dialog_is_rejected() {
    let mut table = account_table(&config()).unwrap();
    assert!(table.submit().is_err());
    assert_eq!(table.store().len(), 5);
}

#[test]
fn test_edit_of_deleted_row_reports_not_found() {
    let mut table = account_table(&config()).unwrap();
    table.open_edit("4").unwrap();
    table.on_delete("4").unwrap();
    let err = table.submit().unwrap_err();
    assert!(err.is_not_found());
    assert!(table.session().is_open());
}
