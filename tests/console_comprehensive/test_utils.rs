//! Shared helpers for the console suite

use wewin::{ConsoleConfig, FieldSet, Record};

/// Route `tracing` output through the test harness; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Default signed-in context ("Upendra V", Presales, 10 rows per page)
pub fn config() -> ConsoleConfig {
    ConsoleConfig::default()
}

/// Keys of `records` in order
pub fn keys<T: Record>(records: &[T]) -> Vec<String> {
    records.iter().map(|r| r.key().to_string()).collect()
}

/// A filled-in disposition form
pub fn disposition_form(name: &str) -> FieldSet {
    FieldSet::new()
        .with("ticketType", "Query")
        .with("dispositionName", name)
        .with("sourceType", "EMAIL")
        .with("status", "Active")
}
