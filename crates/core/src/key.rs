//! Record identity
//!
//! A `RecordKey` is opaque to everything but the store that minted it.
//! A `RecordKind` names which screen's store a record lives in.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique, stable identifier of a record within one store.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordKey(String);

impl RecordKey {
    /// Wrap an externally supplied key (sample data, fetched rows).
    pub fn new(key: impl Into<String>) -> Self {
        RecordKey(key.into())
    }

    /// Borrow the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the empty key, which no store accepts.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordKey {
    fn from(s: &str) -> Self {
        RecordKey(s.to_string())
    }
}

impl From<String> for RecordKey {
    fn from(s: String) -> Self {
        RecordKey(s)
    }
}

impl Borrow<str> for RecordKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for RecordKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RecordKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The kinds of records the console manages, one per screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// Master - Account Info
    Account,
    /// Geography: countries
    Country,
    /// Geography: states
    State,
    /// Geography: cities
    City,
    /// Master - Disposition
    Disposition,
    /// Master - Sub Disposition
    SubDisposition,
    /// Priority mapping per disposition / sub disposition
    PriorityMapping,
    /// Dashboard tickets
    Ticket,
}

impl RecordKind {
    /// Human readable name used in log lines and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::Account => "account",
            RecordKind::Country => "country",
            RecordKind::State => "state",
            RecordKind::City => "city",
            RecordKind::Disposition => "disposition",
            RecordKind::SubDisposition => "sub disposition",
            RecordKind::PriorityMapping => "priority mapping",
            RecordKind::Ticket => "ticket",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
