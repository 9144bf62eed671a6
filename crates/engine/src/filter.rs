//! Composable filter pipeline
//!
//! Narrows a screen's records to what is displayed. Stages run in a
//! fixed order:
//!
//! 1. Tab predicate (e.g. "My Tickets"), if one is active
//! 2. Structured field predicates, all of which must hold; blank values
//!    are inactive
//! 3. Free-text search: any value of the record (key included) contains
//!    the term, case-insensitively; an empty term passes everything
//!
//! Filtering never touches the store and is recomputed on every call.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use wewin_core::{FieldSet, Record, Result, ValidationErrors};

/// How a structured filter compares a field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMatch {
    /// Case-insensitive substring
    Contains(String),
    /// Exact, case-sensitive equality (select fields)
    Exact(String),
}

impl FieldMatch {
    /// The expected value
    pub fn value(&self) -> &str {
        match self {
            FieldMatch::Contains(v) | FieldMatch::Exact(v) => v,
        }
    }

    /// A blank expected value imposes no constraint
    pub fn is_active(&self) -> bool {
        !self.value().is_empty()
    }

    /// Test an actual field value
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            FieldMatch::Contains(expected) => actual
                .to_lowercase()
                .contains(&expected.to_lowercase()),
            FieldMatch::Exact(expected) => actual == expected,
        }
    }
}

/// Categorical selector mapped to its own predicate
pub struct TabPredicate<T> {
    label: String,
    test: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> TabPredicate<T> {
    /// Create a tab predicate
    pub fn new(label: impl Into<String>, test: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            test: Arc::new(test),
        }
    }

    /// Tab label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// True if the record belongs under this tab
    pub fn admits(&self, record: &T) -> bool {
        (self.test)(record)
    }
}

impl<T> Clone for TabPredicate<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            test: Arc::clone(&self.test),
        }
    }
}

impl<T> fmt::Debug for TabPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabPredicate")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Active filter state of one table
pub struct Filter<T> {
    tab: Option<TabPredicate<T>>,
    fields: BTreeMap<String, FieldMatch>,
    search: String,
}

impl<T: Record> Filter<T> {
    /// No tab, no field filters, empty search
    pub fn new() -> Self {
        Self {
            tab: None,
            fields: BTreeMap::new(),
            search: String::new(),
        }
    }

    /// Builder: set the tab predicate
    pub fn with_tab(mut self, tab: TabPredicate<T>) -> Self {
        self.tab = Some(tab);
        self
    }

    /// Builder: add a structured field predicate
    pub fn with_field(mut self, name: impl Into<String>, matcher: FieldMatch) -> Self {
        self.fields.insert(name.into(), matcher);
        self
    }

    /// Builder: set the search term
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    /// Replace the tab predicate (`None` for "all")
    pub fn set_tab(&mut self, tab: Option<TabPredicate<T>>) {
        self.tab = tab;
    }

    /// Replace the search term
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Replace all structured predicates from a filter form
    ///
    /// Select fields compare exactly, everything else by substring.
    /// Names outside the record's schema are rejected and leave the
    /// current predicates in place.
    pub fn set_fields_from_form(&mut self, form: &FieldSet) -> Result<()> {
        self.replace_fields(form, true)
    }

    /// Like [`set_fields_from_form`](Self::set_fields_from_form), but every
    /// field compares by substring, select fields included
    pub fn set_contains_from_form(&mut self, form: &FieldSet) -> Result<()> {
        self.replace_fields(form, false)
    }

    fn replace_fields(&mut self, form: &FieldSet, select_exact: bool) -> Result<()> {
        let schema = T::schema();
        let mut errors = ValidationErrors::new();
        let mut fields = BTreeMap::new();
        for (name, value) in form.iter() {
            match schema.field(name) {
                Some(spec) if select_exact && spec.is_select() => {
                    fields.insert(name.to_string(), FieldMatch::Exact(value.to_string()));
                }
                Some(_) => {
                    fields.insert(name.to_string(), FieldMatch::Contains(value.to_string()));
                }
                None => errors.push(name, format!("cannot filter {} by unknown field", T::KIND)),
            }
        }
        errors.into_result()?;
        self.fields = fields;
        Ok(())
    }

    /// Drop every structured predicate
    pub fn clear_fields(&mut self) {
        self.fields.clear();
    }

    /// Active tab, if any
    pub fn tab(&self) -> Option<&TabPredicate<T>> {
        self.tab.as_ref()
    }

    /// Current search term
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Structured predicates that currently constrain results
    pub fn active_fields(&self) -> impl Iterator<Item = (&str, &FieldMatch)> {
        self.fields
            .iter()
            .filter(|(_, m)| m.is_active())
            .map(|(name, m)| (name.as_str(), m))
    }

    /// True if nothing would be filtered out
    pub fn is_identity(&self) -> bool {
        self.tab.is_none() && self.search.is_empty() && self.active_fields().next().is_none()
    }

    /// Stage 1: tab
    pub fn admits_tab(&self, record: &T) -> bool {
        self.tab.as_ref().map_or(true, |tab| tab.admits(record))
    }

    /// Stage 2: every active field predicate
    pub fn admits_fields(&self, record: &T) -> bool {
        self.active_fields().all(|(name, matcher)| {
            record
                .field_value(name)
                .is_some_and(|actual| matcher.matches(&actual))
        })
    }

    /// Stage 3: free-text search over every value
    pub fn admits_search(&self, record: &T) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        record
            .search_values()
            .iter()
            .any(|value| value.to_lowercase().contains(&term))
    }

    /// True if the record passes all three stages
    pub fn matches(&self, record: &T) -> bool {
        self.admits_tab(record) && self.admits_fields(record) && self.admits_search(record)
    }

    /// Run the pipeline over `records`, preserving their order
    pub fn apply<'a>(&self, records: &'a [T]) -> Vec<&'a T> {
        records
            .iter()
            .filter(|r| self.admits_tab(r))
            .filter(|r| self.admits_fields(r))
            .filter(|r| self.admits_search(r))
            .collect()
    }
}

impl<T: Record> Default for Filter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Filter<T> {
    fn clone(&self) -> Self {
        Self {
            tab: self.tab.clone(),
            fields: self.fields.clone(),
            search: self.search.clone(),
        }
    }
}

impl<T> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("tab", &self.tab)
            .field("fields", &self.fields)
            .field("search", &self.search)
            .finish()
    }
}
