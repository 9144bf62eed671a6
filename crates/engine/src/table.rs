//! Generic local CRUD table
//!
//! Every master-data screen is the same thing: a store, a filter, a page
//! and an add/edit dialog. `CrudTable` is that screen, parameterized by
//! the record kind. The `on_*` methods are the hooks the presentation
//! layer calls; `view()` is what it renders.
//!
//! # Example
//!
//! ```ignore
//! let mut table = CrudTable::with_records(sample_dispositions(), 10)?;
//! table.on_search("query");
//! let page = table.view();
//! assert_eq!(page.total(), 2);
//! ```

use crate::filter::{Filter, TabPredicate};
use crate::page::{Page, PageRequest};
use crate::session::{EditSession, Submission};
use wewin_core::{ConsoleConfig, ConsoleError, FieldSet, Record, Result};
use wewin_storage::RecordStore;

/// One screen's records, filters, paging and dialog
#[derive(Debug, Clone)]
pub struct CrudTable<T: Record> {
    store: RecordStore<T>,
    filter: Filter<T>,
    paging: PageRequest,
    session: EditSession,
}

impl<T: Record> CrudTable<T> {
    /// Empty table with the given page size
    pub fn new(page_size: usize) -> Self {
        Self {
            store: RecordStore::new(),
            filter: Filter::new(),
            paging: PageRequest::first(page_size),
            session: EditSession::new(),
        }
    }

    /// Table seeded with `records`
    pub fn with_records(records: Vec<T>, page_size: usize) -> Result<Self> {
        let mut table = Self::new(page_size);
        table.store.seed(records)?;
        Ok(table)
    }

    /// Table seeded with `records`, paged per the console configuration
    pub fn from_config(records: Vec<T>, config: &ConsoleConfig) -> Result<Self> {
        Self::with_records(records, config.default_page_size)
    }

    // ========================================================================
    // Read accessors
    // ========================================================================

    /// The current page of filtered records plus the filtered total
    pub fn view(&self) -> Page<T> {
        let filtered = self.filter.apply(self.store.list());
        self.paging.slice(&filtered)
    }

    /// Every record passing the current filter, unpaged
    pub fn filtered(&self) -> Vec<&T> {
        self.filter.apply(self.store.list())
    }

    /// Number of records passing the current filter
    pub fn filtered_len(&self) -> usize {
        self.store
            .list()
            .iter()
            .filter(|r| self.filter.matches(r))
            .count()
    }

    /// The underlying store
    pub fn store(&self) -> &RecordStore<T> {
        &self.store
    }

    /// Current filter state
    pub fn filter(&self) -> &Filter<T> {
        &self.filter
    }

    /// Current page request
    pub fn paging(&self) -> PageRequest {
        self.paging
    }

    /// Add/edit dialog state
    pub fn session(&self) -> &EditSession {
        &self.session
    }

    // ========================================================================
    // Hooks
    // ========================================================================

    /// Append a record
    pub fn on_add(&mut self, fields: &FieldSet) -> Result<T> {
        self.store.add(fields)
    }

    /// Overwrite fields of an existing record
    pub fn on_edit(&mut self, key: &str, fields: &FieldSet) -> Result<T> {
        self.store.update(key, fields)
    }

    /// Delete a record, stepping back a page if the current one empties
    pub fn on_delete(&mut self, key: &str) -> Result<T> {
        let removed = self.store.remove(key)?;
        self.step_back_if_page_emptied();
        Ok(removed)
    }

    /// Replace the search term and go to the first page
    pub fn on_search(&mut self, term: impl Into<String>) {
        self.filter.set_search(term);
        self.rewind();
        tracing::debug!(
            target: "wewin::table",
            kind = %T::KIND,
            term = %self.filter.search(),
            "search changed"
        );
    }

    /// Select a tab (`None` for all records) and go to the first page
    pub fn on_tab_change(&mut self, tab: Option<TabPredicate<T>>) {
        tracing::debug!(
            target: "wewin::table",
            kind = %T::KIND,
            tab = tab.as_ref().map_or("all", |t| t.label()),
            "tab changed"
        );
        self.filter.set_tab(tab);
        self.rewind();
    }

    /// Apply a filter form and go to the first page
    pub fn on_filter_change(&mut self, fields: &FieldSet) -> Result<()> {
        self.filter.set_fields_from_form(fields)?;
        self.rewind();
        tracing::debug!(
            target: "wewin::table",
            kind = %T::KIND,
            active = self.filter.active_fields().count(),
            "filters applied"
        );
        Ok(())
    }

    /// Apply a free-text filter form (substring on every field) and go to
    /// the first page
    pub fn on_contains_filter(&mut self, fields: &FieldSet) -> Result<()> {
        self.filter.set_contains_from_form(fields)?;
        self.rewind();
        tracing::debug!(
            target: "wewin::table",
            kind = %T::KIND,
            active = self.filter.active_fields().count(),
            "contains filters applied"
        );
        Ok(())
    }

    /// Clear the filter form and go to the first page
    pub fn on_filter_clear(&mut self) {
        self.filter.clear_fields();
        self.rewind();
    }

    /// Move to another page, optionally changing the page size
    pub fn on_page_change(&mut self, page: usize, page_size: Option<usize>) {
        let size = page_size.unwrap_or(self.paging.page_size());
        self.paging = PageRequest::new(page, size);
    }

    // ========================================================================
    // Add / edit dialog
    // ========================================================================

    /// Open the add dialog
    pub fn open_create(&mut self) {
        self.session.open_create();
    }

    /// Open the edit dialog for a row
    pub fn open_edit(&mut self, key: &str) -> Result<()> {
        let record = self
            .store
            .get(key)
            .ok_or_else(|| ConsoleError::not_found(T::KIND, &key.into()))?;
        let fields = record.to_fields()?;
        self.session.open_edit(record.key().clone(), fields);
        Ok(())
    }

    /// Change a value in the open dialog
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.session.set_field(name, value);
    }

    /// Close the dialog without saving
    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// Validate and commit the open dialog
    ///
    /// On success the dialog closes and the written record is returned.
    /// On any error the dialog stays open; validation messages are
    /// attached to their fields.
    pub fn submit(&mut self) -> Result<T> {
        let submission = self.session.prepare_submit(T::schema())?;
        let committed = match &submission {
            Submission::Create(fields) => self.store.add(fields),
            Submission::Update(key, fields) => self.store.update(key.as_str(), fields),
        };
        match committed {
            Ok(record) => {
                self.session.close();
                Ok(record)
            }
            Err(err) => {
                if let Some(errors) = err.validation_errors() {
                    self.session.record_errors(errors.clone());
                }
                Err(err)
            }
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn rewind(&mut self) {
        self.paging = self.paging.with_page(1);
    }

    fn step_back_if_page_emptied(&mut self) {
        let page = self.paging.page();
        if page > 1 && self.filtered_len() <= self.paging.offset() {
            self.paging = self.paging.with_page(page - 1);
            tracing::debug!(
                target: "wewin::table",
                kind = %T::KIND,
                page = page - 1,
                "page emptied by delete, stepped back"
            );
        }
    }
}

impl<T: Record> Default for CrudTable<T> {
    fn default() -> Self {
        Self::new(wewin_core::config::DEFAULT_PAGE_SIZE)
    }
}
