//! Record store
//!
//! The authoritative in-memory list behind one screen.
//!
//! # Design
//!
//! - Vec<T>: insertion order is display order
//! - FxHashMap<RecordKey, usize>: O(1) key lookup, positions kept in sync
//! - KeyGenerator: time-derived keys for new records
//! - revision: bumped on every mutation so views know to re-render
//!
//! # Ownership
//!
//! A store belongs to exactly one screen and is mutated through `&mut self`.
//! There is no sharing between screens and therefore no locking.
//!
//! # Example
//!
//! ```ignore
//! let mut store = RecordStore::<Disposition>::new();
//! store.seed(sample_dispositions())?;
//!
//! let created = store.add(&FieldSet::new().with("ticketType", "Query"))?;
//! store.update(created.key().as_str(), &FieldSet::new().with("status", "Inactive"))?;
//! store.remove("2")?;
//! ```

use crate::keygen::KeyGenerator;
use rustc_hash::{FxHashMap, FxHashSet};
use wewin_core::{ConsoleError, FieldSet, Record, RecordKey, Result, ValidationErrors};

/// Ordered in-memory collection of one record kind
#[derive(Debug, Clone)]
pub struct RecordStore<T: Record> {
    /// Records in display order
    records: Vec<T>,
    /// Key -> position in `records`
    index: FxHashMap<RecordKey, usize>,
    /// Source of keys for added records
    keys: KeyGenerator,
    /// Mutation counter
    revision: u64,
}

impl<T: Record> RecordStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            index: FxHashMap::default(),
            keys: KeyGenerator::new(),
            revision: 0,
        }
    }

    /// Create a store holding `initial`
    pub fn with_records(initial: Vec<T>) -> Result<Self> {
        let mut store = Self::new();
        store.seed(initial)?;
        Ok(store)
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Current records in store order
    ///
    /// Always reflects the latest mutation; call it as often as needed.
    pub fn list(&self) -> &[T] {
        &self.records
    }

    /// Look up a record by key
    pub fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&pos| &self.records[pos])
    }

    /// True if a record with this key exists
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Mutation counter, incremented by every successful write
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Replace the contents with an initial collection
    ///
    /// This is where fetched data would enter. Keys must be non-empty and
    /// unique; on error the store is left untouched.
    pub fn seed(&mut self, initial: Vec<T>) -> Result<()> {
        let mut seen = FxHashSet::default();
        let mut errors = ValidationErrors::new();
        for record in &initial {
            let key = record.key();
            if key.is_empty() {
                errors.push("key", format!("{} record has an empty key", T::KIND));
            } else if !seen.insert(key.clone()) {
                errors.push("key", format!("duplicate {} key '{}'", T::KIND, key));
            }
        }
        errors.into_result()?;

        self.records = initial;
        self.reindex_from(0);
        self.bump();
        tracing::debug!(
            target: "wewin::store",
            kind = %T::KIND,
            total = self.records.len(),
            "store seeded"
        );
        Ok(())
    }

    /// Append a new record built from `fields` under a fresh key
    ///
    /// Required fields are the caller's responsibility; only unknown
    /// names and out-of-list select values are rejected here.
    pub fn add(&mut self, fields: &FieldSet) -> Result<T> {
        T::schema().check_shape(fields)?;
        let index = &self.index;
        let key = self.keys.next_key(|candidate| index.contains_key(candidate));
        let record = T::from_fields(key.clone(), fields)?;

        self.index.insert(key.clone(), self.records.len());
        self.records.push(record.clone());
        self.bump();
        tracing::debug!(
            target: "wewin::store",
            kind = %T::KIND,
            key = %key,
            total = self.records.len(),
            "record added"
        );
        Ok(record)
    }

    /// Overwrite the given fields of the record at `key`
    ///
    /// Fields not named in `patch` keep their values; the key never changes.
    pub fn update(&mut self, key: &str, patch: &FieldSet) -> Result<T> {
        let pos = self.position(key)?;
        T::schema().check_shape(patch)?;

        let current = &self.records[pos];
        let mut fields = current.to_fields()?;
        fields.merge(patch);
        let updated = T::from_fields(current.key().clone(), &fields)?;

        self.records[pos] = updated.clone();
        self.bump();
        tracing::debug!(
            target: "wewin::store",
            kind = %T::KIND,
            key = %key,
            changed = patch.len(),
            "record updated"
        );
        Ok(updated)
    }

    /// Delete the record at `key`, returning it
    pub fn remove(&mut self, key: &str) -> Result<T> {
        let pos = self.position(key)?;
        let removed = self.records.remove(pos);
        self.index.remove(key);
        self.reindex_from(pos);
        self.bump();
        tracing::debug!(
            target: "wewin::store",
            kind = %T::KIND,
            key = %key,
            total = self.records.len(),
            "record removed"
        );
        Ok(removed)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn position(&self, key: &str) -> Result<usize> {
        match self.index.get(key) {
            Some(&pos) => Ok(pos),
            None => {
                tracing::warn!(
                    target: "wewin::store",
                    kind = %T::KIND,
                    key = %key,
                    "record not found"
                );
                Err(ConsoleError::not_found(T::KIND, &RecordKey::new(key)))
            }
        }
    }

    fn reindex_from(&mut self, start: usize) {
        if start == 0 {
            self.index.clear();
        }
        for (pos, record) in self.records.iter().enumerate().skip(start) {
            self.index.insert(record.key().clone(), pos);
        }
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
