//! Edit session: what the add/edit dialog is doing right now
//!
//! ```text
//! Closed --open_create--> Creating        (blank fields)
//! Closed --open_edit----> Editing(key)    (fields copied from the row)
//! Creating | Editing --cancel-----------> Closed (draft discarded)
//! Creating | Editing --submit ok + commit-> Closed
//! Creating | Editing --submit invalid---> unchanged, field errors set
//! ```
//!
//! Committing the submission is the table's job; the session only
//! validates and hands back what should be written.

use wewin_core::{ConsoleError, FieldSet, RecordKey, Result, Schema, ValidationErrors};

/// Which dialog, if any, is open
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No dialog
    #[default]
    Closed,
    /// Add dialog
    Creating,
    /// Edit dialog for the record with this key
    Editing(RecordKey),
}

/// Validated dialog contents, ready to commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Add a record with these fields
    Create(FieldSet),
    /// Replace the editable fields of this record
    Update(RecordKey, FieldSet),
}

/// Add/edit dialog state with its draft values and field errors
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    state: SessionState,
    fields: FieldSet,
    errors: ValidationErrors,
}

impl EditSession {
    /// A closed session
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// True unless closed
    pub fn is_open(&self) -> bool {
        self.state != SessionState::Closed
    }

    /// Draft values
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Errors from the last failed submit
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Message to show next to `field`, if any
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors.message_for(field)
    }

    /// Open the add dialog with blank values
    ///
    /// Any open dialog is replaced; the UI only offers one at a time.
    pub fn open_create(&mut self) {
        self.reset(SessionState::Creating, FieldSet::new());
        tracing::debug!(target: "wewin::session", "add dialog opened");
    }

    /// Open the edit dialog pre-filled with a row's values
    pub fn open_edit(&mut self, key: RecordKey, fields: FieldSet) {
        tracing::debug!(target: "wewin::session", key = %key, "edit dialog opened");
        self.reset(SessionState::Editing(key), fields);
    }

    /// Change one draft value; ignored while closed
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        if !self.is_open() {
            return;
        }
        let name = name.into();
        self.clear_error(&name);
        self.fields.set(name, value);
    }

    /// Discard the draft and close
    pub fn cancel(&mut self) {
        if self.is_open() {
            tracing::debug!(target: "wewin::session", "dialog cancelled");
        }
        self.close();
    }

    /// Validate the draft against `schema`
    ///
    /// On failure the session stays open and remembers the field errors.
    /// On success the errors are cleared, but the session stays open
    /// until the caller commits and calls [`close`](Self::close).
    pub fn prepare_submit(&mut self, schema: &Schema) -> Result<Submission> {
        let submission = match &self.state {
            SessionState::Closed => {
                return Err(ConsoleError::invalid("form", "no dialog is open"));
            }
            SessionState::Creating => Submission::Create(self.fields.clone()),
            SessionState::Editing(key) => Submission::Update(key.clone(), self.fields.clone()),
        };
        if let Err(err) = schema.validate(&self.fields) {
            if let Some(errors) = err.validation_errors() {
                self.record_errors(errors.clone());
            }
            return Err(err);
        }
        self.errors = ValidationErrors::new();
        Ok(submission)
    }

    /// Surface errors that came back from committing the submission
    pub fn record_errors(&mut self, errors: ValidationErrors) {
        tracing::debug!(
            target: "wewin::session",
            count = errors.len(),
            "dialog has field errors"
        );
        self.errors = errors;
    }

    /// Close after a successful commit
    pub fn close(&mut self) {
        self.reset(SessionState::Closed, FieldSet::new());
    }

    fn reset(&mut self, state: SessionState, fields: FieldSet) {
        self.state = state;
        self.fields = fields;
        self.errors = ValidationErrors::new();
    }

    fn clear_error(&mut self, field: &str) {
        if self.errors.message_for(field).is_none() {
            return;
        }
        let mut remaining = ValidationErrors::new();
        for e in self.errors.iter().filter(|e| e.field != field) {
            remaining.push(e.field.clone(), e.message.clone());
        }
        self.errors = remaining;
    }
}
