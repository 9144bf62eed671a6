//! Field schemas and the form validator
//!
//! Each record kind (and each auth form) declares its fields once, as a
//! `static Schema`. A single validator applies the rules the forms used to
//! express ad hoc: required, email shape, minimum length, option lists.
//!
//! # Example
//!
//! ```
//! use wewin_core::{FieldSet, FieldSpec, Schema};
//!
//! static COUNTRY: Schema = Schema {
//!     name: "country",
//!     fields: &[
//!         FieldSpec::text("countryName", "Country Name").required("Please enter country name!"),
//!         FieldSpec::text_area("description", "Description"),
//!     ],
//! };
//!
//! let errors = COUNTRY.validate(&FieldSet::new()).unwrap_err();
//! assert_eq!(
//!     errors.validation_errors().unwrap().message_for("countryName"),
//!     Some("Please enter country name!")
//! );
//! ```

use crate::error::{Result, ValidationErrors};
use crate::fields::{FieldSet, KEY_FIELD};

/// Input shape of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text
    Text,
    /// Multi-line free text
    TextArea,
    /// Email address; malformed values are rejected
    Email,
    /// Phone number, free text
    Phone,
    /// Password, free text
    Password,
    /// Single choice from a fixed option list
    Select(&'static [&'static str]),
    /// Tick box; only the value `"true"` counts as ticked
    Checkbox,
}

/// Declaration of one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name (camelCase)
    pub name: &'static str,
    /// Label shown next to the input
    pub label: &'static str,
    /// Input shape
    pub kind: FieldKind,
    /// Message shown when a required field is blank; `None` if optional
    pub required: Option<&'static str>,
    /// Message shown when the value is malformed (email shape, option list)
    pub invalid: Option<&'static str>,
    /// Minimum length in characters, with its message
    pub min_len: Option<(usize, &'static str)>,
}

impl FieldSpec {
    const fn base(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        FieldSpec {
            name,
            label,
            kind,
            required: None,
            invalid: None,
            min_len: None,
        }
    }

    /// Free text field
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldKind::Text)
    }

    /// Multi-line text field
    pub const fn text_area(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldKind::TextArea)
    }

    /// Email field
    pub const fn email(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldKind::Email)
    }

    /// Phone field
    pub const fn phone(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldKind::Phone)
    }

    /// Password field
    pub const fn password(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldKind::Password)
    }

    /// Tick box field
    pub const fn checkbox(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldKind::Checkbox)
    }

    /// Select field over a fixed option list
    pub const fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self::base(name, label, FieldKind::Select(options))
    }

    /// Mark the field required
    pub const fn required(mut self, message: &'static str) -> Self {
        self.required = Some(message);
        self
    }

    /// Message for malformed values
    pub const fn invalid(mut self, message: &'static str) -> Self {
        self.invalid = Some(message);
        self
    }

    /// Require at least `len` characters
    pub const fn min_len(mut self, len: usize, message: &'static str) -> Self {
        self.min_len = Some((len, message));
        self
    }

    /// Options of a select field
    pub fn options(&self) -> Option<&'static [&'static str]> {
        match self.kind {
            FieldKind::Select(options) => Some(options),
            _ => None,
        }
    }

    /// Select fields filter by exact value; text fields by substring
    pub fn is_select(&self) -> bool {
        matches!(self.kind, FieldKind::Select(_))
    }

    /// Shape check for a non-blank value: option membership only
    fn check_option(&self, value: &str) -> Option<String> {
        let options = self.options()?;
        if options.contains(&value) {
            None
        } else {
            Some(
                self.invalid
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("'{}' is not a valid {}", value, self.label)),
            )
        }
    }

    /// Full check of one value, first failure wins
    fn check(&self, value: Option<&str>) -> Option<String> {
        let value = value.map(str::trim).unwrap_or("");
        if self.kind == FieldKind::Checkbox && value != "true" {
            return self.required.map(str::to_string);
        }
        if value.is_empty() {
            return self.required.map(str::to_string);
        }
        if let Some(message) = self.check_option(value) {
            return Some(message);
        }
        if self.kind == FieldKind::Email && !is_email(value) {
            return Some(
                self.invalid
                    .unwrap_or("Please enter a valid email!")
                    .to_string(),
            );
        }
        if let Some((len, message)) = self.min_len {
            if value.chars().count() < len {
                return Some(message.to_string());
            }
        }
        None
    }
}

/// Statically declared fields of one record kind or form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// Name used in messages
    pub name: &'static str,
    /// Fields in form order
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in form order
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    /// Fields that must be filled
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> + '_ {
        self.fields.iter().filter(|f| f.required.is_some())
    }

    /// Structural check used by stores on every write
    ///
    /// Rejects unknown field names and select values outside the option
    /// list. Blank and missing values pass: required-ness is the form's job.
    pub fn check_shape(&self, fields: &FieldSet) -> Result<()> {
        let mut errors = ValidationErrors::new();
        for (name, value) in fields.iter() {
            if name == KEY_FIELD {
                errors.push(name, "key cannot be set through form fields");
                continue;
            }
            match self.field(name) {
                None => errors.push(name, format!("unknown {} field", self.name)),
                Some(spec) => {
                    let value = value.trim();
                    if !value.is_empty() {
                        if let Some(message) = spec.check_option(value) {
                            errors.push(name, message);
                        }
                    }
                }
            }
        }
        errors.into_result()
    }

    /// Full form validation, collecting one message per failing field
    pub fn validate(&self, fields: &FieldSet) -> Result<()> {
        let mut errors = ValidationErrors::new();
        for spec in self.fields {
            if let Some(message) = spec.check(fields.get(spec.name)) {
                errors.push(spec.name, message);
            }
        }
        for (name, _) in fields.iter() {
            if self.field(name).is_none() {
                errors.push(name, format!("unknown {} field", self.name));
            }
        }
        errors.into_result()
    }
}

/// Loose email shape: `local@domain.tld`, no whitespace
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}
