//! Core types for the We Win console
//!
//! This crate defines the vocabulary shared by every screen:
//! - RecordKey / RecordKind: identity of a row and the screen it belongs to
//! - FieldSet: the form value bag (field name -> string value)
//! - Record: trait implemented by every concrete record kind
//! - Schema: statically declared field rules and the single validator
//! - ConsoleError: validation and not-found errors
//! - ConsoleConfig: current user context and paging defaults

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod fields;
pub mod key;
pub mod schema;

pub use config::ConsoleConfig;
pub use error::{ConsoleError, FieldError, Result, ValidationErrors};
pub use fields::{FieldSet, Record};
pub use key::{RecordKey, RecordKind};
pub use schema::{FieldKind, FieldSpec, Schema};
