//! Engine layer for the We Win console
//!
//! - filter: tab, structured-field and free-text predicates
//! - page: page requests and page slices
//! - session: the add/edit dialog state machine
//! - table: `CrudTable`, one generic screen combining all of the above
//!   with a `RecordStore`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod filter;
pub mod page;
pub mod session;
pub mod table;

#[cfg(test)]
pub(crate) mod test_support;

pub use filter::{FieldMatch, Filter, TabPredicate};
pub use page::{Page, PageRequest};
pub use session::{EditSession, SessionState, Submission};
pub use table::CrudTable;
