//! Public types for the We Win console core.
//!
//! This module re-exports types from the internal crates with a flat public interface.

// ============================================================================
// Records and fields
// ============================================================================

// Keys and record kinds
pub use wewin_core::{RecordKey, RecordKind};

// Form value bags and the record contract
pub use wewin_core::{FieldSet, Record};

// Schemas
pub use wewin_core::{FieldKind, FieldSpec, Schema};

// ============================================================================
// Errors and configuration
// ============================================================================

pub use wewin_core::{ConsoleConfig, ConsoleError, FieldError, Result, ValidationErrors};

// ============================================================================
// Store, filters and tables
// ============================================================================

pub use wewin_storage::{KeyGenerator, RecordStore};

pub use wewin_engine::{
    CrudTable, EditSession, FieldMatch, Filter, Page, PageRequest, SessionState, Submission,
    TabPredicate,
};

// ============================================================================
// Console screens
// ============================================================================

pub use wewin_primitives::{
    Account, ActiveStatus, AuthView, City, Country, Disposition, PriorityMapping, State,
    StatusCounts, SubDisposition, Ticket, TicketDashboard, TicketStatus, TicketTab, TicketType,
};
