//! Concrete record kinds of the We Win console
//!
//! This crate parameterizes the generic engine with the console's screens:
//! - Accounts
//! - Geography: countries, states, cities
//! - Dispositions, sub-dispositions and priority mappings
//! - Tickets, with the dashboard tabs and status counts
//! - Auth forms (validation only)
//!
//! Every screen owns its own store; nothing here is shared or global.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod account;
pub mod auth_forms;
pub mod dashboard;
pub mod disposition;
pub mod geography;
pub mod options;
pub mod screens;
pub mod ticket;

pub use account::Account;
pub use auth_forms::AuthView;
pub use dashboard::{StatusCounts, TicketDashboard, TicketTab};
pub use disposition::{Disposition, PriorityMapping, SubDisposition};
pub use geography::{City, Country, State};
pub use options::{ActiveStatus, TicketStatus, TicketType};
pub use ticket::Ticket;
