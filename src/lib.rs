//! We Win console core
//!
//! Client-side state model of the We Win support console: per-screen
//! record stores, the filter pipeline (tab, field filters, search, paging)
//! and the add/edit dialog lifecycle, with the console's concrete screens
//! on top.
//!
//! # Example
//!
//! ```
//! use wewin::screens::disposition_table;
//! use wewin::ConsoleConfig;
//!
//! let mut table = disposition_table(&ConsoleConfig::default()).unwrap();
//! table.on_search("query");
//! let page = table.view();
//! assert_eq!(page.total(), 2);
//! assert_eq!(page.summary(), "1-2 of 2 items");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod types;

pub use types::*;

/// Sample-seeded tables for each master-data screen
pub use wewin_primitives::screens;

/// Option lists behind select fields
pub use wewin_primitives::options;

/// Auth form schemas
pub use wewin_primitives::auth_forms;

/// Sample seed data
pub mod samples {
    pub use wewin_primitives::account::sample_accounts;
    pub use wewin_primitives::disposition::{
        sample_dispositions, sample_priority_mappings, sample_sub_dispositions,
    };
    pub use wewin_primitives::geography::{sample_cities, sample_countries, sample_states};
    pub use wewin_primitives::ticket::sample_tickets;
}
