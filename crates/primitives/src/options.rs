//! Option lists behind the console's select fields
//!
//! The three enumerations that carry meaning (record status, ticket type,
//! ticket status) are Rust enums; the rest are plain string lists that
//! schemas reference directly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use wewin_core::ConsoleError;

macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant in option-list order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Labels as they appear in the select field
            pub const LABELS: &'static [&'static str] = &[$($label),+];

            /// Label of this variant
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ConsoleError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(ConsoleError::invalid(
                        $field,
                        format!("'{}' is not a valid option", other),
                    )),
                }
            }
        }
    };
}

labeled_enum! {
    /// Whether a master-data row is in use
    ActiveStatus, "status" {
        /// In use (default for new rows)
        #[default]
        Active => "Active",
        /// Retired
        Inactive => "Inactive",
    }
}

labeled_enum! {
    /// Category of a ticket
    TicketType, "ticketType" {
        /// Question from a customer
        #[default]
        Query => "Query",
        /// Improvement idea
        Suggestion => "Suggestion",
        /// Something went wrong
        Complaint => "Complaint",
        /// Service request
        Request => "Request",
        /// General feedback
        Feedback => "Feedback",
    }
}

labeled_enum! {
    /// Progress of a ticket
    TicketStatus, "status" {
        /// Not yet picked up
        #[default]
        New => "New",
        /// Closed out
        Resolved => "Resolved",
        /// Being worked on
        Inprogress => "Inprogress",
    }
}

/// Channels a disposition applies to
pub const SOURCE_TYPES: &[&str] = &["TICKET", "EMAIL", "PHONE", "CHAT", "SOCIAL"];

/// Internal account managers
pub const ACCOUNT_MANAGERS: &[&str] = &[
    "Aarav Guar",
    "Guari Khan",
    "Ramesh Yadav",
    "Priya Sharma",
    "Amit Kumar",
];

/// Countries offered by the state and city forms
pub const COUNTRY_OPTIONS: &[&str] = &["India", "Nepal", "Shri Lanka", "Bangladesh"];

/// States offered by the city form
pub const STATE_OPTIONS: &[&str] = &[
    "Madhya Pradesh",
    "Uttar Pradesh",
    "Himachal",
    "Bihar",
    "Gujarat",
];

/// Dispositions offered by the priority mapping form
pub const DISPOSITION_OPTIONS: &[&str] = &[
    "RefundStatus",
    "MoneyRefund",
    "Aarav Guar",
    "Guari Khan",
    "Ramesh Yadav",
];

/// Sub-dispositions offered by the priority mapping form
pub const SUB_DISPOSITION_OPTIONS: &[&str] = &[
    "NotInitiated",
    "Sub disp 1",
    "Not Refunded",
    "Pending",
    "Completed",
];

/// Ticket priorities
pub const PRIORITY_OPTIONS: &[&str] = &["Critical", "Semi Critical", "High", "Medium", "Low"];

/// Whether a sub-disposition is mapped to a priority
pub const MAPPING_STATUS: &[&str] = &["mapped", "unmapped"];
