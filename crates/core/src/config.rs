//! Console configuration
//!
//! Who is signed in (for the "My Tickets" and "Department Tickets" tabs)
//! and the default page size of every table.
//!
//! ```
//! use wewin_core::ConsoleConfig;
//!
//! let config = ConsoleConfig::new().current_user("Priya").default_page_size(20);
//! assert_eq!(config.current_user, "Priya");
//! assert_eq!(config.current_department, "Presales");
//! ```

use crate::error::{ConsoleError, Result};
use serde::{Deserialize, Serialize};

/// Default number of rows per table page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Signed-in user context and table defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsoleConfig {
    /// Display name of the signed-in agent
    pub current_user: String,
    /// Department of the signed-in agent
    pub current_department: String,
    /// Rows per page for newly opened tables
    pub default_page_size: usize,
}

impl ConsoleConfig {
    /// Configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the signed-in user
    pub fn current_user(mut self, user: impl Into<String>) -> Self {
        self.current_user = user.into();
        self
    }

    /// Set the signed-in user's department
    pub fn current_department(mut self, department: impl Into<String>) -> Self {
        self.current_department = department.into();
        self
    }

    /// Set the default page size (at least 1)
    pub fn default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size.max(1);
        self
    }

    /// Parse from JSON; missing keys take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ConsoleConfig = serde_json::from_str(json)
            .map_err(|e| ConsoleError::invalid("config", e.to_string()))?;
        if config.default_page_size == 0 {
            return Err(ConsoleError::invalid(
                "defaultPageSize",
                "page size must be at least 1",
            ));
        }
        Ok(config)
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            current_user: "Upendra V".to_string(),
            current_department: "Presales".to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
