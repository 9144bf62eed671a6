//! Console Comprehensive Test Suite
//!
//! End-to-end checks of the console core through the public `wewin` API.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Record store invariants (key uniqueness, update, delete)
//! - **Tier 2**: Filter pipeline (stage conjunction, pagination bounds)
//! - **Tier 3**: Edit session lifecycle through a table
//! - **Tier 4**: Screen scenarios on the sample data
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test console_comprehensive
//! ```

// Test modules
mod test_utils;

// Tier 1: Record Store Invariants
mod tier1_store_invariants;

// Tier 2: Filter Pipeline
mod tier2_filter_pipeline;

// Tier 3: Edit Session Lifecycle
mod tier3_edit_session;

// Tier 4: Screen Scenarios
mod tier4_screen_scenarios;
