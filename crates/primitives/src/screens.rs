//! Sample-seeded tables, one per master-data screen
//!
//! Each call builds a fresh, independently owned table. Two tables of the
//! same kind never share records.

use crate::account::{sample_accounts, Account};
use crate::disposition::{
    sample_dispositions, sample_priority_mappings, sample_sub_dispositions, Disposition,
    PriorityMapping, SubDisposition,
};
use crate::geography::{sample_cities, sample_countries, sample_states, City, Country, State};
use wewin_core::{ConsoleConfig, Result};
use wewin_engine::CrudTable;

/// Accounts screen
pub fn account_table(config: &ConsoleConfig) -> Result<CrudTable<Account>> {
    CrudTable::from_config(sample_accounts(), config)
}

/// Countries screen
pub fn country_table(config: &ConsoleConfig) -> Result<CrudTable<Country>> {
    CrudTable::from_config(sample_countries(), config)
}

/// States screen
pub fn state_table(config: &ConsoleConfig) -> Result<CrudTable<State>> {
    CrudTable::from_config(sample_states(), config)
}

/// Cities screen
pub fn city_table(config: &ConsoleConfig) -> Result<CrudTable<City>> {
    CrudTable::from_config(sample_cities(), config)
}

/// Dispositions screen
pub fn disposition_table(config: &ConsoleConfig) -> Result<CrudTable<Disposition>> {
    CrudTable::from_config(sample_dispositions(), config)
}

/// Sub-dispositions screen
pub fn sub_disposition_table(config: &ConsoleConfig) -> Result<CrudTable<SubDisposition>> {
    CrudTable::from_config(sample_sub_dispositions(), config)
}

/// Priority mapping screen
pub fn priority_mapping_table(config: &ConsoleConfig) -> Result<CrudTable<PriorityMapping>> {
    CrudTable::from_config(sample_priority_mappings(), config)
}
