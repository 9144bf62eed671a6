//! Countries, states and cities
//!
//! The three screens are independent: the state and city forms select
//! countries and states from fixed option lists, not from the other
//! screens' stores.

use crate::options::{COUNTRY_OPTIONS, STATE_OPTIONS};
use serde::{Deserialize, Serialize};
use wewin_core::{FieldSpec, Record, RecordKey, RecordKind, Schema};

/// A country
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Country {
    /// Row key
    pub key: RecordKey,
    /// Display name
    pub country_name: String,
    /// Free text, "-" when blank in the seed data
    pub description: String,
}

/// A state within a country
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct State {
    /// Row key
    pub key: RecordKey,
    /// Country from [`COUNTRY_OPTIONS`]
    pub country_name: String,
    /// Display name
    pub state_name: String,
    /// Free text
    pub description: String,
}

/// A city within a state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct City {
    /// Row key
    pub key: RecordKey,
    /// Country from [`COUNTRY_OPTIONS`]
    pub country_name: String,
    /// State from [`STATE_OPTIONS`]
    pub state_name: String,
    /// Display name
    pub city_name: String,
    /// Free text
    pub description: String,
}

static COUNTRY_SCHEMA: Schema = Schema {
    name: "country",
    fields: &[
        FieldSpec::text("countryName", "Country Name").required("Please enter country name!"),
        FieldSpec::text_area("description", "Description"),
    ],
};

static STATE_SCHEMA: Schema = Schema {
    name: "state",
    fields: &[
        FieldSpec::select("countryName", "Country", COUNTRY_OPTIONS)
            .required("Please select a country!"),
        FieldSpec::text("stateName", "State Name").required("Please enter state name!"),
        FieldSpec::text_area("description", "Description"),
    ],
};

static CITY_SCHEMA: Schema = Schema {
    name: "city",
    fields: &[
        FieldSpec::select("countryName", "Country", COUNTRY_OPTIONS)
            .required("Please select a country!"),
        FieldSpec::select("stateName", "State", STATE_OPTIONS).required("Please select a state!"),
        FieldSpec::text("cityName", "City Name").required("Please enter city name!"),
        FieldSpec::text_area("description", "Description"),
    ],
};

impl Record for Country {
    const KIND: RecordKind = RecordKind::Country;

    fn key(&self) -> &RecordKey {
        &self.key
    }

    fn schema() -> &'static Schema {
        &COUNTRY_SCHEMA
    }
}

impl Record for State {
    const KIND: RecordKind = RecordKind::State;

    fn key(&self) -> &RecordKey {
        &self.key
    }

    fn schema() -> &'static Schema {
        &STATE_SCHEMA
    }
}

impl Record for City {
    const KIND: RecordKind = RecordKind::City;

    fn key(&self) -> &RecordKey {
        &self.key
    }

    fn schema() -> &'static Schema {
        &CITY_SCHEMA
    }
}

/// Seed rows for the countries screen
pub fn sample_countries() -> Vec<Country> {
    ["India", "Nepal", "Shri Lanka"]
        .iter()
        .enumerate()
        .map(|(i, name)| Country {
            key: RecordKey::new((i + 1).to_string()),
            country_name: name.to_string(),
            description: "-".to_string(),
        })
        .collect()
}

/// Seed rows for the states screen: the Indian states the city form offers
pub fn sample_states() -> Vec<State> {
    STATE_OPTIONS
        .iter()
        .enumerate()
        .map(|(i, name)| State {
            key: RecordKey::new((i + 1).to_string()),
            country_name: "India".to_string(),
            state_name: name.to_string(),
            description: "-".to_string(),
        })
        .collect()
}

/// Seed rows for the cities screen
pub fn sample_cities() -> Vec<City> {
    [
        ("1", "Madhya Pradesh", "Bhopal"),
        ("2", "Madhya Pradesh", "Gwalior"),
        ("3", "Himachal", "Shimla"),
    ]
    .iter()
    .map(|(key, state, city)| City {
        key: RecordKey::new(*key),
        country_name: "India".to_string(),
        state_name: state.to_string(),
        city_name: city.to_string(),
        description: "-".to_string(),
    })
    .collect()
}
