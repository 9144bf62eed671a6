//! Minimal record kind for store tests

use serde::{Deserialize, Serialize};
use wewin_core::{FieldSpec, Record, RecordKey, RecordKind, Schema};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Country {
    pub key: RecordKey,
    pub country_name: String,
    pub description: String,
}

static COUNTRY_SCHEMA: Schema = Schema {
    name: "country",
    fields: &[
        FieldSpec::text("countryName", "Country Name").required("Please enter country name!"),
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

pub fn country(key: &str, name: &str) -> Country {
    Country {
        key: RecordKey::new(key),
        country_name: name.to_string(),
        description: "-".to_string(),
    }
}
