//! Small record kind for engine tests

use serde::{Deserialize, Serialize};
use wewin_core::{FieldSpec, Record, RecordKey, RecordKind, Schema};

pub const KINDS: &[&str] = &["Query", "Complaint", "Request"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub key: RecordKey,
    pub kind: String,
    pub owner: String,
    pub note: String,
}

static ITEM_SCHEMA: Schema = Schema {
    name: "item",
    fields: &[
        FieldSpec::select("kind", "Kind", KINDS).required("Please select kind!"),
        FieldSpec::text("owner", "Owner").required("Please enter owner!"),
        FieldSpec::text_area("note", "Note"),
    ],
};

impl Record for Item {
    const KIND: RecordKind = RecordKind::Ticket;

    fn key(&self) -> &RecordKey {
        &self.key
    }

    fn schema() -> &'static Schema {
        &ITEM_SCHEMA
    }
}

pub fn item(key: &str, kind: &str, owner: &str, note: &str) -> Item {
    Item {
        key: RecordKey::new(key),
        kind: kind.to_string(),
        owner: owner.to_string(),
        note: note.to_string(),
    }
}

/// Twelve items: kinds rotate Query/Complaint/Request, owners alternate
pub fn sample_items() -> Vec<Item> {
    (1..=12)
        .map(|i| {
            let kind = KINDS[(i - 1) % KINDS.len()];
            let owner = if i % 2 == 0 { "Upendra V" } else { "Akash" };
            item(&i.to_string(), kind, owner, &format!("note {}", i))
        })
        .collect()
}

pub fn keys(items: &[Item]) -> Vec<&str> {
    items.iter().map(|i| i.key.as_str()).collect()
}
