//! Dispositions, sub-dispositions and priority mappings
//!
//! A disposition classifies why a ticket was raised; a sub-disposition
//! refines it; a priority mapping assigns a priority to a
//! (type, disposition, sub-disposition) combination.

use crate::options::{
    ActiveStatus, TicketType, DISPOSITION_OPTIONS, MAPPING_STATUS, PRIORITY_OPTIONS,
    SOURCE_TYPES, SUB_DISPOSITION_OPTIONS,
};
use serde::{Deserialize, Serialize};
use wewin_core::{FieldSpec, Record, RecordKey, RecordKind, Schema};

/// A disposition row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Disposition {
    /// Row key
    pub key: RecordKey,
    /// Ticket type this disposition applies to
    pub ticket_type: TicketType,
    /// Display name
    pub disposition_name: String,
    /// Channel from [`SOURCE_TYPES`]
    pub source_type: String,
    /// Short code
    pub disposition_acronym: String,
    /// Free text
    pub description: String,
    /// Active or retired
    pub status: ActiveStatus,
}

/// A sub-disposition row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubDisposition {
    /// Row key
    pub key: RecordKey,
    /// Ticket type this sub-disposition applies to
    pub ticket_type: TicketType,
    /// Parent disposition name
    pub disposition_name: String,
    /// Display name
    pub sub_disposition_name: String,
    /// Channel from [`SOURCE_TYPES`]
    pub source_type: String,
    /// Short code
    pub sub_disposition_acronym: String,
    /// Free text
    pub description: String,
    /// "mapped" or "unmapped"
    pub mapping_status: String,
    /// Active or retired
    pub status: ActiveStatus,
}

/// A priority mapping row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriorityMapping {
    /// Row key
    pub key: RecordKey,
    /// Ticket type
    pub ticket_type: TicketType,
    /// Disposition from [`DISPOSITION_OPTIONS`]
    pub disposition_name: String,
    /// Sub-disposition from [`SUB_DISPOSITION_OPTIONS`]
    pub sub_disposition_name: String,
    /// Priority from [`PRIORITY_OPTIONS`]
    pub priority: String,
    /// Active or retired
    pub status: ActiveStatus,
}

static DISPOSITION_SCHEMA: Schema = Schema {
    name: "disposition",
    fields: &[
        FieldSpec::select("ticketType", "Ticket Type", TicketType::LABELS)
            .required("Please select ticket type!"),
        FieldSpec::text("dispositionName", "Disposition Name")
            .required("Please enter disposition name!"),
        FieldSpec::select("sourceType", "Source Type", SOURCE_TYPES)
            .required("Please select source type!"),
        FieldSpec::text("dispositionAcronym", "Disposition Acronym"),
        FieldSpec::text_area("description", "Description"),
        FieldSpec::select("status", "Status", ActiveStatus::LABELS)
            .required("Please select status!"),
    ],
};

static SUB_DISPOSITION_SCHEMA: Schema = Schema {
    name: "sub disposition",
    fields: &[
        FieldSpec::select("ticketType", "Ticket Type", TicketType::LABELS)
            .required("Please select ticket type!"),
        FieldSpec::text("dispositionName", "Disposition Name")
            .required("Please enter disposition name!"),
        FieldSpec::text("subDispositionName", "Sub Disposition Name")
            .required("Please enter sub disposition name!"),
        FieldSpec::select("sourceType", "Source Type", SOURCE_TYPES)
            .required("Please select source type!"),
        FieldSpec::text("subDispositionAcronym", "Sub Disposition Acronym"),
        FieldSpec::text_area("description", "Description"),
        FieldSpec::select("mappingStatus", "Mapping Status", MAPPING_STATUS),
        FieldSpec::select("status", "Status", ActiveStatus::LABELS)
            .required("Please select status!"),
    ],
};

static PRIORITY_MAPPING_SCHEMA: Schema = Schema {
    name: "priority mapping",
    fields: &[
        FieldSpec::select("ticketType", "Ticket Type", TicketType::LABELS)
            .required("Please select ticket type!"),
        FieldSpec::select("dispositionName", "Disposition", DISPOSITION_OPTIONS)
            .required("Please select disposition!"),
        FieldSpec::select("subDispositionName", "Sub Disposition", SUB_DISPOSITION_OPTIONS)
            .required("Please select sub disposition!"),
        FieldSpec::select("priority", "Priority", PRIORITY_OPTIONS)
            .required("Please select priority!"),
        FieldSpec::select("status", "Status", ActiveStatus::LABELS)
            .required("Please select status!"),
    ],
};

impl Record for Disposition {
    const KIND: RecordKind = RecordKind::Disposition;

    fn key(&self) -> &RecordKey {
        &self.key
    }

    fn schema() -> &'static Schema {
        &DISPOSITION_SCHEMA
    }
}

impl Record for SubDisposition {
    const KIND: RecordKind = RecordKind::SubDisposition;

    fn key(&self) -> &RecordKey {
        &self.key
    }

    fn schema() -> &'static Schema {
        &SUB_DISPOSITION_SCHEMA
    }
}

impl Record for PriorityMapping {
    const KIND: RecordKind = RecordKind::PriorityMapping;

    fn key(&self) -> &RecordKey {
        &self.key
    }

    fn schema() -> &'static Schema {
        &PRIORITY_MAPPING_SCHEMA
    }
}

// (key, type, disposition, sub-disposition, status) shared by the three seeds
const SEED_ROWS: [(&str, TicketType, &str, &str, ActiveStatus); 5] = [
    ("1", TicketType::Query, "RefundStatus", "NotInitiated", ActiveStatus::Active),
    ("2", TicketType::Suggestion, "Aarav Guar", "Sub disp 1", ActiveStatus::Inactive),
    ("3", TicketType::Suggestion, "MoneyRefund", "Not Refunded", ActiveStatus::Active),
    ("4", TicketType::Query, "Guari Khan", "NotInitiated", ActiveStatus::Active),
    ("5", TicketType::Complaint, "Ramesh Yadav", "NotInitiated", ActiveStatus::Active),
];

/// Seed rows for the dispositions screen
pub fn sample_dispositions() -> Vec<Disposition> {
    let details = [
        ("-", "Refund status for customer queries"),
        ("AG", "Customer suggestion from Aarav Guar"),
        ("MR", "Process for money refunds"),
        ("GK", "Specific query from Guari Khan"),
        ("RY", "Complaint registered by Ramesh Yadav"),
    ];
    SEED_ROWS
        .iter()
        .zip(details)
        .map(|((key, ticket_type, name, _, status), (acronym, description))| Disposition {
            key: RecordKey::new(*key),
            ticket_type: *ticket_type,
            disposition_name: name.to_string(),
            source_type: "TICKET".to_string(),
            disposition_acronym: acronym.to_string(),
            description: description.to_string(),
            status: *status,
        })
        .collect()
}

/// Seed rows for the sub-dispositions screen
pub fn sample_sub_dispositions() -> Vec<SubDisposition> {
    SEED_ROWS
        .iter()
        .map(|(key, ticket_type, name, sub, status)| SubDisposition {
            key: RecordKey::new(*key),
            ticket_type: *ticket_type,
            disposition_name: name.to_string(),
            sub_disposition_name: sub.to_string(),
            source_type: "TICKET".to_string(),
            sub_disposition_acronym: "-".to_string(),
            description: "-".to_string(),
            mapping_status: if *key == "2" { "unmapped" } else { "mapped" }.to_string(),
            status: *status,
        })
        .collect()
}

/// Seed rows for the priority mapping screen
pub fn sample_priority_mappings() -> Vec<PriorityMapping> {
    SEED_ROWS
        .iter()
        .map(|(key, ticket_type, name, sub, status)| PriorityMapping {
            key: RecordKey::new(*key),
            ticket_type: *ticket_type,
            disposition_name: name.to_string(),
            sub_disposition_name: sub.to_string(),
            priority: "Semi Critical".to_string(),
            status: *status,
        })
        .collect()
}
