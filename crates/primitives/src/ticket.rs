//! Support tickets

use crate::options::{TicketStatus, TicketType};
use serde::{Deserialize, Serialize};
use wewin_core::{FieldSpec, Record, RecordKey, RecordKind, Schema};

/// One row of the ticket dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ticket {
    /// Row key
    pub key: RecordKey,
    /// Human-facing reference, e.g. "T-250829-01028"
    pub docket_no: String,
    /// Open task count
    pub task: String,
    /// Source share, e.g. "15%"
    pub source: String,
    /// Mail thread count
    pub mt: String,
    /// Category
    #[serde(rename = "type")]
    pub ticket_type: TicketType,
    /// Why the ticket was raised
    pub disposition: String,
    /// Refinement of the disposition
    pub sub_disposition: String,
    /// Owning department
    pub departments: String,
    /// Assignee
    pub assign_to: String,
    /// Progress
    pub status: TicketStatus,
    /// Contact person
    pub person: String,
    /// Where the ticket came from
    pub source_info: String,
}

static TICKET_SCHEMA: Schema = Schema {
    name: "ticket",
    fields: &[
        FieldSpec::text("docketNo", "Docket No."),
        FieldSpec::text("task", "Task"),
        FieldSpec::text("source", "Source"),
        FieldSpec::text("mt", "MT"),
        FieldSpec::select("type", "Ticket Type", TicketType::LABELS),
        FieldSpec::text("disposition", "Disposition").required("Please enter disposition!"),
        FieldSpec::text("subDisposition", "Sub Disposition")
            .required("Please enter sub disposition!"),
        FieldSpec::text("departments", "Departments"),
        FieldSpec::text("assignTo", "Assign To"),
        FieldSpec::select("status", "Status", TicketStatus::LABELS),
        FieldSpec::text("person", "Person"),
        FieldSpec::text("sourceInfo", "Source Info"),
    ],
};

impl Record for Ticket {
    const KIND: RecordKind = RecordKind::Ticket;

    fn key(&self) -> &RecordKey {
        &self.key
    }

    fn schema() -> &'static Schema {
        &TICKET_SCHEMA
    }
}

struct Seed {
    task: &'static str,
    source: &'static str,
    ticket_type: TicketType,
    disposition: &'static str,
    sub_disposition: &'static str,
    departments: &'static str,
    assign_to: Option<&'static str>,
    status: TicketStatus,
    person: &'static str,
    source_info: &'static str,
}

const SEEDS: [Seed; 8] = [
    Seed {
        task: "0",
        source: "15%",
        ticket_type: TicketType::Query,
        disposition: "Akash",
        sub_disposition: "Akash",
        departments: "Presales",
        assign_to: Some("Akash"),
        status: TicketStatus::New,
        person: "Himanshu",
        source_info: "Notification",
    },
    Seed {
        task: "0",
        source: "10%",
        ticket_type: TicketType::Query,
        disposition: "Ronit Davy",
        sub_disposition: "Ronit Davy",
        departments: "Support",
        assign_to: Some("Ronit Davy"),
        status: TicketStatus::Resolved,
        person: "Manis Shar...",
        source_info: "Test",
    },
    Seed {
        task: "0",
        source: "8%",
        ticket_type: TicketType::Query,
        disposition: "MoneyRefund",
        sub_disposition: "Not Refunded",
        departments: "South Region",
        assign_to: Some("Gopal Krishna"),
        status: TicketStatus::Inprogress,
        person: "Amit moh...",
        source_info: "Notification",
    },
    Seed {
        task: "0",
        source: "5%",
        ticket_type: TicketType::Complaint,
        disposition: "Ravi Teghadaur",
        sub_disposition: "Not Refunded",
        departments: "SouthRegion",
        assign_to: Some("Ravi Teghadaur"),
        status: TicketStatus::New,
        person: "manish pati...",
        source_info: "Notification",
    },
    Seed {
        task: "0",
        source: "5%",
        ticket_type: TicketType::Complaint,
        disposition: "MoneyRefund",
        sub_disposition: "Not Refunded",
        departments: "Presales",
        assign_to: Some("Piyar singh"),
        status: TicketStatus::Resolved,
        person: "Aditya",
        source_info: "Vinay Kum...",
    },
    Seed {
        task: "1",
        source: "20%",
        ticket_type: TicketType::Request,
        disposition: "Service",
        sub_disposition: "Callback",
        departments: "Presales",
        assign_to: None,
        status: TicketStatus::Inprogress,
        person: "Anjali",
        source_info: "Email",
    },
    Seed {
        task: "0",
        source: "12%",
        ticket_type: TicketType::Query,
        disposition: "Product Info",
        sub_disposition: "Features",
        departments: "Support",
        assign_to: None,
        status: TicketStatus::New,
        person: "Rohan",
        source_info: "Chat",
    },
    Seed {
        task: "1",
        source: "9%",
        ticket_type: TicketType::Complaint,
        disposition: "Billing",
        sub_disposition: "Overcharge",
        departments: "Presales",
        assign_to: Some("Priya"),
        status: TicketStatus::Resolved,
        person: "Karan",
        source_info: "Phone",
    },
];

/// First docket sequence number of the seed tickets
const FIRST_SEED_DOCKET: usize = 1028;

/// Seed rows for the ticket dashboard
///
/// Tickets without a fixed assignee in the seed go to `current_user`, so
/// "My Tickets" always has rows to show.
pub fn sample_tickets(current_user: &str) -> Vec<Ticket> {
    SEEDS
        .iter()
        .enumerate()
        .map(|(i, seed)| Ticket {
            key: RecordKey::new((i + 1).to_string()),
            docket_no: format!("T-250829-{:05}", FIRST_SEED_DOCKET + i),
            task: seed.task.to_string(),
            source: seed.source.to_string(),
            mt: seed.task.to_string(),
            ticket_type: seed.ticket_type,
            disposition: seed.disposition.to_string(),
            sub_disposition: seed.sub_disposition.to_string(),
            departments: seed.departments.to_string(),
            assign_to: seed.assign_to.unwrap_or(current_user).to_string(),
            status: seed.status,
            person: seed.person.to_string(),
            source_info: seed.source_info.to_string(),
        })
        .collect()
}
