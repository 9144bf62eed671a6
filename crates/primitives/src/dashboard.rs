//! Ticket dashboard
//!
//! The ticket list is a [`CrudTable<Ticket>`] with three extras: tabs that
//! narrow to the signed-in agent or their department, an advanced filter
//! form where every field matches by substring, and status counts for the
//! stats cards.

use crate::options::TicketStatus;
use crate::ticket::{sample_tickets, Ticket};
use chrono::{Local, NaiveDate};
use std::fmt;
use std::str::FromStr;
use wewin_core::{ConsoleConfig, ConsoleError, FieldSet, Record, Result};
use wewin_engine::{CrudTable, Page, TabPredicate};

/// Tabs above the ticket list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TicketTab {
    /// Every ticket
    #[default]
    AllTickets,
    /// Tickets assigned to the signed-in agent
    MyTickets,
    /// Tickets of the signed-in agent's department
    DepartmentTickets,
}

impl TicketTab {
    /// Tabs in display order
    pub const ALL: [TicketTab; 3] = [
        TicketTab::AllTickets,
        TicketTab::MyTickets,
        TicketTab::DepartmentTickets,
    ];

    /// Tab caption
    pub fn label(&self) -> &'static str {
        match self {
            TicketTab::AllTickets => "All Tickets",
            TicketTab::MyTickets => "My Tickets",
            TicketTab::DepartmentTickets => "Department Tickets",
        }
    }

    /// Predicate for this tab, `None` for "All Tickets"
    pub fn predicate(&self, config: &ConsoleConfig) -> Option<TabPredicate<Ticket>> {
        match self {
            TicketTab::AllTickets => None,
            TicketTab::MyTickets => {
                let user = config.current_user.clone();
                Some(TabPredicate::new(self.label(), move |t: &Ticket| {
                    t.assign_to == user
                }))
            }
            TicketTab::DepartmentTickets => {
                let department = config.current_department.clone();
                Some(TabPredicate::new(self.label(), move |t: &Ticket| {
                    t.departments == department
                }))
            }
        }
    }
}

impl fmt::Display for TicketTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TicketTab {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self> {
        TicketTab::ALL
            .into_iter()
            .find(|tab| tab.label() == s)
            .ok_or_else(|| ConsoleError::invalid("tab", format!("unknown ticket tab '{}'", s)))
    }
}

/// Ticket totals per status, over every ticket regardless of filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    /// Status "New"
    pub new: usize,
    /// Status "Inprogress"
    pub inprogress: usize,
    /// Status "Resolved"
    pub resolved: usize,
    /// All tickets
    pub total: usize,
}

impl StatusCounts {
    /// Count for one status
    pub fn get(&self, status: TicketStatus) -> usize {
        match status {
            TicketStatus::New => self.new,
            TicketStatus::Inprogress => self.inprogress,
            TicketStatus::Resolved => self.resolved,
        }
    }
}

/// The ticket list screen
#[derive(Debug, Clone)]
pub struct TicketDashboard {
    table: CrudTable<Ticket>,
    config: ConsoleConfig,
    tab: TicketTab,
}

impl TicketDashboard {
    /// Dashboard seeded with the sample tickets
    pub fn new(config: ConsoleConfig) -> Result<Self> {
        let tickets = sample_tickets(&config.current_user);
        Self::with_tickets(tickets, config)
    }

    /// Dashboard seeded with `tickets`
    pub fn with_tickets(tickets: Vec<Ticket>, config: ConsoleConfig) -> Result<Self> {
        Ok(Self {
            table: CrudTable::from_config(tickets, &config)?,
            config,
            tab: TicketTab::AllTickets,
        })
    }

    /// Signed-in user context
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Selected tab
    pub fn tab(&self) -> TicketTab {
        self.tab
    }

    /// Underlying table
    pub fn table(&self) -> &CrudTable<Ticket> {
        &self.table
    }

    /// The current page of tickets
    pub fn view(&self) -> Page<Ticket> {
        self.table.view()
    }

    /// Move to `page`, optionally with a new page size
    pub fn on_page_change(&mut self, page: usize, page_size: Option<usize>) {
        self.table.on_page_change(page, page_size);
    }

    /// Delete a ticket
    pub fn on_delete(&mut self, key: &str) -> Result<Ticket> {
        self.table.on_delete(key)
    }

    /// Open the edit dialog on an empty form
    pub fn open_create(&mut self) {
        self.table.open_create();
    }

    /// Open the edit dialog for a ticket
    pub fn open_edit(&mut self, key: &str) -> Result<()> {
        self.table.open_edit(key)
    }

    /// Change a value in the open dialog
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.table.set_field(name, value);
    }

    /// Close the dialog without saving
    pub fn cancel(&mut self) {
        self.table.cancel();
    }

    /// Save the open dialog
    pub fn submit(&mut self) -> Result<Ticket> {
        self.table.submit()
    }

    /// Select a tab
    ///
    /// The only way the table's tab predicate changes, so [`tab`](Self::tab)
    /// always names the predicate in force.
    pub fn on_tab_change(&mut self, tab: TicketTab) {
        self.tab = tab;
        self.table.on_tab_change(tab.predicate(&self.config));
    }

    /// Select a tab by its caption
    pub fn on_tab_label(&mut self, label: &str) -> Result<()> {
        let tab = label.parse()?;
        self.on_tab_change(tab);
        Ok(())
    }

    /// Replace the search term
    pub fn on_search(&mut self, term: impl Into<String>) {
        self.table.on_search(term);
    }

    /// Apply the advanced filter form; every field matches by substring
    pub fn apply_advanced_filter(&mut self, form: &FieldSet) -> Result<()> {
        self.table.on_contains_filter(form)
    }

    /// Reset the advanced filter form
    pub fn clear_advanced_filter(&mut self) {
        self.table.on_filter_clear();
    }

    /// Validate and append a ticket from the create form
    ///
    /// A blank docket number is filled in for today's date.
    pub fn create_ticket(&mut self, form: &FieldSet) -> Result<Ticket> {
        self.create_ticket_on(form, Local::now().date_naive())
    }

    /// Like [`create_ticket`](Self::create_ticket), dating the docket `date`
    pub fn create_ticket_on(&mut self, form: &FieldSet, date: NaiveDate) -> Result<Ticket> {
        Ticket::schema().validate(form)?;
        let mut fields = form.clone();
        if !fields.is_filled("docketNo") {
            fields.set("docketNo", self.next_docket_no(date)?);
        }
        let ticket = self.table.on_add(&fields)?;
        tracing::info!(
            target: "wewin::table",
            key = %ticket.key,
            docket = %ticket.docket_no,
            "ticket created"
        );
        Ok(ticket)
    }

    /// Next docket number: `T-<yymmdd>-<sequence>`, the sequence one past
    /// the highest already issued
    ///
    /// Fails once the sequence space is exhausted.
    pub fn next_docket_no(&self, date: NaiveDate) -> Result<String> {
        let last = self
            .table
            .store()
            .list()
            .iter()
            .filter_map(|t| docket_sequence(&t.docket_no))
            .max()
            .unwrap_or(0);
        let next = last.checked_add(1).ok_or_else(|| {
            ConsoleError::invalid("docketNo", "No docket numbers left to issue")
        })?;
        Ok(format!("T-{}-{:05}", date.format("%y%m%d"), next))
    }

    /// Counts per status over every ticket
    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for ticket in self.table.store().list() {
            match ticket.status {
                TicketStatus::New => counts.new += 1,
                TicketStatus::Inprogress => counts.inprogress += 1,
                TicketStatus::Resolved => counts.resolved += 1,
            }
            counts.total += 1;
        }
        counts
    }
}

fn docket_sequence(docket: &str) -> Option<u64> {
    docket.rsplit('-').next()?.parse().ok()
}
