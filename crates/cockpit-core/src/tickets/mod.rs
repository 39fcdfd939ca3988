//! Ticket-fetch collaborator.
//!
//! The helpdesk is external to this crate. [`TicketSource`] is the contract the
//! dashboard consumes; [`TicketFile`] implements it over a JSON export on
//! disk. Range narrowing and tag exclusion happen here, in the fetch layer,
//! so the stats engine can take its input as already scoped.

use crate::{
    error::Result,
    models::{ClosedTicketQuery, Ticket},
};

pub mod file;

pub use file::TicketFile;

/// Read-only access to helpdesk tickets.
pub trait TicketSource: Send + Sync {
    /// Tickets carrying `tag`.
    fn project_tickets(&self, tag: &str) -> Result<Vec<Ticket>>;

    /// Closed tickets whose UTC closure day is inside `query.range`, minus
    /// those carrying `query.exclude_tag`.
    fn closed_tickets(&self, query: &ClosedTicketQuery) -> Result<Vec<Ticket>>;

    /// A single ticket by id.
    fn ticket(&self, id: u64) -> Result<Option<Ticket>>;
}

/// Whether `ticket` satisfies a closed-ticket query.
pub fn matches_closed_query(ticket: &Ticket, query: &ClosedTicketQuery) -> bool {
    let in_range = ticket
        .close_date()
        .is_some_and(|day| query.range.contains(day));
    let excluded = query
        .exclude_tag
        .as_deref()
        .is_some_and(|tag| ticket.has_tag(tag));
    ticket.is_closed() && in_range && !excluded
}
