//! Helpdesk ticket model.

use jiff::{Timestamp, civil::Date, tz::TimeZone};
use serde::{Deserialize, Serialize};

/// Priority assumed when the helpdesk omits one.
pub const DEFAULT_PRIORITY: &str = "normal";

/// State name the helpdesk uses for closed tickets.
pub const CLOSED_STATE: &str = "closed";

/// A helpdesk ticket. Read-only to this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    /// Helpdesk ticket number
    pub id: u64,

    /// Ticket title
    pub title: String,

    /// Free-text state (e.g. "open", "closed")
    pub state: String,

    /// Tags in the order the helpdesk returned them
    #[serde(default)]
    pub tags: Vec<String>,

    pub created_at: Timestamp,

    pub updated_at: Timestamp,

    /// Closure timestamp, absent while the ticket is open
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_at: Option<Timestamp>,

    /// Free-text priority
    #[serde(default = "default_priority")]
    pub priority: String,
}

pub(crate) fn default_priority() -> String {
    DEFAULT_PRIORITY.to_string()
}

impl Ticket {
    /// Whether the ticket carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether the helpdesk reports the ticket as closed.
    pub fn is_closed(&self) -> bool {
        self.state.eq_ignore_ascii_case(CLOSED_STATE)
    }

    /// Calendar day (UTC) of creation.
    pub fn created_date(&self) -> Date {
        utc_date(self.created_at)
    }

    /// Calendar day (UTC) of closure, if closed.
    pub fn close_date(&self) -> Option<Date> {
        self.close_at.map(utc_date)
    }
}

/// Truncates a timestamp to its UTC calendar date.
pub fn utc_date(timestamp: Timestamp) -> Date {
    timestamp.to_zoned(TimeZone::UTC).date()
}
