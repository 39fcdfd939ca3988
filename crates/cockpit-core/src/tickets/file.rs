//! [`TicketSource`] backed by a helpdesk JSON export.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use jiff::Timestamp;
use log::debug;
use serde::Deserialize;

use super::{TicketSource, matches_closed_query};
use crate::{
    error::{CockpitError, Result},
    models::{ClosedTicketQuery, Ticket, ticket::default_priority},
};

/// State reported when the helpdesk omits one.
const UNKNOWN_STATE: &str = "unknown";

/// Accepted document shapes: a plain ticket array, or the helpdesk search
/// envelope `{"assets": {"Ticket": {"<id>": {...}}}}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum TicketDocument {
    List(Vec<RawTicket>),
    Search { assets: SearchAssets },
}

#[derive(Deserialize)]
struct SearchAssets {
    #[serde(rename = "Ticket", default)]
    tickets: BTreeMap<String, RawTicket>,
}

#[derive(Deserialize)]
struct RawTicket {
    id: u64,
    title: String,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    created_at: Timestamp,
    updated_at: Timestamp,
    #[serde(default)]
    close_at: Option<Timestamp>,
    #[serde(default)]
    priority: Option<String>,
}

impl From<RawTicket> for Ticket {
    fn from(raw: RawTicket) -> Self {
        Ticket {
            id: raw.id,
            title: raw.title,
            state: raw.state.unwrap_or_else(|| UNKNOWN_STATE.to_string()),
            tags: raw.tags.unwrap_or_default(),
            created_at: raw.created_at,
            updated_at: raw.updated_at,
            close_at: raw.close_at,
            priority: raw.priority.unwrap_or_else(default_priority),
        }
    }
}

/// Parses a ticket document. Tickets come back in ascending id order.
pub fn parse_tickets(json: &str) -> Result<Vec<Ticket>> {
    let raw = match serde_json::from_str::<TicketDocument>(json)? {
        TicketDocument::List(tickets) => tickets,
        TicketDocument::Search { assets } => assets.tickets.into_values().collect(),
    };
    let mut tickets: Vec<Ticket> = raw.into_iter().map(Ticket::from).collect();
    tickets.sort_by_key(|t| t.id);
    Ok(tickets)
}

/// Ticket export on disk. The file is re-read on every query so that a
/// refreshed export is picked up without restarting.
#[derive(Debug, Clone)]
pub struct TicketFile {
    path: PathBuf,
}

impl TicketFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses every ticket in the export.
    pub fn load(&self) -> Result<Vec<Ticket>> {
        let json = fs::read_to_string(&self.path).map_err(|e| CockpitError::FileSystem {
            path: self.path.clone(),
            source: e,
        })?;
        let tickets = parse_tickets(&json).map_err(|e| CockpitError::TicketSource {
            message: format!("{}: {e}", self.path.display()),
        })?;
        debug!("Loaded {} ticket(s) from {}", tickets.len(), self.path.display());
        Ok(tickets)
    }
}

impl TicketSource for TicketFile {
    fn project_tickets(&self, tag: &str) -> Result<Vec<Ticket>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|ticket| ticket.has_tag(tag))
            .collect())
    }

    fn closed_tickets(&self, query: &ClosedTicketQuery) -> Result<Vec<Ticket>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|ticket| matches_closed_query(ticket, query))
            .collect())
    }

    fn ticket(&self, id: u64) -> Result<Option<Ticket>> {
        Ok(self.load()?.into_iter().find(|ticket| ticket.id == id))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use jiff::civil::date;

    use super::*;
    use crate::models::StatsRange;

    const SEARCH_ENVELOPE: &str = r##"{
        "tickets": [12, 3],
        "assets": {
            "Ticket": {
                "12": {
                    "id": 12,
                    "title": "Rollout laptops",
                    "state": "open",
                    "tags": ["#Projet", "hardware"],
                    "created_at": "2025-01-02T08:00:00.000Z",
                    "updated_at": "2025-01-05T08:00:00.000Z",
                    "close_at": null
                },
                "3": {
                    "id": 3,
                    "title": "Reset password",
                    "state": "closed",
                    "created_at": "2025-01-01T08:00:00Z",
                    "updated_at": "2025-01-01T09:00:00Z",
                    "close_at": "2025-01-01T09:00:00Z",
                    "priority": "2 normal"
                }
            }
        }
    }"##;

    fn query(exclude_tag: Option<&str>) -> ClosedTicketQuery {
        ClosedTicketQuery {
            range: StatsRange::new(date(2025, 1, 1), date(2025, 1, 31)).unwrap(),
            exclude_tag: exclude_tag.map(String::from),
        }
    }

    #[test]
    fn test_parse_search_envelope_sorted_by_id() {
        let tickets = parse_tickets(SEARCH_ENVELOPE).unwrap();
        assert_eq!(tickets.len(), 2);
        assert_eq!(tickets[0].id, 3);
        assert_eq!(tickets[0].priority, "2 normal");
        assert!(tickets[0].tags.is_empty());
        assert_eq!(tickets[1].id, 12);
        assert_eq!(tickets[1].tags, vec!["#Projet", "hardware"]);
        assert!(tickets[1].close_at.is_none());
    }

    #[test]
    fn test_parse_plain_list_with_defaults() {
        let tickets = parse_tickets(
            r#"[{"id": 1, "title": "No state", "created_at": "2025-01-01T00:00:00Z",
                 "updated_at": "2025-01-01T00:00:00Z"}]"#,
        )
        .unwrap();
        assert_eq!(tickets[0].state, UNKNOWN_STATE);
        assert_eq!(tickets[0].priority, "normal");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_tickets(r#"{"unexpected": true}"#).is_err());
    }

    #[test]
    fn test_file_source_queries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SEARCH_ENVELOPE.as_bytes()).unwrap();
        let source = TicketFile::new(file.path());

        let projects = source.project_tickets("#Projet").unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, 12);

        let closed = source.closed_tickets(&query(Some("#Projet"))).unwrap();
        assert_eq!(closed.len(), 1);
        assert_eq!(closed[0].id, 3);

        assert!(source.ticket(12).unwrap().is_some());
        assert!(source.ticket(99).unwrap().is_none());
    }

    #[test]
    fn test_missing_file_is_a_file_system_error() {
        let source = TicketFile::new("/nonexistent/cockpit/tickets.json");
        assert!(matches!(
            source.load(),
            Err(CockpitError::FileSystem { .. })
        ));
    }
}
