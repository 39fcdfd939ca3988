//! Timeline, statistics and ticket operations for the Dashboard.

use jiff::civil::Date;
use log::{debug, warn};
use tokio::task;

use super::Dashboard;
use crate::{
    engine::{aggregate_daily_counts, build_timeline, stack_items},
    error::{CockpitError, Result},
    models::{ClosedTicketQuery, StatsRange, Ticket, TicketStats, TimelineItem},
    params::{TicketId, TicketStatsQuery, TimelineOptions},
    tickets::TicketSource,
};

impl Dashboard {
    /// Contract milestones and notice bars followed by project tickets, as of
    /// `today`.
    ///
    /// An unreadable ticket source leaves the tickets out rather than failing
    /// the whole timeline.
    pub async fn timeline(&self, options: &TimelineOptions, today: Date) -> Result<Vec<TimelineItem>> {
        let contracts = self.list_all_contracts().await?;
        let tag = self.project_tag.clone();
        let tickets = degrade(
            "project tickets",
            self.with_tickets(move |source| source.project_tickets(&tag))
                .await,
        );

        let items = build_timeline(&contracts, &tickets, today);
        debug!(
            "Timeline for {today}: {} contract(s), {} ticket(s), {} item(s)",
            contracts.len(),
            tickets.len(),
            items.len()
        );

        Ok(if options.stack { stack_items(items) } else { items })
    }

    /// Daily histogram of closed tickets.
    ///
    /// The range defaults to the 30 days ending `today`. Project tickets are
    /// left out unless `include_projects` is set. An unreadable ticket source
    /// yields an empty histogram.
    ///
    /// # Errors
    ///
    /// `CockpitError::InvalidInput` for malformed dates or a start after the
    /// end.
    pub async fn ticket_stats(&self, query: &TicketStatsQuery, today: Date) -> Result<TicketStats> {
        let (start, end) = query.bounds()?;
        let range = StatsRange::resolve(start, end, today)?;
        let closed_query = ClosedTicketQuery {
            range,
            exclude_tag: (!query.include_projects).then(|| self.project_tag.clone()),
        };

        let closed = degrade(
            "closed tickets",
            self.with_tickets(move |source| source.closed_tickets(&closed_query))
                .await,
        );

        Ok(TicketStats {
            range,
            counts: aggregate_daily_counts(&closed),
        })
    }

    /// Tickets carrying the project tag.
    pub async fn project_tickets(&self) -> Result<Vec<Ticket>> {
        let tag = self.project_tag.clone();
        self.with_tickets(move |source| source.project_tickets(&tag))
            .await
    }

    /// A single ticket. `None` when unknown or when no ticket source is
    /// configured.
    pub async fn ticket(&self, params: &TicketId) -> Result<Option<Ticket>> {
        let Some(source) = self.tickets.clone() else {
            return Ok(None);
        };
        let id = params.id;

        task::spawn_blocking(move || source.ticket(id))
            .await
            .map_err(CockpitError::join)?
    }

    /// Runs a ticket query on a blocking task. Without a ticket source there
    /// are no tickets.
    async fn with_tickets<F>(&self, query: F) -> Result<Vec<Ticket>>
    where
        F: FnOnce(&dyn TicketSource) -> Result<Vec<Ticket>> + Send + 'static,
    {
        let Some(source) = self.tickets.clone() else {
            return Ok(Vec::new());
        };

        task::spawn_blocking(move || query(source.as_ref()))
            .await
            .map_err(CockpitError::join)?
    }
}

fn degrade(what: &str, result: Result<Vec<Ticket>>) -> Vec<Ticket> {
    result.unwrap_or_else(|e| {
        warn!("Could not load {what}, continuing without them: {e}");
        Vec::new()
    })
}
