//! Closed-ticket histogram.

use std::collections::BTreeMap;

use jiff::civil::Date;

use crate::models::{DailyCount, Ticket};

/// Counts tickets per UTC closure day.
///
/// The input is expected to be already scoped by the ticket source (range
/// and tag exclusion are not re-checked). Tickets without `close_at` are
/// skipped. The result is sparse: days with no closures have no entry.
///
/// ```rust
/// use cockpit_core::engine::stats::aggregate_daily_counts;
/// # use cockpit_core::models::Ticket;
/// # use jiff::Timestamp;
/// # fn closed(id: u64, at: &str) -> Ticket {
/// #     let ts: Timestamp = at.parse().unwrap();
/// #     Ticket { id, title: format!("#{id}"), state: "closed".into(), tags: vec![],
/// #              created_at: ts, updated_at: ts, close_at: Some(ts), priority: "normal".into() }
/// # }
/// let tickets = vec![
///     closed(1, "2025-01-01T09:00:00Z"),
///     closed(2, "2025-01-01T17:30:00Z"),
///     closed(3, "2025-01-03T08:00:00Z"),
/// ];
/// let counts = aggregate_daily_counts(&tickets);
/// assert_eq!(counts.len(), 2);
/// assert_eq!(counts[0].date.to_string(), "2025-01-01");
/// assert_eq!(counts[0].count, 2);
/// assert_eq!(counts[1].date.to_string(), "2025-01-03");
/// assert_eq!(counts[1].count, 1);
/// ```
pub fn aggregate_daily_counts(closed_tickets: &[Ticket]) -> Vec<DailyCount> {
    let mut per_day: BTreeMap<Date, u32> = BTreeMap::new();
    for date in closed_tickets.iter().filter_map(Ticket::close_date) {
        *per_day.entry(date).or_insert(0) += 1;
    }
    per_day
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}
