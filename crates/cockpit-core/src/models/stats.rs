//! Closed-ticket statistics types.

use jiff::{ToSpan, civil::Date};
use serde::{Deserialize, Serialize};

use crate::error::{CockpitError, Result};

/// Length of the default statistics window, ending today.
pub const DEFAULT_STATS_WINDOW_DAYS: i64 = 30;

/// Number of tickets closed on one calendar day. Never zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyCount {
    /// Calendar day, serialized as `YYYY-MM-DD`
    pub date: Date,

    /// Number of tickets closed that day
    pub count: u32,
}

/// Inclusive calendar range applied to `close_at`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsRange {
    pub start: Date,
    pub end: Date,
}

impl StatsRange {
    /// Creates a range, rejecting `start > end`.
    pub fn new(start: Date, end: Date) -> Result<Self> {
        if start > end {
            return Err(CockpitError::invalid_input("start_date")
                .with_reason(format!("{start} is after end date {end}")));
        }
        Ok(Self { start, end })
    }

    /// The default window: from `today - 30 days` through `today`.
    pub fn trailing(today: Date) -> Self {
        Self {
            start: today.saturating_sub(DEFAULT_STATS_WINDOW_DAYS.days()),
            end: today,
        }
    }

    /// Fills in missing bounds. The end defaults to `today`, the start to
    /// 30 days before the end.
    pub fn resolve(start: Option<Date>, end: Option<Date>, today: Date) -> Result<Self> {
        let end = end.unwrap_or(today);
        let start = start.unwrap_or_else(|| Self::trailing(end).start);
        Self::new(start, end)
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Histogram of closed tickets over a range.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TicketStats {
    pub range: StatsRange,

    /// Sparse, ascending by date
    pub counts: Vec<DailyCount>,
}

impl TicketStats {
    /// Total number of closed tickets over the range.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|c| u64::from(c.count)).sum()
    }

    /// Largest single-day count, 0 when empty.
    pub fn peak(&self) -> u32 {
        self.counts.iter().map(|c| c.count).max().unwrap_or(0)
    }
}
