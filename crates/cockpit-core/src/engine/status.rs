//! Contract status engine.
//!
//! Derives a contract's lifecycle status and display color from its end date,
//! its notice period and an explicit `today`. Every function here is pure and
//! total: no clock reads, no I/O, no errors.

use jiff::{Span, civil::Date};
use serde::Serialize;

use crate::models::{Contract, ContractStatus, TimelineColor};

/// In-notice contracts with at most this many days left are shown red.
pub const URGENT_NOTICE_DAYS: i64 = 30;

/// Everything derived from a contract's dates on a given day.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct StatusReport {
    pub status: ContractStatus,
    pub color: TimelineColor,
    pub notice_start_date: Date,
    /// Signed; negative once the contract has expired
    pub days_until_end: i64,
    pub is_expired: bool,
    pub is_in_notice_period: bool,
}

/// `end_date - notice_period_days`, saturating at the earliest representable
/// date for absurdly long notice periods.
pub fn notice_start_date(end_date: Date, notice_period_days: u32) -> Date {
    Span::new()
        .try_days(i64::from(notice_period_days))
        .ok()
        .and_then(|span| end_date.checked_sub(span).ok())
        .unwrap_or(Date::MIN)
}

/// Signed day count from `today` to `end_date`.
pub fn days_until(end_date: Date, today: Date) -> i64 {
    i64::from((end_date - today).get_days())
}

/// Expired means strictly after the end date; the end date itself is still live.
pub fn is_expired(end_date: Date, today: Date) -> bool {
    today > end_date
}

/// `notice_start <= today <= end_date`, both bounds inclusive.
pub fn is_in_notice_period(end_date: Date, notice_period_days: u32, today: Date) -> bool {
    notice_start_date(end_date, notice_period_days) <= today && today <= end_date
}

/// Color for a computed status. `days_until_end` only matters while in notice.
pub fn color_for(status: ContractStatus, days_until_end: i64) -> TimelineColor {
    match status {
        ContractStatus::Expired => TimelineColor::Gray,
        ContractStatus::InNotice if days_until_end <= URGENT_NOTICE_DAYS => TimelineColor::Red,
        ContractStatus::InNotice => TimelineColor::Orange,
        ContractStatus::Active => TimelineColor::Green,
    }
}

/// Classifies raw contract dates. Status checks run in priority order:
/// expired, then in notice, then active.
pub fn classify(end_date: Date, notice_period_days: u32, today: Date) -> StatusReport {
    let notice_start_date = notice_start_date(end_date, notice_period_days);
    let days_until_end = days_until(end_date, today);
    let is_expired = is_expired(end_date, today);
    let is_in_notice_period = notice_start_date <= today && today <= end_date;

    let status = if is_expired {
        ContractStatus::Expired
    } else if is_in_notice_period {
        ContractStatus::InNotice
    } else {
        ContractStatus::Active
    };

    StatusReport {
        status,
        color: color_for(status, days_until_end),
        notice_start_date,
        days_until_end,
        is_expired,
        is_in_notice_period,
    }
}

/// Derives the status of `contract` as of `today`.
///
/// ```rust
/// use cockpit_core::engine::status::classify;
/// use cockpit_core::models::{ContractStatus, TimelineColor};
/// use jiff::civil::date;
///
/// let report = classify(date(2025, 6, 30), 60, date(2025, 6, 15));
/// assert_eq!(report.notice_start_date, date(2025, 5, 1));
/// assert_eq!(report.days_until_end, 15);
/// assert_eq!(report.status, ContractStatus::InNotice);
/// assert_eq!(report.color, TimelineColor::Red);
/// ```
pub fn derive_status(contract: &Contract, today: Date) -> StatusReport {
    classify(contract.end_date, contract.notice_period_days, today)
}
