//! Timestamp formatting for records shown to people.
//!
//! Contract audit times and ticket times are shown in the system timezone.
//! Ticket statistics and the timeline bucket by UTC calendar day instead, so
//! [`TicketTime`] shows both when they disagree.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

use crate::models::utc_date;

/// `YYYY-MM-DD HH:MM TZ` in the system timezone.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", local(self.0, &TimeZone::system()))
    }
}

/// A ticket timestamp in the system timezone, suffixed with the UTC day the
/// dashboard files it under when that day differs from the local one.
pub struct TicketTime<'a> {
    pub timestamp: &'a Timestamp,
    pub tz: TimeZone,
}

impl<'a> TicketTime<'a> {
    pub fn new(timestamp: &'a Timestamp) -> Self {
        Self {
            timestamp,
            tz: TimeZone::system(),
        }
    }
}

impl fmt::Display for TicketTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", local(self.timestamp, &self.tz))?;
        let utc_day = utc_date(*self.timestamp);
        if self.timestamp.to_zoned(self.tz.clone()).date() != utc_day {
            write!(f, " (counted on {utc_day})")?;
        }
        Ok(())
    }
}

fn local(timestamp: &Timestamp, tz: &TimeZone) -> String {
    timestamp
        .to_zoned(tz.clone())
        .strftime("%Y-%m-%d %H:%M %Z")
        .to_string()
}
