//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper handles the empty case with a one-line notice.

use std::fmt;

use jiff::civil::Date;

use super::models::{ContractView, remaining_days};
use crate::{
    engine::stacking::lane_count,
    models::{Ticket, TimelineItem},
};

/// Newtype wrapper for displaying a list of contracts.
///
/// # Examples
///
/// ```rust
/// use cockpit_core::display::Contracts;
///
/// let contracts = Contracts(vec![]);
/// assert_eq!(contracts.to_string(), "No contracts found.\n");
/// ```
pub struct Contracts(pub Vec<ContractView>);

impl Contracts {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContractView> {
        self.0.iter()
    }
}

impl IntoIterator for Contracts {
    type Item = ContractView;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Contracts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No contracts found.");
        }
        for view in &self.0 {
            let c = &view.contract;
            writeln!(f, "## {} ({})", c.name, c.supplier)?;
            writeln!(f)?;
            writeln!(
                f,
                "- **Status**: {} ({})",
                view.report.status.with_icon(),
                remaining_days(view.report.days_until_end)
            )?;
            writeln!(f, "- **Ends**: {}", c.end_date)?;
            writeln!(f, "- **Amount**: {}", c.amount)?;
            writeln!(f, "- **ID**: {}", c.id)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a list of tickets.
pub struct Tickets(pub Vec<Ticket>);

impl Tickets {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Tickets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tickets found.")
        } else {
            for ticket in &self.0 {
                write!(f, "{ticket}")?;
            }
            Ok(())
        }
    }
}

/// The timeline as of a reference day, rendered as a markdown table.
pub struct TimelineView {
    pub items: Vec<TimelineItem>,
    pub today: Date,
}

impl TimelineView {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for TimelineView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Timeline as of {}", self.today)?;
        writeln!(f)?;

        if self.items.is_empty() {
            return writeln!(f, "No timeline items.");
        }

        let lanes = lane_count(&self.items);
        if lanes > 1 {
            writeln!(f, "{} items over {lanes} lanes", self.items.len())?;
            writeln!(f)?;
        }

        writeln!(f, "| Lane | Type | Title | Start | End | Color |")?;
        writeln!(f, "|---|---|---|---|---|---|")?;
        for item in &self.items {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
