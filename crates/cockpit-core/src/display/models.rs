//! Display implementations for domain models.
//!
//! Everything here renders markdown for rich terminal display. Contracts are
//! always shown through [`ContractView`], which pairs the stored record with
//! the status derived for a reference day.

use std::fmt;

use jiff::civil::Date;

use super::datetime::{LocalDateTime, TicketTime};
use crate::{
    engine::StatusReport,
    models::{Contract, ContractStatus, Ticket, TicketStats, TimelineColor, TimelineItem},
};

/// Longest histogram bar, in characters.
const HISTOGRAM_WIDTH: u64 = 40;

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TimelineColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

/// A contract together with its status on a given day.
#[derive(Debug, Clone)]
pub struct ContractView {
    pub contract: Contract,
    pub report: StatusReport,
}

impl ContractView {
    pub fn new(contract: Contract, today: Date) -> Self {
        let report = contract.status_report(today);
        Self { contract, report }
    }
}

/// "12 days left", "ends today" or "ended 3 days ago".
pub(crate) fn remaining_days(days_until_end: i64) -> String {
    match days_until_end {
        0 => "ends today".to_string(),
        1 => "1 day left".to_string(),
        -1 => "ended 1 day ago".to_string(),
        d if d < 0 => format!("ended {} days ago", d.unsigned_abs()),
        d => format!("{d} days left"),
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(f, "- Color: {}", self.color)?;
        writeln!(f, "- Notice window opens: {}", self.notice_start_date)?;
        writeln!(f, "- Remaining: {}", remaining_days(self.days_until_end))
    }
}

impl fmt::Display for ContractView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.contract;
        let r = &self.report;

        writeln!(f, "# {}", c.name)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", c.id)?;
        writeln!(f, "- Supplier: {}", c.supplier)?;
        writeln!(f, "- Amount: {}", c.amount)?;
        writeln!(f, "- Period: {} → {}", c.start_date, c.end_date)?;
        writeln!(
            f,
            "- Notice: {} days (window opens {})",
            c.notice_period_days, r.notice_start_date
        )?;
        writeln!(
            f,
            "- Status: {} ({})",
            r.status.with_icon(),
            remaining_days(r.days_until_end)
        )?;
        writeln!(f, "- Administrative status: {}", c.status)?;
        if let Some(url) = &c.sharepoint_file_url {
            writeln!(f, "- Document: {url}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&c.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&c.updated_at))?;

        Ok(())
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### #{} {} ({})", self.id, self.title, self.state)?;
        writeln!(f)?;
        writeln!(f, "- Priority: {}", self.priority)?;
        if !self.tags.is_empty() {
            writeln!(f, "- Tags: {}", self.tags.join(", "))?;
        }
        writeln!(f, "- Created: {}", TicketTime::new(&self.created_at))?;
        if let Some(closed) = &self.close_at {
            writeln!(f, "- Closed: {}", TicketTime::new(closed))?;
        }
        writeln!(f)?;

        Ok(())
    }
}

/// Escapes pipes so free text cannot split a markdown table cell.
fn table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl fmt::Display for TimelineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = self.end.map(|d| d.to_string()).unwrap_or_default();
        writeln!(
            f,
            "| {} | {} | {} | {} | {} | {} |",
            self.group,
            self.item_type(),
            table_cell(&self.title),
            self.start,
            end,
            self.color
        )
    }
}

impl fmt::Display for TicketStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Closed tickets {} → {}",
            self.range.start, self.range.end
        )?;
        writeln!(f)?;

        if self.counts.is_empty() {
            return writeln!(f, "No closed tickets in this range.");
        }

        writeln!(f, "- Total: {}", self.total())?;
        writeln!(f, "- Busiest day: {}", self.peak())?;
        writeln!(f)?;

        let peak = u64::from(self.peak()).max(1);
        writeln!(f, "```")?;
        for day in &self.counts {
            let width = (u64::from(day.count) * HISTOGRAM_WIDTH + peak - 1) / peak;
            let bar = "#".repeat(usize::try_from(width).unwrap_or(0));
            writeln!(f, "{} {bar} {}", day.date, day.count)?;
        }
        writeln!(f, "```")
    }
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, civil::date};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use super::*;
    use crate::models::{DailyCount, StatsRange};

    #[test]
    fn test_status_report_lines() {
        let report = crate::engine::status::classify(date(2025, 6, 30), 30, date(2025, 6, 20));
        let text = report.to_string();
        assert!(text.contains("- Status: ◐ In notice"));
        assert!(text.contains("- Color: #EF4444"));
        assert!(text.contains("- Notice window opens: 2025-05-31"));
        assert!(text.contains("- Remaining: 10 days left"));
    }

    #[test]
    fn test_timeline_row_escapes_pipes_in_title() {
        let item = TimelineItem {
            id: "ticket-7".to_string(),
            title: "VPN | firewall".to_string(),
            start: date(2025, 1, 2),
            end: Some(date(2025, 1, 3)),
            color: TimelineColor::Blue,
            group: 0,
            metadata: crate::models::TimelineMeta::Ticket(crate::models::TicketMeta {
                ticket_id: 7,
                state: "open".to_string(),
                priority: "normal".to_string(),
                tags: vec![],
            }),
        };
        let row = item.to_string();
        assert!(row.contains("| VPN \\| firewall |"));
        assert_eq!(row.matches(" | ").count(), 5);
    }

    #[test]
    fn test_remaining_days_wording() {
        assert_eq!(remaining_days(12), "12 days left");
        assert_eq!(remaining_days(1), "1 day left");
        assert_eq!(remaining_days(0), "ends today");
        assert_eq!(remaining_days(-4), "ended 4 days ago");
    }

    #[test]
    fn test_contract_view_shows_derived_status() {
        let contract = Contract {
            id: Uuid::nil(),
            name: "Backup".to_string(),
            supplier: "Acme".to_string(),
            amount: Decimal::new(99_990, 2),
            start_date: date(2024, 1, 1),
            end_date: date(2025, 6, 30),
            notice_period_days: 60,
            sharepoint_file_url: Some("https://files.example/backup.pdf".to_string()),
            status: "active".to_string(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        };
        let output = ContractView::new(contract, date(2025, 6, 15)).to_string();

        assert!(output.starts_with("# Backup\n"));
        assert!(output.contains("- Amount: 999.90"));
        assert!(output.contains("window opens 2025-05-01"));
        assert!(output.contains("◐ In notice (15 days left)"));
        assert!(output.contains("- Document: https://files.example/backup.pdf"));
    }

    #[test]
    fn test_histogram_scales_to_peak() {
        let stats = TicketStats {
            range: StatsRange::new(date(2025, 1, 1), date(2025, 1, 31)).unwrap(),
            counts: vec![
                DailyCount {
                    date: date(2025, 1, 1),
                    count: 2,
                },
                DailyCount {
                    date: date(2025, 1, 3),
                    count: 1,
                },
            ],
        };
        let output = stats.to_string();

        assert!(output.contains("- Total: 3"));
        assert!(output.contains(&format!("2025-01-01 {} 2", "#".repeat(40))));
        assert!(output.contains(&format!("2025-01-03 {} 1", "#".repeat(20))));
    }

    #[test]
    fn test_empty_histogram() {
        let stats = TicketStats {
            range: StatsRange::trailing(date(2025, 1, 31)),
            counts: vec![],
        };
        assert!(stats.to_string().contains("No closed tickets in this range."));
    }
}
