//! Timeline projector.
//!
//! Projects contracts and tickets onto one list of timeline items. Each
//! contract contributes its end-date milestone, immediately followed by its
//! notice bar when one applies; tickets follow after all contracts, in input
//! order.

use jiff::civil::Date;

use super::status::{StatusReport, derive_status};
use crate::models::{
    Contract, ContractMilestoneMeta, ContractNoticeMeta, Ticket, TicketMeta, TimelineColor,
    TimelineItem, TimelineMeta,
};

/// Fixed color of ticket bars.
pub const TICKET_COLOR: TimelineColor = TimelineColor::Blue;

/// Builds the combined timeline.
///
/// Emits one milestone per contract, zero or one notice bar per contract (see
/// [`shows_notice_bar`]) and one bar per ticket. Nothing is filtered by
/// recency beyond the notice-bar rule; every item has `group == 0`.
pub fn build_timeline(contracts: &[Contract], tickets: &[Ticket], today: Date) -> Vec<TimelineItem> {
    let mut items = Vec::with_capacity(contracts.len() * 2 + tickets.len());
    for contract in contracts {
        items.extend(contract_items(contract, today));
    }
    items.extend(tickets.iter().map(|ticket| ticket_item(ticket, today)));
    items
}

/// Items for a single contract: the milestone, then the notice bar if shown.
pub fn contract_items(contract: &Contract, today: Date) -> Vec<TimelineItem> {
    let report = derive_status(contract, today);
    let mut items = vec![milestone_item(contract, &report)];
    if shows_notice_bar(&report, today) {
        items.push(notice_item(contract, &report));
    }
    items
}

/// A notice bar is shown while the window is current or still ahead.
/// Windows lying entirely in the past never get one.
pub fn shows_notice_bar(report: &StatusReport, today: Date) -> bool {
    report.is_in_notice_period || report.notice_start_date >= today
}

fn milestone_item(contract: &Contract, report: &StatusReport) -> TimelineItem {
    TimelineItem {
        id: format!("contract-milestone-{}", contract.id),
        title: format!("{} - End date", contract.name),
        start: contract.end_date,
        end: None,
        color: report.color,
        group: 0,
        metadata: TimelineMeta::ContractMilestone(ContractMilestoneMeta {
            contract_id: contract.id,
            supplier: contract.supplier.clone(),
            amount: contract.amount,
            sharepoint_url: contract.sharepoint_file_url.clone(),
        }),
    }
}

fn notice_item(contract: &Contract, report: &StatusReport) -> TimelineItem {
    TimelineItem {
        id: format!("contract-notice-{}", contract.id),
        title: format!("{} - Notice period", contract.name),
        start: report.notice_start_date,
        end: Some(contract.end_date),
        color: report.color,
        group: 0,
        metadata: TimelineMeta::ContractNotice(ContractNoticeMeta {
            contract_id: contract.id,
            supplier: contract.supplier.clone(),
            notice_days: contract.notice_period_days,
        }),
    }
}

/// A ticket bar runs from creation to closure; open tickets extend to `today`.
pub fn ticket_item(ticket: &Ticket, today: Date) -> TimelineItem {
    TimelineItem {
        id: format!("ticket-{}", ticket.id),
        title: ticket.title.clone(),
        start: ticket.created_date(),
        end: Some(ticket.close_date().unwrap_or(today)),
        color: TICKET_COLOR,
        group: 0,
        metadata: TimelineMeta::Ticket(TicketMeta {
            ticket_id: ticket.id,
            state: ticket.state.clone(),
            priority: ticket.priority.clone(),
            tags: ticket.tags.clone(),
        }),
    }
}
