//! Command execution for the CLI.
//!
//! [`Cli`] owns the dashboard, the renderer and the reference day for one
//! invocation. Every command reads "today" from here, so all dates in one run
//! agree.

use anyhow::{Context, Result};
use cockpit_core::{
    Dashboard,
    params::{
        ContractId, CreateContract, DeleteContract, ListContracts, TicketId, TicketStatsQuery,
        TimelineOptions, UpdateContract,
    },
};
use jiff::civil::Date;
use log::debug;

use crate::{
    args::{ContractCommands, StatsArgs, TicketCommands, TimelineArgs},
    renderer::TerminalRenderer,
};

pub struct Cli {
    dashboard: Dashboard,
    renderer: TerminalRenderer,
    today: Date,
}

impl Cli {
    pub fn new(dashboard: Dashboard, renderer: TerminalRenderer, today: Date) -> Self {
        Self {
            dashboard,
            renderer,
            today,
        }
    }

    pub async fn handle_contract_command(&self, command: ContractCommands) -> Result<()> {
        match command {
            ContractCommands::Create(args) => {
                let params = CreateContract::from(args);
                debug!("contract create: {params:?}");
                let result = self
                    .dashboard
                    .create_contract_result(&params, self.today)
                    .await
                    .context("Failed to create contract")?;
                self.renderer.render(&result.to_string())
            }
            ContractCommands::List(args) => self.list_contracts(&ListContracts::from(args)).await,
            ContractCommands::Show(args) => {
                let params = ContractId::from(args);
                debug!("contract show: {params:?}");
                let view = self
                    .dashboard
                    .show_contract_view(&params, self.today)
                    .await
                    .context("Failed to show contract")?;
                self.renderer.render(&view.to_string())
            }
            ContractCommands::Update(args) => {
                let params = UpdateContract::from(args);
                debug!("contract update: {params:?}");
                let result = self
                    .dashboard
                    .update_contract_result(&params, self.today)
                    .await
                    .context("Failed to update contract")?;
                self.renderer.render(&result.to_string())
            }
            ContractCommands::Delete(args) => {
                let params = DeleteContract::from(args);
                debug!("contract delete: {params:?}");
                let result = self
                    .dashboard
                    .delete_contract_result(&params)
                    .await
                    .context("Failed to delete contract")?;
                self.renderer.render(&result.to_string())
            }
            ContractCommands::Status(args) => {
                let params = ContractId::from(&args);
                debug!("contract status: {params:?}");
                let report = self
                    .dashboard
                    .contract_status(&params, self.today)
                    .await
                    .context("Failed to derive contract status")?;
                if args.json {
                    self.renderer.json(&report)
                } else {
                    self.renderer.render(&report.to_string())
                }
            }
        }
    }

    pub async fn handle_ticket_command(&self, command: TicketCommands) -> Result<()> {
        match command {
            TicketCommands::Show(args) => {
                let params = TicketId::from(args);
                debug!("ticket show: {params:?}");
                let ticket = self
                    .dashboard
                    .show_ticket(&params)
                    .await
                    .context("Failed to show ticket")?;
                self.renderer.render(&ticket.to_string())
            }
            TicketCommands::Projects => {
                debug!("ticket projects: tag {}", self.dashboard.project_tag());
                let tickets = self
                    .dashboard
                    .project_tickets_view()
                    .await
                    .context("Failed to list project tickets")?;
                self.renderer.render(&format!(
                    "# Project tickets ({})\n\n{tickets}",
                    self.dashboard.project_tag()
                ))
            }
        }
    }

    pub async fn list_contracts(&self, params: &ListContracts) -> Result<()> {
        debug!("contract list: {params:?}");
        let contracts = self
            .dashboard
            .list_contracts_view(params, self.today)
            .await
            .context("Failed to list contracts")?;

        let title = match &params.status {
            Some(status) => format!("Contracts ({status})"),
            None => "Contracts".to_string(),
        };
        self.renderer.render(&format!("# {title}\n\n{contracts}"))
    }

    pub async fn timeline(&self, args: TimelineArgs) -> Result<()> {
        let options = TimelineOptions::from(&args);
        debug!("timeline: {options:?}");
        let view = self
            .dashboard
            .timeline_view(&options, self.today)
            .await
            .context("Failed to build timeline")?;

        if args.json {
            self.renderer.json(&view.items)
        } else {
            self.renderer.render(&view.to_string())
        }
    }

    pub async fn stats(&self, args: StatsArgs) -> Result<()> {
        let query = TicketStatsQuery::from(&args);
        debug!("stats: {query:?}");
        let stats = self
            .dashboard
            .ticket_stats(&query, self.today)
            .await
            .context("Failed to compute ticket statistics")?;

        if args.json {
            self.renderer.json(&stats.counts)
        } else {
            self.renderer.render(&stats.to_string())
        }
    }
}
