//! Cockpit CLI Application
//!
//! Command-line and MCP front-end for the Cockpit IT dashboard: supplier
//! contracts, the contract/ticket timeline and helpdesk closure statistics.

mod args;
mod cli;
mod mcp;
mod renderer;

use Commands::*;
use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use cockpit_core::{DashboardBuilder, params::ListContracts};
use jiff::Zoned;
use log::info;
use mcp::{CockpitMcpServer, run_stdio_server};
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        tickets_file,
        project_tag,
        today,
        no_color,
        command,
    } = Args::parse();

    let dashboard = DashboardBuilder::new()
        .with_database_path(database_file)
        .with_ticket_file(tickets_file)
        .with_project_tag(project_tag)
        .build()
        .await
        .context("Failed to initialize dashboard")?;

    info!("Cockpit started");

    if let Some(Serve) = command {
        info!("Starting Cockpit MCP server");
        return run_stdio_server(CockpitMcpServer::new(dashboard, today))
            .await
            .context("MCP server failed");
    }

    let today = today.unwrap_or_else(|| Zoned::now().date());
    let cli = Cli::new(dashboard, TerminalRenderer::new(!no_color), today);

    match command {
        Some(Contract { command }) => cli.handle_contract_command(command).await,
        Some(Ticket { command }) => cli.handle_ticket_command(command).await,
        Some(Timeline(args)) => cli.timeline(args).await,
        Some(Stats(args)) => cli.stats(args).await,
        Some(Serve) => Ok(()),
        None => cli.list_contracts(&ListContracts::default()).await,
    }
}
