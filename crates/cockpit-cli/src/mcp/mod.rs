//! MCP server implementation for Cockpit
//!
//! Exposes the contract register, the timeline and the ticket statistics as
//! Model Context Protocol tools over stdio.

use std::sync::Arc;

use anyhow::Result;
use cockpit_core::Dashboard;
use jiff::{Zoned, civil::Date};
use log::{debug, error, info};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use tokio::signal::unix::{SignalKind, signal};

pub mod errors;
pub mod handlers;

pub use handlers::{
    ContractId, CreateContract, DeleteContract, ListContracts, McpResult, TicketId,
    TicketStatsQuery, TimelineOptions, UpdateContract,
};

/// MCP server for Cockpit
#[derive(Clone)]
pub struct CockpitMcpServer {
    dashboard: Arc<Dashboard>,
    today: Option<Date>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CockpitMcpServer {
    /// Create a new server. With `today` unset every call uses the current
    /// local date, so a long-running server follows the calendar.
    pub fn new(dashboard: Dashboard, today: Option<Date>) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
            today,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        let today = self.today.unwrap_or_else(|| Zoned::now().date());
        handlers::McpHandlers::new(self.dashboard.clone(), today)
    }

    #[tool(
        name = "create_contract",
        description = "Register a new supplier contract. Requires name, supplier, amount (decimal string, e.g. \"1200.50\"), start_date and end_date (YYYY-MM-DD, end after start) and notice_period_days (days before the end date by which notice must be given). Optionally attach a sharepoint_file_url. Returns the new contract ID and its derived status."
    )]
    async fn create_contract(&self, params: Parameters<CreateContract>) -> McpResult {
        self.handlers().create_contract(params).await
    }

    #[tool(
        name = "list_contracts",
        description = "List contracts ordered by end date. Supports skip/limit paging (limit defaults to 100) and an optional filter on the stored administrative status. Each entry shows the status derived for today: active, in notice or expired."
    )]
    async fn list_contracts(&self, params: Parameters<ListContracts>) -> McpResult {
        self.handlers().list_contracts(params).await
    }

    #[tool(
        name = "show_contract",
        description = "Show every detail of one contract by ID, including amount, period, notice window opening date, derived status and document link."
    )]
    async fn show_contract(&self, params: Parameters<ContractId>) -> McpResult {
        self.handlers().show_contract(params).await
    }

    #[tool(
        name = "update_contract",
        description = "Change fields of an existing contract by ID. Only the fields you provide change; the merged record is validated again (end date after start date, non-negative amount and notice period). An empty sharepoint_file_url removes the document link. At least one field is required."
    )]
    async fn update_contract(&self, params: Parameters<UpdateContract>) -> McpResult {
        self.handlers().update_contract(params).await
    }

    #[tool(
        name = "delete_contract",
        description = "Permanently delete a contract by ID. This cannot be undone, so confirmed must be set to true."
    )]
    async fn delete_contract(&self, params: Parameters<DeleteContract>) -> McpResult {
        self.handlers().delete_contract(params).await
    }

    #[tool(
        name = "contract_status",
        description = "Derive the lifecycle status of one contract for today: status (active, in_notice, expired), display color, the date the notice window opens and the signed number of days until the end date. Returns markdown followed by the same report as JSON."
    )]
    async fn contract_status(&self, params: Parameters<ContractId>) -> McpResult {
        self.handlers().contract_status(params).await
    }

    #[tool(
        name = "timeline",
        description = "Build the combined timeline: one point milestone on each contract's end date, one bar per notice window that has not closed yet (notice start to end date), and one bar per project ticket from creation to closure (open tickets run until today). Set stack=true to assign non-overlapping lanes. Returns a markdown table followed by the items as JSON."
    )]
    async fn timeline(&self, params: Parameters<TimelineOptions>) -> McpResult {
        self.handlers().timeline(params).await
    }

    #[tool(
        name = "ticket_stats",
        description = "Count closed helpdesk tickets per calendar day. Defaults to the last 30 days ending today; start_date and end_date (YYYY-MM-DD) narrow the range. Project tickets are left out unless include_projects is true. Only days with at least one closure are listed."
    )]
    async fn ticket_stats(&self, params: Parameters<TicketStatsQuery>) -> McpResult {
        self.handlers().ticket_stats(params).await
    }

    #[tool(
        name = "project_tickets",
        description = "List the helpdesk tickets carrying the project tag, open or closed."
    )]
    async fn project_tickets(&self) -> McpResult {
        self.handlers().project_tickets().await
    }

    #[tool(
        name = "show_ticket",
        description = "Show one helpdesk ticket by its numeric ID: title, state, priority, tags and creation/closure dates."
    )]
    async fn show_ticket(&self, params: Parameters<TicketId>) -> McpResult {
        self.handlers().show_ticket(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for CockpitMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "cockpit".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"Cockpit is an IT manager's dashboard over supplier contracts and helpdesk tickets.

## Core Concepts
- **Contracts**: supplier agreements with an amount, a start and end date and a notice period in days
- **Derived status**: computed for today, never stored. `active` before the notice window opens, `in_notice` from the window opening through the end date, `expired` after it
- **Tickets**: helpdesk tickets read from the configured ticket source. Tickets tagged with the project tag appear on the timeline

## Workflow Examples

### Checking upcoming renewals
1. `list_contracts` to see every contract ordered by end date
2. `contract_status` on a contract to get the exact notice window date
3. `timeline` for a visual overview of end dates and open notice windows

### Maintaining the register
1. `create_contract` with dates as YYYY-MM-DD and the amount as a decimal string
2. `update_contract` to change only the fields that moved
3. `delete_contract` with confirmed=true to remove a contract

### Helpdesk load
- `ticket_stats` for closures per day over the last 30 days
- `project_tickets` and `show_ticket` for ticket details

## Tool Categories
- **Contracts**: create_contract, list_contracts, show_contract, update_contract, delete_contract, contract_status
- **Views**: timeline, ticket_stats
- **Tickets**: project_tickets, show_ticket"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: CockpitMcpServer) -> Result<()> {
    use rmcp::{ServiceExt, transport::stdio};

    info!("Starting Cockpit MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use cockpit_core::DashboardBuilder;
    use jiff::civil::date;
    use tempfile::TempDir;

    use super::*;

    async fn server() -> (TempDir, CockpitMcpServer) {
        let dir = TempDir::new().expect("temp dir");
        let dashboard = DashboardBuilder::new()
            .with_database_path(Some(dir.path().join("mcp.db")))
            .build()
            .await
            .expect("dashboard");
        (dir, CockpitMcpServer::new(dashboard, Some(date(2025, 6, 1))))
    }

    #[tokio::test]
    async fn test_registers_every_tool() {
        let (_dir, server) = server().await;
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "contract_status",
                "create_contract",
                "delete_contract",
                "list_contracts",
                "project_tickets",
                "show_contract",
                "show_ticket",
                "ticket_stats",
                "timeline",
                "update_contract",
            ]
        );
    }

    #[tokio::test]
    async fn test_timeline_tool_describes_item_shapes() {
        let (_dir, server) = server().await;
        let timeline = server
            .tool_router
            .list_all()
            .into_iter()
            .find(|t| t.name == "timeline")
            .expect("timeline tool");
        let description = timeline.description.unwrap_or_default();
        assert!(description.contains("point milestone on each contract's end date"));
        assert!(description.contains("open tickets run until today"));
        assert!(!description.contains("bar per contract period"));
    }

    #[tokio::test]
    async fn test_server_info_advertises_tools_only() {
        let (_dir, server) = server().await;
        let info = server.get_info();
        assert_eq!(info.server_info.name, "cockpit");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_none());
    }
}
