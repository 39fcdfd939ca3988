//! MCP tool handlers implementation

use std::sync::Arc;

use cockpit_core::{Dashboard, params as core};
use jiff::civil::Date;
use log::debug;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::errors::to_mcp_error;

// Core parameter types stay free of MCP concerns. This transparent wrapper
// adds the deserialization and schema plumbing rmcp needs and passes the JSON
// straight through to the wrapped type.

/// Generic MCP wrapper for core parameter types
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type ContractId = McpParams<core::ContractId>;
pub type CreateContract = McpParams<core::CreateContract>;
pub type UpdateContract = McpParams<core::UpdateContract>;
pub type ListContracts = McpParams<core::ListContracts>;
pub type DeleteContract = McpParams<core::DeleteContract>;
pub type TicketId = McpParams<core::TicketId>;
pub type TicketStatsQuery = McpParams<core::TicketStatsQuery>;
pub type TimelineOptions = McpParams<core::TimelineOptions>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(markdown: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(markdown)]))
}

/// Markdown for people, followed by the same data as JSON for programs.
fn text_and_json<T: Serialize>(markdown: String, value: &T) -> McpResult {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ErrorData::internal_error(format!("Failed to serialize result: {e}"), None))?;
    Ok(CallToolResult::success(vec![
        Content::text(markdown),
        Content::text(json),
    ]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    dashboard: Arc<Dashboard>,
    today: Date,
}

impl McpHandlers {
    pub fn new(dashboard: Arc<Dashboard>, today: Date) -> Self {
        Self { dashboard, today }
    }

    pub async fn create_contract(&self, Parameters(params): Parameters<CreateContract>) -> McpResult {
        debug!("create_contract: {params:?}");
        let result = self
            .dashboard
            .create_contract_result(params.as_ref(), self.today)
            .await
            .map_err(|e| to_mcp_error("Failed to create contract", &e))?;
        text(result.to_string())
    }

    pub async fn list_contracts(&self, Parameters(params): Parameters<ListContracts>) -> McpResult {
        debug!("list_contracts: {params:?}");
        let contracts = self
            .dashboard
            .list_contracts_view(params.as_ref(), self.today)
            .await
            .map_err(|e| to_mcp_error("Failed to list contracts", &e))?;

        let title = if contracts.is_empty() {
            "No contracts found"
        } else {
            "Contracts"
        };
        text(format!("# {title} (as of {})\n\n{contracts}", self.today))
    }

    pub async fn show_contract(&self, Parameters(params): Parameters<ContractId>) -> McpResult {
        debug!("show_contract: {params:?}");
        let view = self
            .dashboard
            .show_contract_view(params.as_ref(), self.today)
            .await
            .map_err(|e| to_mcp_error("Failed to show contract", &e))?;
        text(view.to_string())
    }

    pub async fn update_contract(&self, Parameters(params): Parameters<UpdateContract>) -> McpResult {
        debug!("update_contract: {params:?}");
        let result = self
            .dashboard
            .update_contract_result(params.as_ref(), self.today)
            .await
            .map_err(|e| to_mcp_error("Failed to update contract", &e))?;
        text(result.to_string())
    }

    pub async fn delete_contract(&self, Parameters(params): Parameters<DeleteContract>) -> McpResult {
        debug!("delete_contract: {params:?}");
        let result = self
            .dashboard
            .delete_contract_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete contract", &e))?;
        text(result.to_string())
    }

    pub async fn contract_status(&self, Parameters(params): Parameters<ContractId>) -> McpResult {
        debug!("contract_status: {params:?}");
        let report = self
            .dashboard
            .contract_status(params.as_ref(), self.today)
            .await
            .map_err(|e| to_mcp_error("Failed to derive contract status", &e))?;
        text_and_json(report.to_string(), &report)
    }

    pub async fn timeline(&self, Parameters(params): Parameters<TimelineOptions>) -> McpResult {
        debug!("timeline: {params:?}");
        let view = self
            .dashboard
            .timeline_view(params.as_ref(), self.today)
            .await
            .map_err(|e| to_mcp_error("Failed to build timeline", &e))?;
        text_and_json(view.to_string(), &view.items)
    }

    pub async fn ticket_stats(&self, Parameters(params): Parameters<TicketStatsQuery>) -> McpResult {
        debug!("ticket_stats: {params:?}");
        let stats = self
            .dashboard
            .ticket_stats(params.as_ref(), self.today)
            .await
            .map_err(|e| to_mcp_error("Failed to compute ticket statistics", &e))?;
        text_and_json(stats.to_string(), &stats.counts)
    }

    pub async fn project_tickets(&self) -> McpResult {
        debug!("project_tickets: tag {}", self.dashboard.project_tag());
        let tickets = self
            .dashboard
            .project_tickets_view()
            .await
            .map_err(|e| to_mcp_error("Failed to list project tickets", &e))?;
        text(format!(
            "# Project tickets ({})\n\n{tickets}",
            self.dashboard.project_tag()
        ))
    }

    pub async fn show_ticket(&self, Parameters(params): Parameters<TicketId>) -> McpResult {
        debug!("show_ticket: {params:?}");
        let ticket = self
            .dashboard
            .show_ticket(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to show ticket", &e))?;
        text(ticket.to_string())
    }
}
