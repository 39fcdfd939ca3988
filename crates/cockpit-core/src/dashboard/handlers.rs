//! Handler operations returning display-ready wrapper types.
//!
//! These are what the CLI and the MCP server render. Each one pairs the raw
//! operation with the reference day so that contract status is always shown
//! as of the same `today` the caller chose.

use jiff::civil::Date;

use super::Dashboard;
use crate::{
    display::{ContractView, Contracts, CreateResult, DeleteResult, Tickets, TimelineView, UpdateResult},
    error::{CockpitError, Result},
    models::{Contract, Ticket},
    params::{ContractId, CreateContract, DeleteContract, ListContracts, TicketId, TimelineOptions, UpdateContract},
};

impl Dashboard {
    /// Handle listing contracts with their status as of `today`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use cockpit_core::{params::ListContracts, DashboardBuilder};
    /// # async {
    /// let dashboard = DashboardBuilder::new().build().await?;
    /// let contracts = dashboard
    ///     .list_contracts_view(&ListContracts::default(), jiff::Zoned::now().date())
    ///     .await?;
    /// println!("{contracts}");
    /// # Result::<(), cockpit_core::CockpitError>::Ok(())
    /// # };
    /// ```
    pub async fn list_contracts_view(&self, params: &ListContracts, today: Date) -> Result<Contracts> {
        let contracts = self.list_contracts(params).await?;
        Ok(Contracts(
            contracts
                .into_iter()
                .map(|c| ContractView::new(c, today))
                .collect(),
        ))
    }

    /// Handle showing one contract.
    ///
    /// # Errors
    ///
    /// Returns `CockpitError::ContractNotFound` for an unknown id.
    pub async fn show_contract_view(&self, params: &ContractId, today: Date) -> Result<ContractView> {
        let contract = self.require_contract(params).await?;
        Ok(ContractView::new(contract, today))
    }

    /// Handle creating a contract.
    pub async fn create_contract_result(
        &self,
        params: &CreateContract,
        today: Date,
    ) -> Result<CreateResult<ContractView>> {
        let contract = self.create_contract(params).await?;
        Ok(CreateResult::new(ContractView::new(contract, today)))
    }

    /// Handle a partial contract update, listing the fields it touched.
    pub async fn update_contract_result(
        &self,
        params: &UpdateContract,
        today: Date,
    ) -> Result<UpdateResult<ContractView>> {
        let contract = self.update_contract(params).await?;
        Ok(UpdateResult::with_changes(
            ContractView::new(contract, today),
            params.describe_changes(),
        ))
    }

    /// Handle permanently deleting a contract with confirmation.
    pub async fn delete_contract_result(
        &self,
        params: &DeleteContract,
    ) -> Result<DeleteResult<Contract>> {
        self.delete_contract(params).await.map(DeleteResult::new)
    }

    /// Handle building the timeline.
    pub async fn timeline_view(&self, options: &TimelineOptions, today: Date) -> Result<TimelineView> {
        let items = self.timeline(options, today).await?;
        Ok(TimelineView { items, today })
    }

    /// Handle listing project tickets.
    pub async fn project_tickets_view(&self) -> Result<Tickets> {
        self.project_tickets().await.map(Tickets)
    }

    /// Handle showing one ticket.
    ///
    /// # Errors
    ///
    /// Returns `CockpitError::TicketNotFound` for an unknown id.
    pub async fn show_ticket(&self, params: &TicketId) -> Result<Ticket> {
        self.ticket(params)
            .await?
            .ok_or(CockpitError::TicketNotFound { id: params.id })
    }
}
