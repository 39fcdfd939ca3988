//! Error handling utilities for the MCP server

use cockpit_core::CockpitError;
use rmcp::ErrorData;

/// Converts dashboard errors to MCP errors. Caller mistakes (bad input,
/// unknown ids, unconfirmed deletes) map to invalid params, the rest to
/// internal errors.
pub fn to_mcp_error(message: &str, error: &CockpitError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        CockpitError::InvalidInput { .. }
        | CockpitError::ContractNotFound { .. }
        | CockpitError::TicketNotFound { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_not_found_is_invalid_params() {
        let err = to_mcp_error(
            "Failed to show ticket",
            &CockpitError::TicketNotFound { id: 9 },
        );
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("Ticket with ID 9 not found"));
    }

    #[test]
    fn test_source_failure_is_internal() {
        let err = to_mcp_error(
            "Failed to list project tickets",
            &CockpitError::TicketSource {
                message: "down".to_string(),
            },
        );
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    }
}
