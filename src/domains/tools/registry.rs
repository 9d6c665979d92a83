//! Tool Registry - central listing and dispatch for all tools.
//!
//! The rmcp router serves protocol calls; the registry gives the same tools
//! a plain `name + JSON arguments` entry point for embedding and tests.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::core::config::Config;

use super::definitions::{
    AddressToCoordinatesTool, CoordToAddressTool, CoordToRegionCodeTool, CreateShareLinkTool,
    SearchPlacesByCategoryTool, SearchPlacesByKeywordTool, TransCoordTool,
};
use super::error::ToolError;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            AddressToCoordinatesTool::NAME,
            CoordToRegionCodeTool::NAME,
            CoordToAddressTool::NAME,
            TransCoordTool::NAME,
            SearchPlacesByKeywordTool::NAME,
            SearchPlacesByCategoryTool::NAME,
            CreateShareLinkTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            AddressToCoordinatesTool::to_tool(),
            CoordToRegionCodeTool::to_tool(),
            CoordToAddressTool::to_tool(),
            TransCoordTool::to_tool(),
            SearchPlacesByKeywordTool::to_tool(),
            SearchPlacesByCategoryTool::to_tool(),
            CreateShareLinkTool::to_tool(),
        ]
    }

    /// Dispatch a tool call by name.
    ///
    /// Unknown names and arguments that do not fit the tool's parameters are
    /// errors; upstream failures come back as an error result.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        debug!("Dispatching tool call: {}", name);
        let config = self.config.as_ref();

        let result = match name {
            AddressToCoordinatesTool::NAME => {
                AddressToCoordinatesTool::execute(&parse_params(arguments)?, config).await
            }
            CoordToRegionCodeTool::NAME => {
                CoordToRegionCodeTool::execute(&parse_params(arguments)?, config).await
            }
            CoordToAddressTool::NAME => {
                CoordToAddressTool::execute(&parse_params(arguments)?, config).await
            }
            TransCoordTool::NAME => TransCoordTool::execute(&parse_params(arguments)?, config).await,
            SearchPlacesByKeywordTool::NAME => {
                SearchPlacesByKeywordTool::execute(&parse_params(arguments)?, config).await
            }
            SearchPlacesByCategoryTool::NAME => {
                SearchPlacesByCategoryTool::execute(&parse_params(arguments)?, config).await
            }
            CreateShareLinkTool::NAME => CreateShareLinkTool::execute(&parse_params(arguments)?),
            _ => {
                warn!("Unknown tool requested: {}", name);
                return Err(ToolError::not_found(name));
            }
        };

        Ok(result)
    }
}

fn parse_params<P: DeserializeOwned>(arguments: serde_json::Value) -> Result<P, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}
