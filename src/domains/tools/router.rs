//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; this module only lists them.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{
    AddressToCoordinatesTool, CoordToAddressTool, CoordToRegionCodeTool, CreateShareLinkTool,
    SearchPlacesByCategoryTool, SearchPlacesByKeywordTool, TransCoordTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(AddressToCoordinatesTool::create_route(config.clone()))
        .with_route(CoordToRegionCodeTool::create_route(config.clone()))
        .with_route(CoordToAddressTool::create_route(config.clone()))
        .with_route(TransCoordTool::create_route(config.clone()))
        .with_route(SearchPlacesByKeywordTool::create_route(config.clone()))
        .with_route(SearchPlacesByCategoryTool::create_route(config.clone()))
        .with_route(CreateShareLinkTool::create_route(config))
}
