//! Category place search tool.

use rmcp::{
    handler::server::tool::{ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::config::Config;
use crate::domains::kakao::models::{CategoryGroupCode, PlacesDocument};
use crate::domains::kakao::{Endpoint, KakaoResponse, KakaoResult};

use super::super::common::{fetch_documents, respond, tool_route};
use super::SearchPlacesByKeywordTool;

/// Parameters for category place search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchPlacesByCategoryParams {
    /// Category group to search.
    #[schemars(description = "Category group code (MT1, CS2, PS3, SC4, AC5, PK6, OL7, SW8, BK9, \
         CT1, AG2, PO3, AT4, AD5, FD6, CE7, HP8, PM9)")]
    pub category_group_code: CategoryGroupCode,
}

/// Category place search tool.
pub struct SearchPlacesByCategoryTool;

impl SearchPlacesByCategoryTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_places_by_category";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search places in a category group such as cafes (CE7), \
         restaurants (FD6) or pharmacies (PM9). Returns the same place fields as keyword search.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(category = %params.category_group_code))]
    pub async fn execute(params: &SearchPlacesByCategoryParams, config: &Config) -> CallToolResult {
        info!("Searching places by category");
        respond(
            SearchPlacesByKeywordTool::ERROR_PREFIX,
            Self::search(params, config).await,
        )
    }

    /// Query the category search endpoint.
    pub async fn search(
        params: &SearchPlacesByCategoryParams,
        config: &Config,
    ) -> KakaoResult<KakaoResponse<PlacesDocument>> {
        fetch_documents(
            config,
            Endpoint::SearchCategory,
            &[("category_group_code", params.category_group_code.as_str())],
        )
        .await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchPlacesByCategoryParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        tool_route(
            Self::to_tool(),
            config,
            |params: SearchPlacesByCategoryParams, config: Arc<Config>| async move {
                Self::execute(&params, &config).await
            },
        )
    }
}
