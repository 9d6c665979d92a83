//! Address to coordinates tool.
//!
//! Geocodes a lot-number or road-name address so it can be placed on a map.

use rmcp::{
    handler::server::tool::{ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::config::Config;
use crate::domains::kakao::models::Address2CoordinatesDocument;
use crate::domains::kakao::{Endpoint, KakaoResponse, KakaoResult};

use super::super::common::{fetch_documents, respond, tool_route};

/// Parameters for address to coordinates conversion.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddressToCoordinatesParams {
    /// Address query.
    #[schemars(description = "Address to look up, either a lot-number (jibun) or road-name address")]
    pub query: String,
}

/// Address to coordinates tool.
pub struct AddressToCoordinatesTool;

impl AddressToCoordinatesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "convert_address_to_coordinates";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Convert an address into coordinates so it can be shown on a map. \
         Supports both lot-number (jibun) and road-name addresses. \
         Returns a list of matches with address_name, address_type, x (longitude), y (latitude) \
         and the parsed lot-number/road-name address when available.";

    const ERROR_PREFIX: &'static str = "좌표 정보를 가져올 수 없습니다.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(query = %params.query))]
    pub async fn execute(params: &AddressToCoordinatesParams, config: &Config) -> CallToolResult {
        info!("Converting address to coordinates");
        respond(Self::ERROR_PREFIX, Self::search(params, config).await)
    }

    /// Query the address search endpoint.
    pub async fn search(
        params: &AddressToCoordinatesParams,
        config: &Config,
    ) -> KakaoResult<KakaoResponse<Address2CoordinatesDocument>> {
        fetch_documents(config, Endpoint::SearchAddress, &[("query", params.query.as_str())]).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AddressToCoordinatesParams>(),
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
            |params: AddressToCoordinatesParams, config: Arc<Config>| async move {
                Self::execute(&params, &config).await
            },
        )
    }
}
