//! Coordinate to address tool (reverse geocoding).

use rmcp::{
    handler::server::tool::{ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::config::Config;
use crate::domains::kakao::models::{Coord2AddressDocument, CoordType};
use crate::domains::kakao::{Endpoint, KakaoResponse, KakaoResult};

use super::super::common::{fetch_documents, respond, tool_route};

/// Parameters for reverse geocoding.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CoordToAddressParams {
    /// Longitude (x) as a decimal string.
    #[schemars(description = "Longitude (x), e.g. '127.423084873712'")]
    pub longitude: String,

    /// Latitude (y) as a decimal string.
    #[schemars(description = "Latitude (y), e.g. '37.0789561558879'")]
    pub latitude: String,

    /// Coordinate system of the input (default: WGS84).
    #[serde(default)]
    pub input_coord: CoordType,
}

impl CoordToAddressParams {
    /// Upstream query parameters.
    pub fn query(&self) -> [(&'static str, &str); 3] {
        [
            ("x", self.longitude.as_str()),
            ("y", self.latitude.as_str()),
            ("input_coord", self.input_coord.as_str()),
        ]
    }
}

/// Coordinate to address tool.
pub struct CoordToAddressTool;

impl CoordToAddressTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "coord_to_address";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the lot-number (jibun) address and road-name address \
         at a coordinate. The road-name address may be missing depending on the coordinate.";

    const ERROR_PREFIX: &'static str = "주소 변환을 할 수 없습니다.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(x = %params.longitude, y = %params.latitude))]
    pub async fn execute(params: &CoordToAddressParams, config: &Config) -> CallToolResult {
        info!("Reverse geocoding coordinate");
        respond(Self::ERROR_PREFIX, Self::lookup(params, config).await)
    }

    /// Query the reverse geocoding endpoint.
    pub async fn lookup(
        params: &CoordToAddressParams,
        config: &Config,
    ) -> KakaoResult<KakaoResponse<Coord2AddressDocument>> {
        fetch_documents(config, Endpoint::Coord2Address, &params.query()).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CoordToAddressParams>(),
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
            |params: CoordToAddressParams, config: Arc<Config>| async move {
                Self::execute(&params, &config).await
            },
        )
    }
}
