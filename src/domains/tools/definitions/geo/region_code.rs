//! Coordinate to region code tool.
//!
//! Resolves the legal dong (B) and administrative dong (H) that contain a
//! coordinate.

use rmcp::{
    handler::server::tool::{ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::config::Config;
use crate::domains::kakao::models::{Coord2RegionCodeDocument, CoordType};
use crate::domains::kakao::{Endpoint, KakaoResponse, KakaoResult};

use super::super::common::{fetch_documents, respond, tool_route};

/// Parameters for region code lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CoordToRegionCodeParams {
    /// Longitude (x) as a decimal string.
    #[schemars(description = "Longitude (x), e.g. '127.1086228'")]
    pub longitude: String,

    /// Latitude (y) as a decimal string.
    #[schemars(description = "Latitude (y), e.g. '37.4012191'")]
    pub latitude: String,

    /// Coordinate system of the input (default: WGS84).
    #[serde(default)]
    pub input_coord: CoordType,

    /// Coordinate system of the returned x/y (default: WGS84).
    #[serde(default)]
    pub output_coord: CoordType,
}

impl CoordToRegionCodeParams {
    /// Upstream query parameters.
    pub fn query(&self) -> [(&'static str, &str); 4] {
        [
            ("x", self.longitude.as_str()),
            ("y", self.latitude.as_str()),
            ("input_coord", self.input_coord.as_str()),
            ("output_coord", self.output_coord.as_str()),
        ]
    }
}

/// Coordinate to region code tool.
pub struct CoordToRegionCodeTool;

impl CoordToRegionCodeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "coord_to_region_code";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Look up the administrative dong (H) and legal dong (B) \
         that contain a coordinate. Returns region names for depths 1-4, the region code and the \
         region's representative x/y.";

    const ERROR_PREFIX: &'static str = "주소 정보를 가져올 수 없습니다.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(x = %params.longitude, y = %params.latitude))]
    pub async fn execute(params: &CoordToRegionCodeParams, config: &Config) -> CallToolResult {
        info!("Looking up region codes");
        respond(Self::ERROR_PREFIX, Self::lookup(params, config).await)
    }

    /// Query the region code endpoint.
    pub async fn lookup(
        params: &CoordToRegionCodeParams,
        config: &Config,
    ) -> KakaoResult<KakaoResponse<Coord2RegionCodeDocument>> {
        fetch_documents(config, Endpoint::Coord2RegionCode, &params.query()).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CoordToRegionCodeParams>(),
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
            |params: CoordToRegionCodeParams, config: Arc<Config>| async move {
                Self::execute(&params, &config).await
            },
        )
    }
}
