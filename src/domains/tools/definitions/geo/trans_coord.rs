//! Coordinate system transform tool.

use rmcp::{
    handler::server::tool::{ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::config::Config;
use crate::domains::kakao::models::{CoordType, TransCoordDocument};
use crate::domains::kakao::{Endpoint, KakaoResponse, KakaoResult};

use super::super::common::{fetch_documents, respond, tool_route};

/// Parameters for coordinate transformation.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TransCoordParams {
    /// Longitude (x) to transform.
    #[schemars(description = "Longitude (x) to transform")]
    pub longitude: String,

    /// Latitude (y) to transform.
    #[schemars(description = "Latitude (y) to transform")]
    pub latitude: String,

    /// Coordinate system of the input (default: WGS84).
    #[serde(default)]
    pub input_coord: CoordType,

    /// Coordinate system to transform into (default: WGS84).
    #[serde(default)]
    pub output_coord: CoordType,
}

impl TransCoordParams {
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

/// Coordinate system transform tool.
pub struct TransCoordTool;

impl TransCoordTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "trans_coord";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Transform x/y between coordinate systems \
         (WGS84, WCONGNAMUL, CONGNAMUL, WTM, TM, KTM, UTM, BESSEL, WKTM, WUTM) so data from \
         different systems can be combined. Both systems default to WGS84.";

    const ERROR_PREFIX: &'static str = "좌표 변환을 할 수 없습니다.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(
        x = %params.longitude,
        y = %params.latitude,
        from = %params.input_coord,
        to = %params.output_coord,
    ))]
    pub async fn execute(params: &TransCoordParams, config: &Config) -> CallToolResult {
        info!("Transforming coordinate");
        respond(Self::ERROR_PREFIX, Self::transform(params, config).await)
    }

    /// Query the transform endpoint.
    pub async fn transform(
        params: &TransCoordParams,
        config: &Config,
    ) -> KakaoResult<KakaoResponse<TransCoordDocument>> {
        fetch_documents(config, Endpoint::TransCoord, &params.query()).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TransCoordParams>(),
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
            |params: TransCoordParams, config: Arc<Config>| async move {
                Self::execute(&params, &config).await
            },
        )
    }
}
