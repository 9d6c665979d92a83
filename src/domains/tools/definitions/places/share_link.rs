//! Place share link tool.
//!
//! Builds the public place page URL locally; no request is made.

use rmcp::{
    handler::server::tool::{ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::config::Config;
use crate::domains::tools::ToolError;

use super::super::common::{error_result, tool_route};

/// Place page URL prefix.
pub const PLACE_URL_PREFIX: &str = "https://place.map.kakao.com/";

/// Parameters for share link creation.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateShareLinkParams {
    /// Place id as returned by the place search tools.
    #[schemars(description = "Place id from search_places_by_keyword or search_places_by_category")]
    pub place_id: String,
}

/// Place share link tool.
pub struct CreateShareLinkTool;

impl CreateShareLinkTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_share_link";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Create a shareable Kakao Map link for a place id returned by the place search tools.";

    const ERROR_PREFIX: &'static str = "공유 링크를 생성할 수 없습니다.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(place_id = %params.place_id))]
    pub fn execute(params: &CreateShareLinkParams) -> CallToolResult {
        match Self::link(&params.place_id) {
            Ok(url) => {
                info!("Created share link");
                CallToolResult {
                    content: vec![Content::text(url.clone())],
                    structured_content: Some(serde_json::json!({ "url": url })),
                    is_error: Some(false),
                    meta: None,
                }
            }
            Err(e) => error_result(Self::ERROR_PREFIX, "invalid_arguments", e),
        }
    }

    /// Build the place URL. A non-blank id is interpolated verbatim.
    pub fn link(place_id: &str) -> Result<String, ToolError> {
        if place_id.trim().is_empty() {
            return Err(ToolError::invalid_arguments("place_id must not be empty"));
        }
        Ok(format!("{PLACE_URL_PREFIX}{place_id}"))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreateShareLinkParams>(),
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
            |params: CreateShareLinkParams, _config: Arc<Config>| async move {
                Self::execute(&params)
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::test_support::*;

    #[test]
    fn test_link_template() {
        assert_eq!(
            CreateShareLinkTool::link("12345").unwrap(),
            "https://place.map.kakao.com/12345"
        );
    }

    #[test]
    fn test_non_blank_id_is_not_rewritten() {
        assert_eq!(
            CreateShareLinkTool::link(" 8264857 ").unwrap(),
            "https://place.map.kakao.com/ 8264857 "
        );
    }

    #[test]
    fn test_execute_returns_url() {
        let params = CreateShareLinkParams {
            place_id: "26338954".to_string(),
        };
        let result = CreateShareLinkTool::execute(&params);

        assert_eq!(result.is_error, Some(false));
        assert_eq!(text_of(&result), "https://place.map.kakao.com/26338954");
        assert_eq!(
            result.structured_content.unwrap()["url"],
            "https://place.map.kakao.com/26338954"
        );
    }

    #[test]
    fn test_blank_place_id_is_error_string() {
        for place_id in ["", "   "] {
            let params = CreateShareLinkParams {
                place_id: place_id.to_string(),
            };
            let result = CreateShareLinkTool::execute(&params);

            assert_eq!(result.is_error, Some(true));
            assert_eq!(
                text_of(&result),
                "공유 링크를 생성할 수 없습니다. 오류: Invalid arguments: place_id must not be empty"
            );
            assert_eq!(error_kind_of(&result), "invalid_arguments");
        }
    }
}
