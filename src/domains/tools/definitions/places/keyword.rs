//! Keyword place search tool.

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

/// Parameters for keyword place search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchPlacesByKeywordParams {
    /// Search keyword.
    #[schemars(description = "Keyword to search for, e.g. '카카오프렌즈'")]
    pub query: String,

    /// Category group to restrict results to.
    #[schemars(description = "Category group code (MT1, CS2, PS3, SC4, AC5, PK6, OL7, SW8, BK9, \
         CT1, AG2, PO3, AT4, AD5, FD6, CE7, HP8, PM9)")]
    pub category_group_code: CategoryGroupCode,
}

impl SearchPlacesByKeywordParams {
    /// Upstream query parameters.
    pub fn query(&self) -> [(&'static str, &str); 2] {
        [
            ("query", self.query.as_str()),
            ("category_group_code", self.category_group_code.as_str()),
        ]
    }
}

/// Keyword place search tool.
pub struct SearchPlacesByKeywordTool;

impl SearchPlacesByKeywordTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_places_by_keyword";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search places by keyword within a category group. \
         Returns place name, category, phone, lot-number and road-name address, x/y and the \
         place detail page URL.";

    pub(super) const ERROR_PREFIX: &'static str = "장소 검색을 할 수 없습니다.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(query = %params.query, category = %params.category_group_code))]
    pub async fn execute(params: &SearchPlacesByKeywordParams, config: &Config) -> CallToolResult {
        info!("Searching places by keyword");
        respond(Self::ERROR_PREFIX, Self::search(params, config).await)
    }

    /// Query the keyword search endpoint.
    pub async fn search(
        params: &SearchPlacesByKeywordParams,
        config: &Config,
    ) -> KakaoResult<KakaoResponse<PlacesDocument>> {
        fetch_documents(config, Endpoint::SearchKeyword, &params.query()).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchPlacesByKeywordParams>(),
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
            |params: SearchPlacesByKeywordParams, config: Arc<Config>| async move {
                Self::execute(&params, &config).await
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::test_support::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn place(id: &str, code: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "place_name": "카카오프렌즈 코엑스점",
            "category_name": "가정,생활 > 문구,사무용품 > 디자인문구 > 카카오프렌즈",
            "category_group_code": code,
            "category_group_name": "",
            "phone": "02-6002-1880",
            "address_name": "서울 강남구 삼성동 159",
            "road_address_name": "서울 강남구 영동대로 513",
            "x": "127.05902969025047",
            "y": "37.51207412593136",
            "place_url": format!("http://place.map.kakao.com/{id}"),
            "distance": ""
        })
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let result: Result<SearchPlacesByKeywordParams, _> =
            serde_json::from_str(r#"{"query": "coffee", "category_group_code": "XX9"}"#);
        assert!(result.is_err());

        let result: Result<SearchPlacesByKeywordParams, _> =
            serde_json::from_str(r#"{"query": "coffee"}"#);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_search_sends_keyword_and_category() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/keyword.JSON"))
            .and(query_param("query", "카카오프렌즈"))
            .and(query_param("category_group_code", "CE7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "meta": {
                    "total_count": 2,
                    "pageable_count": 2,
                    "is_end": true,
                    "same_name": {"region": [], "keyword": "카카오프렌즈", "selected_region": ""}
                },
                "documents": [place("26338954", "CE7"), place("1", "")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params: SearchPlacesByKeywordParams =
            serde_json::from_str(r#"{"query": "카카오프렌즈", "category_group_code": "CE7"}"#)
                .unwrap();
        let response = SearchPlacesByKeywordTool::search(&params, &config_for(&server.uri()))
            .await
            .unwrap();

        assert_eq!(response.documents.len(), 2);
        assert_eq!(
            response.documents[0].category_group_code,
            Some(CategoryGroupCode::Cafe)
        );
        assert_eq!(response.documents[1].category_group_code, None);
        assert_eq!(response.documents[0].distance, "");
        let meta = response.meta.unwrap();
        assert_eq!(meta.same_name.unwrap().keyword, "카카오프렌즈");
    }

    #[tokio::test]
    async fn test_rejected_key_is_error_string() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "errorType": "AccessDeniedError",
                "message": "cannot find appKey"
            })))
            .mount(&server)
            .await;

        let params: SearchPlacesByKeywordParams =
            serde_json::from_str(r#"{"query": "약국", "category_group_code": "PM9"}"#).unwrap();
        let result = SearchPlacesByKeywordTool::execute(&params, &config_for(&server.uri())).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            "장소 검색을 할 수 없습니다. 오류: 401 Unauthorized: cannot find appKey"
        );
    }
}
