//! Common utilities shared across the Kakao Maps tools.
//!
//! Every HTTP-backed tool goes through the same steps: fetch typed
//! documents, then flatten the outcome into a `CallToolResult`. Failures
//! become the tool's localized message (`<prefix> 오류: <description>`) with
//! the structured `{kind, message}` attached; they never surface as
//! protocol errors.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Content, Tool},
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use tracing::{error, info};

use crate::core::config::Config;
use crate::domains::kakao::{Endpoint, KakaoClient, KakaoError, KakaoResponse, KakaoResult};

/// Build the user-facing error string.
pub fn error_message(prefix: &str, description: impl std::fmt::Display) -> String {
    format!("{prefix} 오류: {description}")
}

/// Create an error result carrying both the legacy string and its kind.
pub fn error_result(prefix: &str, kind: &str, description: impl std::fmt::Display) -> CallToolResult {
    let description = description.to_string();
    let message = error_message(prefix, &description);
    error!("{}", message);

    CallToolResult {
        content: vec![Content::text(message)],
        structured_content: Some(serde_json::json!({
            "error": { "kind": kind, "message": description }
        })),
        is_error: Some(true),
        meta: None,
    }
}

/// Create a success result listing the documents.
///
/// The text content is the JSON array of documents; the structured content
/// additionally carries the upstream `meta` when it was present.
pub fn documents_result<T: Serialize>(prefix: &str, response: &KakaoResponse<T>) -> CallToolResult {
    let text = match serde_json::to_string(&response.documents) {
        Ok(text) => text,
        Err(e) => return error_result(prefix, "serialization", e),
    };

    match serde_json::to_value(response) {
        Ok(structured) => CallToolResult {
            content: vec![Content::text(text)],
            structured_content: Some(structured),
            is_error: Some(false),
            meta: None,
        },
        Err(e) => error_result(prefix, "serialization", e),
    }
}

/// Fetch documents from an endpoint with a client scoped to this call.
pub async fn fetch_documents<T>(
    config: &Config,
    endpoint: Endpoint,
    params: &[(&str, &str)],
) -> KakaoResult<KakaoResponse<T>>
where
    T: DeserializeOwned,
{
    let client = KakaoClient::from_config(config)?;
    client.documents(endpoint, params).await
}

/// Flatten an upstream outcome into the tool result.
pub fn respond<T: Serialize>(prefix: &str, outcome: KakaoResult<KakaoResponse<T>>) -> CallToolResult {
    match outcome {
        Ok(response) => {
            info!("Returning {} document(s)", response.documents.len());
            documents_result(prefix, &response)
        }
        Err(e) => kakao_error_result(prefix, &e),
    }
}

/// Create an error result from a classified upstream failure.
pub fn kakao_error_result(prefix: &str, error: &KakaoError) -> CallToolResult {
    error_result(prefix, error.kind(), error)
}

/// Create a ToolRoute that parses `P` from the call arguments.
///
/// Argument errors (missing fields, unknown codes) are rejected as
/// `invalid_params` before `execute` runs.
pub fn tool_route<S, P, F, Fut>(tool: Tool, config: Arc<Config>, execute: F) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
    P: DeserializeOwned + Send + 'static,
    F: Fn(P, Arc<Config>) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = CallToolResult> + Send + 'static,
{
    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let config = config.clone();
        let execute = execute.clone();
        async move {
            let params: P = serde_json::from_value(serde_json::Value::Object(args))
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

            Ok(execute(params, config).await)
        }
        .boxed()
    })
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::domains::kakao::models::TransCoordDocument;

    #[test]
    fn test_error_message_format() {
        assert_eq!(
            error_message("좌표 변환을 할 수 없습니다.", "boom"),
            "좌표 변환을 할 수 없습니다. 오류: boom"
        );
    }

    #[test]
    fn test_kakao_error_result() {
        let result = kakao_error_result("장소 검색을 할 수 없습니다.", &KakaoError::Timeout(10));
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            "장소 검색을 할 수 없습니다. 오류: Request timed out after 10 seconds"
        );
        assert_eq!(error_kind_of(&result), "timeout");
    }

    #[test]
    fn test_documents_result_shape() {
        let response = KakaoResponse {
            documents: vec![TransCoordDocument {
                x: "127.0".to_string(),
                y: "37.5".to_string(),
            }],
            meta: None,
        };
        let result = documents_result("prefix", &response);

        assert_eq!(result.is_error, Some(false));
        assert_eq!(documents_of(&result), vec![serde_json::json!({"x": "127.0", "y": "37.5"})]);
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["documents"][0]["x"], "127.0");
        assert!(structured["meta"].is_null());
    }
}
