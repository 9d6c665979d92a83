//! HTTP client for the Kakao Local API.
//!
//! A client is built per tool invocation and dropped with it, so no
//! connection state outlives a call. Every request carries the
//! `Authorization: KakaoAK <key>` header and the configured timeout.

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::error::{KakaoError, KakaoResult};
use super::models::Meta;
use crate::core::config::Config;

/// Upstream endpoints, relative to the configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    SearchAddress,
    Coord2RegionCode,
    Coord2Address,
    TransCoord,
    SearchKeyword,
    SearchCategory,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::SearchAddress => "search/address",
            Self::Coord2RegionCode => "geo/coord2regioncode",
            Self::Coord2Address => "geo/coord2address",
            Self::TransCoord => "geo/transcoord",
            Self::SearchKeyword => "search/keyword",
            Self::SearchCategory => "search/category",
        }
    }
}

/// Parsed upstream payload.
#[derive(Debug, Clone, Serialize)]
pub struct KakaoResponse<T> {
    pub documents: Vec<T>,
    pub meta: Option<Meta>,
}

/// Kakao Local API client.
pub struct KakaoClient {
    http: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl KakaoClient {
    /// Build a client from the server configuration.
    ///
    /// A missing API key is not an error here: the request goes out with an
    /// empty key and the upstream rejection is reported like any other
    /// status failure.
    pub fn from_config(config: &Config) -> KakaoResult<Self> {
        let api_key = config
            .credentials
            .kakao_api_key
            .as_deref()
            .unwrap_or_default();

        let mut auth = HeaderValue::from_str(&format!("KakaoAK {api_key}"))
            .map_err(|e| KakaoError::client(format!("Invalid API key: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let timeout_secs = config.kakao.timeout_secs;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| KakaoError::client(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.kakao.base_url.trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }

    /// Full request URL for an endpoint.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}.JSON", self.base_url, endpoint.path())
    }

    /// Issue a single GET and parse the `documents` array into `T`.
    #[instrument(skip(self, params), fields(endpoint = endpoint.path()))]
    pub async fn documents<T>(
        &self,
        endpoint: Endpoint,
        params: &[(&str, &str)],
    ) -> KakaoResult<KakaoResponse<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Kakao API returned {}", status);
            return Err(KakaoError::status(
                status.as_u16(),
                status_message(status, &body),
            ));
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        debug!("Response received: {} bytes", body.len());

        parse_documents(&body)
    }

    fn classify(&self, error: reqwest::Error) -> KakaoError {
        if error.is_timeout() {
            KakaoError::Timeout(self.timeout_secs)
        } else if error.is_builder() {
            KakaoError::client(error.to_string())
        } else {
            KakaoError::transport(error.to_string())
        }
    }
}

/// Parse a response body into typed documents.
///
/// An absent `documents` key yields an empty list. `meta` is informational
/// and its shape differs between endpoints, so a `meta` that does not match
/// [`Meta`] is dropped rather than failing the call.
pub fn parse_documents<T>(body: &[u8]) -> KakaoResult<KakaoResponse<T>>
where
    T: DeserializeOwned,
{
    let value: Value =
        serde_json::from_slice(body).map_err(|e| KakaoError::Decode(e.to_string()))?;

    let Value::Object(mut object) = value else {
        return Err(KakaoError::Schema(
            "expected a JSON object at the top level".to_string(),
        ));
    };

    let documents = match object.remove("documents") {
        None => Vec::new(),
        Some(documents) => {
            serde_json::from_value(documents).map_err(|e| KakaoError::Schema(e.to_string()))?
        }
    };

    let meta = object
        .remove("meta")
        .and_then(|meta| match serde_json::from_value::<Meta>(meta) {
            Ok(meta) => Some(meta),
            Err(e) => {
                debug!("Ignoring partial meta: {}", e);
                None
            }
        });

    Ok(KakaoResponse { documents, meta })
}

/// Prefer the upstream `message` field, fall back to the status reason.
fn status_message(status: StatusCode, body: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Unknown status");
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .map(|message| format!("{reason}: {message}"))
        .unwrap_or_else(|| reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::kakao::models::{TransCoordDocument, Address2CoordinatesDocument};
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> Config {
        let mut config = Config::default();
        config.kakao.base_url = base_url.to_string();
        config.credentials.kakao_api_key = Some("test-key".to_string());
        config
    }

    #[test]
    fn test_url_format() {
        let client = KakaoClient::from_config(&test_config("https://dapi.kakao.com/v2/local/"))
            .unwrap();
        assert_eq!(
            client.url(Endpoint::Coord2RegionCode),
            "https://dapi.kakao.com/v2/local/geo/coord2regioncode.JSON"
        );
        assert_eq!(
            client.url(Endpoint::SearchAddress),
            "https://dapi.kakao.com/v2/local/search/address.JSON"
        );
    }

    #[test]
    fn test_parse_absent_documents_is_empty() {
        let response = parse_documents::<TransCoordDocument>(br#"{"meta":{"total_count":0}}"#)
            .unwrap();
        assert!(response.documents.is_empty());
        assert!(response.meta.is_none());
    }

    #[test]
    fn test_parse_invalid_json_is_decode_error() {
        let err = parse_documents::<TransCoordDocument>(b"<html>oops</html>").unwrap_err();
        assert_eq!(err.kind(), "decode");
    }

    #[test]
    fn test_parse_schema_mismatch() {
        let err = parse_documents::<TransCoordDocument>(br#"{"documents":[{"x":"1"}]}"#)
            .unwrap_err();
        assert_eq!(err.kind(), "schema");

        let err = parse_documents::<TransCoordDocument>(br#"{"documents":null}"#).unwrap_err();
        assert_eq!(err.kind(), "schema");

        let err = parse_documents::<TransCoordDocument>(b"[]").unwrap_err();
        assert_eq!(err.kind(), "schema");
    }

    #[test]
    fn test_parse_keeps_document_count_and_meta() {
        let body = br#"{
            "meta": {"total_count": 2, "pageable_count": 2, "is_end": true},
            "documents": [{"x": "1.0", "y": "2.0"}, {"x": "3.0", "y": "4.0"}]
        }"#;
        let response = parse_documents::<TransCoordDocument>(body).unwrap();
        assert_eq!(response.documents.len(), 2);
        assert_eq!(response.documents[1].x, "3.0");
        assert_eq!(response.meta.unwrap().total_count, 2);
    }

    #[test]
    fn test_status_message_prefers_upstream_message() {
        let body = r#"{"errorType":"AccessDeniedError","message":"cannot find appKey"}"#;
        assert_eq!(
            status_message(StatusCode::UNAUTHORIZED, body),
            "Unauthorized: cannot find appKey"
        );
        assert_eq!(status_message(StatusCode::BAD_GATEWAY, ""), "Bad Gateway");
    }

    #[tokio::test]
    async fn test_request_carries_auth_header_and_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/address.JSON"))
            .and(header("Authorization", "KakaoAK test-key"))
            .and(query_param("query", "판교역로 166"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "documents": [
                    {"address_name": "Seoul", "address_type": "REGION", "x": "127.0", "y": "37.5"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = KakaoClient::from_config(&test_config(&server.uri())).unwrap();
        let response: KakaoResponse<Address2CoordinatesDocument> = client
            .documents(Endpoint::SearchAddress, &[("query", "판교역로 166")])
            .await
            .unwrap();

        assert_eq!(response.documents.len(), 1);
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geo/transcoord.JSON"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "errorType": "AccessDeniedError",
                "message": "wrong appKey"
            })))
            .mount(&server)
            .await;

        let client = KakaoClient::from_config(&test_config(&server.uri())).unwrap();
        let err = client
            .documents::<TransCoordDocument>(Endpoint::TransCoord, &[])
            .await
            .unwrap_err();

        assert!(matches!(err, KakaoError::Status { status: 401, .. }));
        assert_eq!(err.to_string(), "401 Unauthorized: wrong appKey");
    }

    #[tokio::test]
    async fn test_timeout_is_its_own_kind() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "documents": [] }))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let mut config = test_config(&server.uri());
        config.kakao.timeout_secs = 1;
        let client = KakaoClient::from_config(&config).unwrap();
        let err = client
            .documents::<TransCoordDocument>(Endpoint::TransCoord, &[])
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "timeout");
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let client = KakaoClient::from_config(&test_config("http://127.0.0.1:1")).unwrap();
        let err = client
            .documents::<TransCoordDocument>(Endpoint::TransCoord, &[])
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "transport");
    }

    #[test]
    fn test_missing_key_still_builds() {
        let mut config = test_config("https://dapi.kakao.com/v2/local");
        config.credentials.kakao_api_key = None;
        assert!(KakaoClient::from_config(&config).is_ok());
    }
}
