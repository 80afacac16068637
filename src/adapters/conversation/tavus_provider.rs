//! Tavus Provider - Implementation of ConversationProvider for the Tavus CVI API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = TavusConfig::new(api_key)
//!     .with_base_url("https://tavusapi.com/v2")
//!     .with_timeout(Duration::from_secs(30));
//!
//! let provider = TavusProvider::new(config)?;
//! ```
//!
//! # Protocol
//!
//! `POST {base_url}/conversations` with the JSON-serialized `SessionRequest`
//! and an `x-api-key` header. Status >= 400 is reported as a service error
//! carrying the raw body; anything below is parsed as the created session.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::conversation::{SessionRequest, SessionResult};
use crate::ports::{ConversationError, ConversationProvider, ProviderInfo};

/// Production endpoint of the Tavus API.
pub const DEFAULT_BASE_URL: &str = "https://tavusapi.com/v2";

const API_KEY_HEADER: &str = "x-api-key";

/// Configuration for the Tavus provider.
#[derive(Debug, Clone)]
pub struct TavusConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL for the API (default: https://tavusapi.com/v2).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl TavusConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Tavus API provider implementation.
#[derive(Debug)]
pub struct TavusProvider {
    config: TavusConfig,
    client: Client,
}

impl TavusProvider {
    /// Creates a new Tavus provider.
    ///
    /// # Errors
    ///
    /// Returns `ConversationError::Configuration` if the API key is empty or
    /// the HTTP client cannot be built. No network traffic happens here.
    pub fn new(mut config: TavusConfig) -> Result<Self, ConversationError> {
        if config.api_key().trim().is_empty() {
            return Err(ConversationError::configuration(
                "Missing Tavus API key. Cannot proceed.",
            ));
        }

        config.base_url = config.base_url.trim_end_matches('/').to_string();

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ConversationError::configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Builds the create-conversation endpoint URL.
    fn conversations_url(&self) -> String {
        format!("{}/conversations", self.config.base_url)
    }

    /// Sends the request.
    async fn send_request(&self, request: &SessionRequest) -> Result<Response, ConversationError> {
        self.client
            .post(self.conversations_url())
            .header(API_KEY_HEADER, self.config.api_key())
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))
    }

    /// Maps a reqwest failure onto the transport error kinds.
    fn transport_error(&self, e: reqwest::Error) -> ConversationError {
        if e.is_timeout() {
            ConversationError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            ConversationError::network(format!("Connection failed: {}", e))
        } else {
            ConversationError::network(e.to_string())
        }
    }

    /// Turns statuses >= 400 into a service error carrying the raw body.
    ///
    /// A body that cannot be read is a transport failure, not a service error.
    async fn handle_response_status(&self, response: Response) -> Result<Response, ConversationError> {
        let status = response.status().as_u16();

        if status < 400 {
            return Ok(response);
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        tracing::warn!(status, body = %body, "Tavus API returned an error");
        Err(ConversationError::service(status, body))
    }

    /// Parses a success response.
    async fn parse_response(&self, response: Response) -> Result<SessionResult, ConversationError> {
        let response = self.handle_response_status(response).await?;

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        let parsed: TavusConversationResponse = serde_json::from_str(&body)
            .map_err(|e| ConversationError::parse(format!("Invalid conversation response: {}", e)))?;

        Ok(SessionResult::new(
            parsed.conversation_id,
            parsed.conversation_url,
            parsed.status,
            parsed.meeting_token,
        ))
    }
}

#[async_trait]
impl ConversationProvider for TavusProvider {
    async fn create_conversation(
        &self,
        request: &SessionRequest,
    ) -> Result<SessionResult, ConversationError> {
        tracing::info!(
            persona_id = request.persona_id(),
            document_ids = ?request.document_ids(),
            "Using persona with knowledge-base documents"
        );

        let response = self.send_request(request).await?;
        let result = self.parse_response(response).await?;

        tracing::info!(
            conversation_id = result.conversation_id(),
            status = result.status(),
            "Tavus conversation created"
        );

        Ok(result)
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("tavus", self.config.base_url.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tavus API types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
struct TavusConversationResponse {
    conversation_id: String,
    conversation_url: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    meeting_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> SessionRequest {
        SessionRequest::builder("p1", "r1").build().unwrap()
    }

    fn provider_for(server: &MockServer) -> TavusProvider {
        TavusProvider::new(TavusConfig::new("test-key").with_base_url(server.uri())).unwrap()
    }

    #[test]
    fn config_builder_works() {
        let config = TavusConfig::new("test-key")
            .with_base_url("https://custom.api.com")
            .with_timeout(Duration::from_secs(10));

        assert_eq!(config.base_url, "https://custom.api.com");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn config_defaults() {
        let config = TavusConfig::new("k");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn empty_api_key_fails_construction() {
        let err = TavusProvider::new(TavusConfig::new("")).unwrap_err();
        assert!(matches!(err, ConversationError::Configuration(_)));
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        let provider =
            TavusProvider::new(TavusConfig::new("k").with_base_url("https://api.test/v2//")).unwrap();
        assert_eq!(provider.conversations_url(), "https://api.test/v2/conversations");
        assert_eq!(provider.provider_info().base_url, "https://api.test/v2");
    }

    #[test]
    fn debug_output_hides_api_key() {
        let config = TavusConfig::new("super-secret");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }

    #[tokio::test]
    async fn success_without_status_defaults_to_unknown() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/conversations"))
            .and(header("x-api-key", "test-key"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"conversation_id":"c1","conversation_url":"https://x/c1"}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let result = provider_for(&server)
            .create_conversation(&request())
            .await
            .unwrap();

        assert_eq!(result, SessionResult::new("c1", "https://x/c1", None, None));
        assert_eq!(result.status(), "unknown");
    }

    #[tokio::test]
    async fn success_keeps_status_and_meeting_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/conversations"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "conversation_id": "c2",
                "conversation_url": "https://x/c2",
                "status": "active",
                "meeting_token": "tok",
            })))
            .mount(&server)
            .await;

        let result = provider_for(&server)
            .create_conversation(&request())
            .await
            .unwrap();

        assert_eq!(result.status(), "active");
        assert_eq!(result.meeting_token(), Some("tok"));
    }

    #[tokio::test]
    async fn sends_payload_without_absent_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/conversations"))
            .and(body_json(json!({
                "persona_id": "p1",
                "replica_id": "r1",
                "require_auth": false,
                "max_participants": 2,
                "test_mode": false,
                "audio_only": false,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "conversation_id": "c1",
                "conversation_url": "https://x/c1",
            })))
            .expect(1)
            .mount(&server)
            .await;

        provider_for(&server)
            .create_conversation(&request())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn error_status_returns_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/conversations"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .expect(1)
            .mount(&server)
            .await;

        let err = provider_for(&server)
            .create_conversation(&request())
            .await
            .unwrap_err();

        assert_eq!(err, ConversationError::service(401, "unauthorized"));
    }

    #[tokio::test]
    async fn invalid_json_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = provider_for(&server)
            .create_conversation(&request())
            .await
            .unwrap_err();

        assert!(matches!(err, ConversationError::Parse(_)));
    }

    #[tokio::test]
    async fn missing_required_key_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"conversation_id": "c1"})),
            )
            .mount(&server)
            .await;

        let err = provider_for(&server)
            .create_conversation(&request())
            .await
            .unwrap_err();

        assert!(matches!(err, ConversationError::Parse(msg) if msg.contains("conversation_url")));
    }

    #[tokio::test]
    async fn slow_response_times_out_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"conversation_id": "c1", "conversation_url": "u"}))
                    .set_delay(Duration::from_secs(5)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let provider = TavusProvider::new(
            TavusConfig::new("test-key")
                .with_base_url(server.uri())
                .with_timeout(Duration::from_millis(200)),
        )
        .unwrap();

        let err = provider.create_conversation(&request()).await.unwrap_err();

        assert!(err.is_transport());
        assert!(matches!(err, ConversationError::Timeout { .. }));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let provider = TavusProvider::new(
            TavusConfig::new("test-key")
                .with_base_url("http://127.0.0.1:1")
                .with_timeout(Duration::from_secs(2)),
        )
        .unwrap();

        let err = provider.create_conversation(&request()).await.unwrap_err();

        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn truncated_error_body_is_a_transport_error() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 4096];
            while !received.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    return;
                }
                received.extend_from_slice(&buf[..n]);
            }

            // Promise 100 bytes, send 7, then close the write side.
            socket
                .write_all(
                    b"HTTP/1.1 502 Bad Gateway\r\ncontent-length: 100\r\n\r\npartial",
                )
                .await
                .unwrap();
            socket.shutdown().await.unwrap();

            // Drain until the client hangs up.
            while let Ok(n) = socket.read(&mut buf).await {
                if n == 0 {
                    break;
                }
            }
        });

        let provider = TavusProvider::new(
            TavusConfig::new("test-key")
                .with_base_url(format!("http://{}", addr))
                .with_timeout(Duration::from_secs(5)),
        )
        .unwrap();

        let err = provider.create_conversation(&request()).await.unwrap_err();

        assert!(err.is_transport(), "expected transport error, got {:?}", err);
        assert!(!matches!(err, ConversationError::Service { .. }));
    }

    #[tokio::test]
    async fn identical_requests_are_not_deduplicated() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "conversation_id": "c1",
                "conversation_url": "https://x/c1",
            })))
            .expect(2)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let request = request();
        provider.create_conversation(&request).await.unwrap();
        provider.create_conversation(&request).await.unwrap();
    }
}
