//! HTTP provider gateway.
//!
//! [`HttpProviderGateway`] implements the
//! [`ProviderGateway`](devtype_application::ProviderGateway) port over
//! reqwest. Each [`ProviderProtocol`] has its own envelope codec:
//!
//! - [`gemini`]: Google `generateContent`
//! - [`chat_completions`]: OpenAI-compatible `chat/completions`
//!
//! Credentials are attached by [`auth::authorize`] and never appear in
//! errors or logs.

pub mod auth;
pub mod chat_completions;
pub mod gemini;

use async_trait::async_trait;
use devtype_application::{CascadeSettings, ProviderError, ProviderGateway};
use devtype_domain::extraction::EXCERPT_CHARS;
use devtype_domain::util::excerpt;
use devtype_domain::{ProviderDescriptor, ProviderProtocol, RenderedPrompt};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Characters of an error body kept in [`ProviderError::Status`]
const STATUS_BODY_CHARS: usize = 200;

/// Gateway that talks to providers over HTTPS
#[derive(Debug, Clone)]
pub struct HttpProviderGateway {
    client: reqwest::Client,
    probe_timeout: Duration,
    request_timeout: Duration,
}

impl HttpProviderGateway {
    pub fn new(settings: CascadeSettings) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()?;
        Ok(Self::with_client(client, settings))
    }

    /// Use a preconfigured client (proxies, TLS roots, ...)
    pub fn with_client(client: reqwest::Client, settings: CascadeSettings) -> Self {
        Self {
            client,
            probe_timeout: settings.probe_timeout,
            request_timeout: settings.request_timeout,
        }
    }

    fn post(&self, provider: &ProviderDescriptor, body: &Value, timeout: Duration) -> reqwest::RequestBuilder {
        auth::authorize(self.client.post(provider.endpoint()), provider.auth())
            .timeout(timeout)
            .json(body)
    }

    fn transport_error(&self, error: reqwest::Error) -> ProviderError {
        if error.is_timeout() {
            ProviderError::Timeout(self.request_timeout)
        } else {
            // The URL may carry a query-string key
            ProviderError::Connection(error.without_url().to_string())
        }
    }
}

/// Any answer except "not found" or "forbidden" means the provider is up
fn is_reachable(status: StatusCode) -> bool {
    !matches!(status, StatusCode::NOT_FOUND | StatusCode::FORBIDDEN)
}

fn encode(provider: &ProviderDescriptor, prompt: &RenderedPrompt) -> Value {
    match provider.protocol() {
        ProviderProtocol::Gemini => gemini::request_body(prompt),
        ProviderProtocol::ChatCompletions => {
            chat_completions::request_body(prompt, provider.model())
        }
    }
}

fn decode(protocol: ProviderProtocol, envelope: &Value) -> Result<&str, String> {
    let (text, pointer) = match protocol {
        ProviderProtocol::Gemini => (gemini::response_text(envelope), gemini::TEXT_POINTER),
        ProviderProtocol::ChatCompletions => (
            chat_completions::response_text(envelope),
            chat_completions::TEXT_POINTER,
        ),
    };
    text.ok_or_else(|| format!("missing text at {}", pointer))
}

#[async_trait]
impl ProviderGateway for HttpProviderGateway {
    async fn probe(&self, provider: &ProviderDescriptor) -> bool {
        let body = provider.probe_body();
        match self.post(provider, &body, self.probe_timeout).send().await {
            Ok(response) => {
                let status = response.status();
                let reachable = is_reachable(status);
                debug!(
                    "Probe {} answered {} (reachable: {})",
                    provider.name(),
                    status.as_u16(),
                    reachable
                );
                reachable
            }
            Err(e) => {
                debug!("Probe {} failed: {}", provider.name(), e.without_url());
                false
            }
        }
    }

    async fn request(
        &self,
        provider: &ProviderDescriptor,
        prompt: &RenderedPrompt,
    ) -> Result<String, ProviderError> {
        let body = encode(provider, prompt);
        debug!(
            "Requesting {} ({:?}, auth: {})",
            provider.name(),
            provider.protocol(),
            provider.auth().label()
        );

        let response = self
            .post(provider, &body, self.request_timeout)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            warn!("{} returned HTTP {}", provider.name(), status.as_u16());
            let message = if text.trim().is_empty() {
                status.canonical_reason().unwrap_or("request failed").to_string()
            } else {
                excerpt(text.trim(), STATUS_BODY_CHARS).to_string()
            };
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Value = serde_json::from_str(&text).map_err(|e| ProviderError::Envelope {
            message: format!("response is not JSON: {}", e),
            excerpt: excerpt(&text, EXCERPT_CHARS).to_string(),
        })?;

        decode(provider.protocol(), &envelope)
            .map(str::to_string)
            .map_err(|message| ProviderError::Envelope {
                message,
                excerpt: excerpt(&text, EXCERPT_CHARS).to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devtype_domain::AuthMode;
    use serde_json::json;
    use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const GEMINI_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";
    const CHAT_PATH: &str = "/v1/chat/completions";

    fn gateway() -> HttpProviderGateway {
        let settings = CascadeSettings::default()
            .with_probe_timeout(Duration::from_secs(2))
            .with_request_timeout(Duration::from_secs(2));
        HttpProviderGateway::new(settings).unwrap()
    }

    fn gemini(server: &MockServer) -> ProviderDescriptor {
        ProviderDescriptor::new(
            "Gemini",
            0,
            format!("{}{}", server.uri(), GEMINI_PATH),
            ProviderProtocol::Gemini,
        )
        .with_auth(AuthMode::query_key("key", "gm-secret"))
    }

    fn deepseek(server: &MockServer) -> ProviderDescriptor {
        ProviderDescriptor::new(
            "DeepSeek",
            1,
            format!("{}{}", server.uri(), CHAT_PATH),
            ProviderProtocol::ChatCompletions,
        )
        .with_auth(AuthMode::bearer("ds-secret"))
        .with_model("deepseek-chat")
    }

    /// An endpoint with nothing listening behind it
    fn closed_endpoint() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{}{}", port, GEMINI_PATH)
    }

    fn prompt() -> RenderedPrompt {
        RenderedPrompt {
            system: Some("You are a quiz master.".to_string()),
            user: "Generate 8 questions".to_string(),
            temperature: 0.8,
            max_tokens: 2000,
        }
    }

    #[tokio::test]
    async fn test_probe_sends_minimal_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GEMINI_PATH))
            .and(query_param("key", "gm-secret"))
            .and(body_json(json!({"contents": [{"parts": [{"text": "test"}]}]})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        assert!(gateway().probe(&gemini(&server)).await);
    }

    #[tokio::test]
    async fn test_probe_status_interpretation() {
        for (status, expected) in [(200, true), (400, true), (429, true), (500, true), (403, false), (404, false)] {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(ResponseTemplate::new(status))
                .mount(&server)
                .await;

            assert_eq!(
                gateway().probe(&deepseek(&server)).await,
                expected,
                "status {}",
                status
            );
        }
    }

    #[tokio::test]
    async fn test_probe_unreachable_host() {
        let provider = ProviderDescriptor::new("Gemini", 0, closed_endpoint(), ProviderProtocol::Gemini);
        assert!(!gateway().probe(&provider).await);
    }

    #[tokio::test]
    async fn test_probe_timeout_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let settings = CascadeSettings::default().with_probe_timeout(Duration::from_millis(50));
        let gateway = HttpProviderGateway::new(settings).unwrap();
        assert!(!gateway.probe(&gemini(&server)).await);
    }

    #[tokio::test]
    async fn test_gemini_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GEMINI_PATH))
            .and(query_param("key", "gm-secret"))
            .and(body_partial_json(json!({
                "contents": [{"parts": [{"text": "Generate 8 questions"}]}],
                "systemInstruction": {"parts": [{"text": "You are a quiz master."}]}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "```json\n[]\n```"}]}}]
            })))
            .mount(&server)
            .await;

        let text = gateway().request(&gemini(&server), &prompt()).await.unwrap();
        assert_eq!(text, "```json\n[]\n```");
    }

    #[tokio::test]
    async fn test_chat_completions_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(CHAT_PATH))
            .and(header("authorization", "Bearer ds-secret"))
            .and(body_partial_json(json!({
                "model": "deepseek-chat",
                "max_tokens": 2000,
                "messages": [
                    {"role": "system", "content": "You are a quiz master."},
                    {"role": "user", "content": "Generate 8 questions"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "[{\"type\": \"x\"}]"}}]
            })))
            .mount(&server)
            .await;

        let text = gateway().request(&deepseek(&server), &prompt()).await.unwrap();
        assert_eq!(text, "[{\"type\": \"x\"}]");
    }

    #[tokio::test]
    async fn test_non_success_status_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let error = gateway().request(&deepseek(&server), &prompt()).await.unwrap_err();
        assert_eq!(
            error,
            ProviderError::Status {
                status: 503,
                message: "overloaded".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_missing_text_is_envelope_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        match gateway().request(&gemini(&server), &prompt()).await {
            Err(ProviderError::Envelope { message, excerpt }) => {
                assert!(message.contains(gemini::TEXT_POINTER));
                assert_eq!(excerpt, "{\"candidates\":[]}");
            }
            other => panic!("expected envelope error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_envelope_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let error = gateway().request(&deepseek(&server), &prompt()).await.unwrap_err();
        assert!(matches!(error, ProviderError::Envelope { .. }));
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"choices": []}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let settings = CascadeSettings::default().with_request_timeout(Duration::from_millis(50));
        let gateway = HttpProviderGateway::new(settings).unwrap();
        let error = gateway.request(&deepseek(&server), &prompt()).await.unwrap_err();
        assert_eq!(error, ProviderError::Timeout(Duration::from_millis(50)));
    }

    #[tokio::test]
    async fn test_connection_error_does_not_leak_key() {
        let provider = ProviderDescriptor::new("Gemini", 0, closed_endpoint(), ProviderProtocol::Gemini)
            .with_auth(AuthMode::query_key("key", "gm-secret"));

        let error = gateway().request(&provider, &prompt()).await.unwrap_err();
        assert!(matches!(error, ProviderError::Connection(_)));
        assert!(!error.to_string().contains("gm-secret"));
    }
}
