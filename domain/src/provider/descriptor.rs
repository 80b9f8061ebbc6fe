//! Provider descriptor value objects

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Wire protocol spoken by a provider endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderProtocol {
    /// Google Gemini `generateContent`
    #[default]
    Gemini,
    /// OpenAI-compatible `chat/completions` (OpenAI, DeepSeek, ...)
    ChatCompletions,
}

impl ProviderProtocol {
    /// Smallest request body the protocol accepts, used by availability probes
    pub fn default_probe_body(&self, model: Option<&str>) -> Value {
        match self {
            ProviderProtocol::Gemini => json!({
                "contents": [{ "parts": [{ "text": "test" }] }]
            }),
            ProviderProtocol::ChatCompletions => {
                let mut body = json!({
                    "messages": [{ "role": "user", "content": "test" }],
                    "max_tokens": 1
                });
                if let Some(model) = model {
                    body["model"] = json!(model);
                }
                body
            }
        }
    }
}

/// How a provider authenticates requests.
///
/// Secrets are resolved once at registry construction and never logged.
#[derive(Debug, Clone, Default)]
pub enum AuthMode {
    #[default]
    None,
    /// `Authorization: Bearer <token>`
    Bearer { token: SecretString },
    /// `?<param>=<key>` appended to the endpoint
    QueryKey { param: String, key: SecretString },
}

impl AuthMode {
    pub fn bearer(token: impl Into<String>) -> Self {
        AuthMode::Bearer {
            token: SecretString::from(token.into()),
        }
    }

    pub fn query_key(param: impl Into<String>, key: impl Into<String>) -> Self {
        AuthMode::QueryKey {
            param: param.into(),
            key: SecretString::from(key.into()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuthMode::None => "none",
            AuthMode::Bearer { .. } => "bearer",
            AuthMode::QueryKey { .. } => "query-key",
        }
    }
}

/// Static description of one generative-text provider
#[derive(Debug, Clone)]
pub struct ProviderDescriptor {
    name: String,
    priority: u32,
    endpoint: String,
    protocol: ProviderProtocol,
    auth: AuthMode,
    model: Option<String>,
    probe_body: Option<Value>,
}

impl ProviderDescriptor {
    pub fn new(
        name: impl Into<String>,
        priority: u32,
        endpoint: impl Into<String>,
        protocol: ProviderProtocol,
    ) -> Self {
        Self {
            name: name.into(),
            priority,
            endpoint: endpoint.into(),
            protocol,
            auth: AuthMode::None,
            model: None,
            probe_body: None,
        }
    }

    pub fn with_auth(mut self, auth: AuthMode) -> Self {
        self.auth = auth;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Override the protocol's default probe body
    pub fn with_probe_body(mut self, body: Value) -> Self {
        self.probe_body = Some(body);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn protocol(&self) -> ProviderProtocol {
        self.protocol
    }

    pub fn auth(&self) -> &AuthMode {
        &self.auth
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Body sent by availability probes
    pub fn probe_body(&self) -> Value {
        self.probe_body
            .clone()
            .unwrap_or_else(|| self.protocol.default_probe_body(self.model()))
    }
}
