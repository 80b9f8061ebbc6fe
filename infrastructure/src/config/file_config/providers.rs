//! Provider entries from TOML (`[[providers]]` array)

use devtype_domain::{AuthMode, ProviderDescriptor, ProviderProtocol};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// How a provider expects its API key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileAuthMode {
    #[default]
    None,
    /// `Authorization: Bearer <key>`
    Bearer,
    /// `?<query_param>=<key>`
    QueryKey,
}

/// One generative-text provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileProviderConfig {
    /// Display name, also the outcome's source label
    pub name: String,
    /// Lower runs first
    #[serde(default)]
    pub priority: u32,
    pub endpoint: String,
    #[serde(default)]
    pub protocol: ProviderProtocol,
    #[serde(default)]
    pub auth: FileAuthMode,
    /// Environment variable holding the API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
    /// Direct API key (not recommended, use `api_key_env` instead)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Query parameter name for `query_key` auth
    #[serde(default = "default_query_param")]
    pub query_param: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Replaces the protocol's default probe body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probe_body: Option<Value>,
}

fn default_query_param() -> String {
    "key".to_string()
}

impl FileProviderConfig {
    pub fn gemini() -> Self {
        Self {
            name: "Gemini".to_string(),
            priority: 0,
            endpoint: "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
                .to_string(),
            protocol: ProviderProtocol::Gemini,
            auth: FileAuthMode::QueryKey,
            api_key_env: Some("GEMINI_API_KEY".to_string()),
            api_key: None,
            query_param: default_query_param(),
            model: None,
            probe_body: None,
        }
    }

    pub fn deepseek() -> Self {
        Self {
            name: "DeepSeek".to_string(),
            priority: 1,
            endpoint: "https://api.deepseek.com/v1/chat/completions".to_string(),
            protocol: ProviderProtocol::ChatCompletions,
            auth: FileAuthMode::Bearer,
            api_key_env: Some("DEEPSEEK_API_KEY".to_string()),
            api_key: None,
            query_param: default_query_param(),
            model: Some("deepseek-chat".to_string()),
            probe_body: None,
        }
    }

    /// Resolve the API key, preferring the inline value over the environment
    fn resolve_key(&self, resolve_env: &dyn Fn(&str) -> Option<String>) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| self.api_key_env.as_deref().and_then(resolve_env))
            .filter(|key| !key.trim().is_empty())
    }

    /// Build the immutable descriptor, resolving the credential once
    pub fn to_descriptor(&self, resolve_env: &dyn Fn(&str) -> Option<String>) -> ProviderDescriptor {
        let auth = match self.auth {
            FileAuthMode::None => AuthMode::None,
            FileAuthMode::Bearer | FileAuthMode::QueryKey => match self.resolve_key(resolve_env) {
                Some(key) if self.auth == FileAuthMode::Bearer => AuthMode::bearer(key),
                Some(key) => AuthMode::query_key(self.query_param.clone(), key),
                None => {
                    warn!(
                        "No API key for provider {} (set {}); requests will be unauthenticated",
                        self.name,
                        self.api_key_env.as_deref().unwrap_or("api_key")
                    );
                    AuthMode::None
                }
            },
        };

        let mut descriptor =
            ProviderDescriptor::new(&self.name, self.priority, &self.endpoint, self.protocol)
                .with_auth(auth);
        if let Some(model) = &self.model {
            descriptor = descriptor.with_model(model);
        }
        if let Some(body) = &self.probe_body {
            descriptor = descriptor.with_probe_body(body.clone());
        }
        descriptor
    }
}
