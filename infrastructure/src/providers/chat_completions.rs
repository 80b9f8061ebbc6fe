//! OpenAI-compatible `chat/completions` envelope (OpenAI, DeepSeek, ...)

use devtype_domain::RenderedPrompt;
use serde_json::{Value, json};

/// JSON pointer to the generated text in a response
pub const TEXT_POINTER: &str = "/choices/0/message/content";

pub fn request_body(prompt: &RenderedPrompt, model: Option<&str>) -> Value {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = &prompt.system {
        messages.push(json!({ "role": "system", "content": system }));
    }
    messages.push(json!({ "role": "user", "content": prompt.user }));

    let mut body = json!({
        "messages": messages,
        "temperature": prompt.temperature,
        "max_tokens": prompt.max_tokens,
    });
    if let Some(model) = model {
        body["model"] = json!(model);
    }
    body
}

pub fn response_text(envelope: &Value) -> Option<&str> {
    envelope.pointer(TEXT_POINTER).and_then(Value::as_str)
}
