//! Google Gemini `generateContent` envelope

use devtype_domain::RenderedPrompt;
use serde_json::{Value, json};

/// JSON pointer to the generated text in a response
pub const TEXT_POINTER: &str = "/candidates/0/content/parts/0/text";

pub fn request_body(prompt: &RenderedPrompt) -> Value {
    let mut body = json!({
        "contents": [{ "parts": [{ "text": prompt.user }] }],
        "generationConfig": {
            "temperature": prompt.temperature,
            "maxOutputTokens": prompt.max_tokens,
        }
    });
    if let Some(system) = &prompt.system {
        body["systemInstruction"] = json!({ "parts": [{ "text": system }] });
    }
    body
}

pub fn response_text(envelope: &Value) -> Option<&str> {
    envelope.pointer(TEXT_POINTER).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(system: Option<&str>) -> RenderedPrompt {
        RenderedPrompt {
            system: system.map(str::to_string),
            user: "Generate 8 questions".to_string(),
            temperature: 0.8,
            max_tokens: 2000,
        }
    }

    #[test]
    fn test_request_body_without_system() {
        let body = request_body(&prompt(None));
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Generate 8 questions");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 2000);
        assert_eq!(body["generationConfig"]["temperature"], 0.8);
        assert!(body.get("systemInstruction").is_none());
    }

    #[test]
    fn test_request_body_with_system() {
        let body = request_body(&prompt(Some("You are a quiz master.")));
        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            "You are a quiz master."
        );
    }

    #[test]
    fn test_response_text() {
        let envelope = json!({
            "candidates": [{ "content": { "parts": [{ "text": "[{\"a\":1}]" }] } }]
        });
        assert_eq!(response_text(&envelope), Some("[{\"a\":1}]"));
        assert_eq!(response_text(&json!({ "candidates": [] })), None);
        assert_eq!(response_text(&json!({ "error": "quota" })), None);
    }
}
