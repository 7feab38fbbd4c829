/// Wire format of the chat endpoint.
///
/// Request: `{ "<field>": text, "id"?: thread }`.
/// Response: an image (any `image/*` content type), or JSON
/// `{ "response" | "assistant_response": text, "id"?: thread }`.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::RequestField;
use crate::error::{ChatError, ChatResult};

/// A request ready to be sent by a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub endpoint: String,
    /// JSON body.
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextReply {
    #[serde(alias = "assistant_response")]
    pub response: String,
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(TextReply),
    Image { url: String },
}

pub fn encode_request(field: RequestField, text: &str, thread_id: Option<&str>) -> ChatResult<String> {
    let mut body = Map::new();
    body.insert(field.as_str().to_string(), Value::String(text.to_string()));
    if let Some(id) = thread_id {
        body.insert("id".to_string(), Value::String(id.to_string()));
    }
    Ok(serde_json::to_string(&body)?)
}

pub fn is_image(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.trim_start().to_ascii_lowercase().starts_with("image/"))
        .unwrap_or(false)
}

pub fn decode_text_reply(body: &str) -> ChatResult<TextReply> {
    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(ChatError::Payload(format!("expected a JSON object, got {value}")));
    }
    Ok(serde_json::from_value(value)?)
}
