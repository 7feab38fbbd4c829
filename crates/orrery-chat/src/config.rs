use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/message/";
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred. Please try again later.";

/// Name of the JSON field carrying the user's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestField {
    /// Conversational endpoint: `{ "message": ... }`.
    #[default]
    Message,
    /// Image-generation endpoint: `{ "user_input": ... }`.
    UserInput,
}

impl RequestField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::UserInput => "user_input",
        }
    }
}

/// Widget configuration. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Receives the first message of a conversation (and every message when
    /// `follow_up_endpoint` is unset).
    pub endpoint: String,
    /// Receives messages once the conversation has had a reply.
    pub follow_up_endpoint: Option<String>,
    /// POSTed with an empty body to drop the server-side conversation.
    pub reset_endpoint: Option<String>,
    pub request_field: RequestField,
    /// Shown in the log for any failed request.
    pub error_message: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            follow_up_endpoint: None,
            reset_endpoint: None,
            request_field: RequestField::Message,
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}

impl ChatConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(ChatConfig::from_json("{}").unwrap(), ChatConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = ChatConfig::from_json(
            r#"{ "endpoint": "http://localhost:5000/generate", "request_field": "user_input" }"#,
        )
        .unwrap();
        assert_eq!(config.endpoint, "http://localhost:5000/generate");
        assert_eq!(config.request_field, RequestField::UserInput);
        assert_eq!(config.error_message, DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn conversation_endpoints() {
        let config = ChatConfig::from_json(
            r#"{
                "endpoint": "http://127.0.0.1:8000/start_of_conversation/",
                "follow_up_endpoint": "http://127.0.0.1:8000/continue_conversation/",
                "reset_endpoint": "http://127.0.0.1:8000/switch_convo/",
                "request_field": "user_input"
            }"#,
        )
        .unwrap();
        assert_eq!(
            config.follow_up_endpoint.as_deref(),
            Some("http://127.0.0.1:8000/continue_conversation/")
        );
        assert_eq!(config.reset_endpoint.as_deref(), Some("http://127.0.0.1:8000/switch_convo/"));
        assert_eq!(ChatConfig::default().follow_up_endpoint, None);
    }

    #[test]
    fn unknown_field_name_is_rejected() {
        assert!(ChatConfig::from_json(r#"{ "request_field": "prompt" }"#).is_err());
    }
}
