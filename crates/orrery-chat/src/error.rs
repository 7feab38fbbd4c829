//! Error types for chat requests.

use thiserror::Error;

pub type ChatResult<T> = Result<T, ChatError>;

/// Why a chat request failed. Only logged; the widget shows one static
/// message for all of them.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} {text}")]
    Status { status: u16, text: String },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unexpected payload: {0}")]
    Payload(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = ChatError::Status { status: 502, text: "Bad Gateway".into() };
        assert_eq!(e.to_string(), "HTTP 502 Bad Gateway");
        let e: ChatError = serde_json::from_str::<u32>("x").unwrap_err().into();
        assert!(e.to_string().starts_with("Decode error"));
    }
}
