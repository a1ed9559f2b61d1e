//! Anthropic Messages API wire types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/messages`.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct MessagesRequest {
    /// Model identifier
    model: String,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Optional system prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    /// Conversation messages
    messages: Vec<WireMessage>,
}

impl MessagesRequest {
    /// Creates a new request body.
    pub fn new(
        model: impl Into<String>,
        max_tokens: u32,
        system: Option<String>,
        messages: Vec<WireMessage>,
    ) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            system,
            messages,
        }
    }
}

/// One message in the request body.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct WireMessage {
    /// Role of the message sender
    role: String,
    /// Content blocks
    content: Vec<WireBlock>,
}

impl WireMessage {
    /// Creates a new wire message.
    pub fn new(role: impl Into<String>, content: Vec<WireBlock>) -> Self {
        Self {
            role: role.into(),
            content,
        }
    }
}

/// Content block in a request message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WireBlock {
    /// Text content
    Text {
        /// Text content
        text: String,
    },
    /// Base64-embedded image content
    Image {
        /// Image source
        source: ImageSource,
    },
}

/// Base64 image source for the Messages API.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct ImageSource {
    /// Source type (always "base64")
    r#type: String,
    /// Media type
    media_type: String,
    /// Base64-encoded image data
    data: String,
}

impl ImageSource {
    /// Creates a base64 image source.
    pub fn base64(media_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            r#type: "base64".to_string(),
            media_type: media_type.into(),
            data: data.into(),
        }
    }
}

/// Response body from `POST /v1/messages`.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct MessagesResponse {
    /// Response ID
    id: String,
    /// Response type
    #[serde(rename = "type")]
    response_type: String,
    /// Role (always "assistant")
    role: String,
    /// Content blocks
    content: Vec<ResponseContent>,
    /// Model used
    model: String,
    /// Stop reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stop_reason: Option<String>,
    /// Token usage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    usage: Option<Usage>,
}

/// Content block in a response.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct ResponseContent {
    /// Content type; only "text" blocks are surfaced to callers
    #[serde(rename = "type")]
    content_type: String,
    /// Text content, empty for non-text blocks
    #[serde(default)]
    text: String,
}

/// Token usage reported by the service.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct Usage {
    /// Input tokens consumed
    input_tokens: u32,
    /// Output tokens generated
    output_tokens: u32,
}
