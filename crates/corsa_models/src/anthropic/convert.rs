//! Conversions between core types and the Messages API wire format.

use crate::anthropic::types::{
    ImageSource, MessagesRequest, MessagesResponse, WireBlock, WireMessage,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use corsa_core::{CompletionRequest, CompletionResponse, ContentBlock};

/// Converts a core request into the wire request body.
///
/// Image bytes are base64-encoded here, at the wire boundary; core types
/// carry raw bytes.
pub fn to_wire(request: &CompletionRequest) -> MessagesRequest {
    let messages = request
        .turns()
        .iter()
        .map(|turn| {
            let content = turn.content().iter().map(to_wire_block).collect();
            WireMessage::new(turn.role().as_str(), content)
        })
        .collect::<Vec<_>>();

    MessagesRequest::new(
        request.model().clone(),
        *request.max_tokens(),
        request.system().clone(),
        messages,
    )
}

fn to_wire_block(block: &ContentBlock) -> WireBlock {
    match block {
        ContentBlock::Text(text) => WireBlock::Text { text: text.clone() },
        ContentBlock::Image { mime, data } => WireBlock::Image {
            source: ImageSource::base64(mime.clone(), STANDARD.encode(data)),
        },
    }
}

/// Converts a wire response into the core response.
///
/// Outputs in this system are always text. Blocks are carried over only up
/// to the first non-text block, so a response led by another shape (e.g.
/// `tool_use`) yields no content and surfaces as an empty-response service
/// error downstream instead of an empty string body.
pub fn from_wire(response: MessagesResponse) -> CompletionResponse {
    let content = response
        .content()
        .iter()
        .take_while(|block| block.content_type() == "text")
        .map(|block| ContentBlock::text(block.text().clone()))
        .collect();
    CompletionResponse::new(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use corsa_core::Turn;
    use serde_json::json;

    #[test]
    fn text_request_serializes_to_documented_shape() {
        let request = CompletionRequest::new(
            "m1",
            1024,
            vec![Turn::user(vec![ContentBlock::text("Say hello")])],
        );
        let wire = to_wire(&request);
        let value = serde_json::to_value(&wire).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "m1",
                "max_tokens": 1024,
                "messages": [
                    {
                        "role": "user",
                        "content": [{"type": "text", "text": "Say hello"}]
                    }
                ]
            })
        );
    }

    #[test]
    fn system_prompt_is_omitted_when_absent() {
        let request = CompletionRequest::new(
            "m1",
            1024,
            vec![Turn::user(vec![ContentBlock::text("Say hello")])],
        );
        let value = serde_json::to_value(to_wire(&request)).unwrap();
        assert!(value.get("system").is_none());
    }

    #[test]
    fn image_bytes_are_base64_encoded() {
        let request = CompletionRequest::new(
            "m1",
            3000,
            vec![Turn::user(vec![
                ContentBlock::png(vec![0x89, 0x50, 0x4e, 0x47]),
                ContentBlock::text("Generate my briefing"),
            ])],
        )
        .with_system("You are an analyst.");
        let value = serde_json::to_value(to_wire(&request)).unwrap();
        assert_eq!(value["system"], "You are an analyst.");
        let image = &value["messages"][0]["content"][0];
        assert_eq!(image["type"], "image");
        assert_eq!(image["source"]["type"], "base64");
        assert_eq!(image["source"]["media_type"], "image/png");
        assert_eq!(image["source"]["data"], STANDARD.encode([0x89, 0x50, 0x4e, 0x47]));
    }

    #[test]
    fn leading_non_text_block_yields_no_content() {
        let wire: MessagesResponse = serde_json::from_value(json!({
            "id": "msg_03",
            "type": "message",
            "role": "assistant",
            "content": [
                {"type": "tool_use", "id": "tu_01", "name": "get_weather", "input": {}},
                {"type": "text", "text": "never surfaced"}
            ],
            "model": "m1"
        }))
        .unwrap();
        let response = from_wire(wire);
        assert_eq!(response.primary_text(), None);
        assert!(response.content().is_empty());
    }

    #[test]
    fn response_content_maps_to_text_blocks_in_order() {
        let wire: MessagesResponse = serde_json::from_value(json!({
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "content": [
                {"type": "text", "text": "first"},
                {"type": "text", "text": "second"}
            ],
            "model": "m1"
        }))
        .unwrap();
        let response = from_wire(wire);
        assert_eq!(response.primary_text(), Some("first"));
        assert_eq!(response.content().len(), 2);
    }
}
