//! Content block types for multimodal turns.

use serde::{Deserialize, Serialize};

/// MIME type applied to every embedded screenshot.
pub const IMAGE_PNG: &str = "image/png";

/// One unit of a turn's payload.
///
/// # Examples
///
/// ```
/// use corsa_core::ContentBlock;
///
/// let text = ContentBlock::text("Say hello and confirm you're working!");
/// assert_eq!(text.as_text(), Some("Say hello and confirm you're working!"));
///
/// let image = ContentBlock::png(vec![0x89, 0x50, 0x4e, 0x47]);
/// assert_eq!(image.as_text(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ContentBlock {
    /// Plain text.
    Text(String),

    /// An embedded image, held as raw bytes until the wire layer encodes it.
    Image {
        /// MIME type, e.g. "image/png"
        mime: String,
        /// Raw image bytes
        data: Vec<u8>,
    },
}

impl ContentBlock {
    /// Creates a text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates a PNG image block from raw bytes.
    pub fn png(data: Vec<u8>) -> Self {
        Self::Image {
            mime: IMAGE_PNG.to_string(),
            data,
        }
    }

    /// Returns the text content, if this block is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Image { .. } => None,
        }
    }
}
