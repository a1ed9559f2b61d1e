//! Completion response type.

use crate::ContentBlock;
use serde::{Deserialize, Serialize};

/// The content returned by the completion service.
///
/// The artifact body is always the first content block; later blocks are
/// never aggregated. That single-block extraction is the documented
/// contract, mirrored from the service bindings this replaces.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct CompletionResponse {
    /// Ordered content blocks
    content: Vec<ContentBlock>,
}

impl CompletionResponse {
    /// Creates a response from its content blocks.
    pub fn new(content: Vec<ContentBlock>) -> Self {
        Self { content }
    }

    /// Returns the text of the first content block, if it is text.
    pub fn primary_text(&self) -> Option<&str> {
        self.content.first().and_then(ContentBlock::as_text)
    }
}
