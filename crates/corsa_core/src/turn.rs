//! Turn types for conversation history.

use crate::{ContentBlock, Role};
use serde::{Deserialize, Serialize};

/// A multimodal message in a conversation.
///
/// # Examples
///
/// ```
/// use corsa_core::{ContentBlock, Role, Turn};
///
/// let turn = Turn::user(vec![ContentBlock::text("Hello!")]);
///
/// assert_eq!(*turn.role(), Role::User);
/// assert_eq!(turn.content().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Turn {
    /// The role of the turn's author
    role: Role,
    /// The content of the turn (can be multimodal)
    content: Vec<ContentBlock>,
}

impl Turn {
    /// Creates a new turn with the given role and content.
    pub fn new(role: Role, content: Vec<ContentBlock>) -> Self {
        Self { role, content }
    }

    /// Creates a user turn.
    pub fn user(content: Vec<ContentBlock>) -> Self {
        Self::new(Role::User, content)
    }
}
