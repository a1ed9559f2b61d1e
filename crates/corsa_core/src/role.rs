//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Attribution of a turn in a conversation.
///
/// System instructions travel as a dedicated request field rather than a
/// turn, so only user and assistant appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// The wire-format name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}
