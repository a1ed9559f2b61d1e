//! Completion request type and pre-submission validation.

use crate::Turn;
use corsa_error::{CorsaResult, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// A single-shot completion request.
///
/// Constructed fresh per invocation from embedded role templates; never
/// reused across runs.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct CompletionRequest {
    /// Model identifier
    model: String,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Optional system instructions
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    /// Ordered conversation turns
    turns: Vec<Turn>,
}

impl CompletionRequest {
    /// Creates a new request with no system instructions.
    pub fn new(model: impl Into<String>, max_tokens: u32, turns: Vec<Turn>) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            system: None,
            turns,
        }
    }

    /// Attaches system instructions.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Creates a builder for `CompletionRequest`.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }

    /// Checks the request against the preconditions the service would
    /// reject: a positive token budget and at least one turn with at
    /// least one content block.
    pub fn validate(&self) -> CorsaResult<()> {
        if self.max_tokens == 0 {
            return Err(ValidationErrorKind::ZeroTokenBudget.into());
        }
        if self.turns.is_empty() {
            return Err(ValidationErrorKind::EmptyTurns.into());
        }
        for (index, turn) in self.turns.iter().enumerate() {
            if turn.content().is_empty() {
                return Err(ValidationErrorKind::EmptyContent(index).into());
            }
        }
        Ok(())
    }
}
