//! Corsa: prompt dispatch and persist toolkit.
//!
//! Each binary in this crate plays one role on the athletic optimization
//! project team: it sends one embedded prompt to the completion service,
//! prints the answer, and saves it to a named artifact file. The shared
//! mechanism lives in [`corsa_runner::PromptRunner`].

pub mod bootstrap;
pub mod roles;

pub use corsa_core::{
    CompletionRequest, CompletionResponse, ContentBlock, IMAGE_PNG, OutputArtifact, Role, Turn,
};
pub use corsa_error::{
    CorsaError, CorsaErrorKind, CorsaResult, ServiceErrorKind, ValidationErrorKind,
};
pub use corsa_models::{AnthropicClient, AnthropicConfig, Driver};
pub use corsa_runner::{PromptRunner, encode_image};
