//! Core data types for the Corsa prompt dispatch toolkit.
//!
//! This crate provides the foundation data types shared by the wire
//! bindings, the runner, and the role binaries.

mod artifact;
mod content;
mod request;
mod response;
mod role;
mod turn;

pub use artifact::OutputArtifact;
pub use content::{ContentBlock, IMAGE_PNG};
pub use request::CompletionRequest;
pub use response::CompletionResponse;
pub use role::Role;
pub use turn::Turn;
