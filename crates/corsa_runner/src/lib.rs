//! Prompt dispatch and persist routine.
//!
//! [`PromptRunner`] executes exactly one round trip to a completion
//! backend and writes the result to a local artifact file. Every role
//! binary in the workspace is a parameterization of this routine.

mod image;
mod runner;

pub use image::encode_image;
pub use runner::PromptRunner;
