//! Error types for the Corsa prompt dispatch toolkit.
//!
//! Every failure in the workspace maps onto one of four categories:
//! authentication, request validation, remote service, or local I/O.
//! Errors carry the source location where they were raised.

mod error;
mod service;
mod validation;

pub use error::{CorsaError, CorsaErrorKind, CorsaResult};
pub use service::ServiceErrorKind;
pub use validation::ValidationErrorKind;
