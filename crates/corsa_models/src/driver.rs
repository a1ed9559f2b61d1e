//! Backend abstraction for completion services.

use async_trait::async_trait;
use corsa_core::{CompletionRequest, CompletionResponse};
use corsa_error::CorsaResult;

/// A completion backend: one request in, one response out.
///
/// The runner is generic over this trait so tests can substitute a fake
/// transport for the HTTP client.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Submits a request and returns the service's response.
    async fn generate(&self, request: &CompletionRequest) -> CorsaResult<CompletionResponse>;
}
