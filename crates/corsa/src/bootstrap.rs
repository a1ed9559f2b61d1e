//! Shared startup for the role binaries.

use corsa_error::CorsaResult;
use corsa_models::{AnthropicClient, AnthropicConfig};
use corsa_runner::PromptRunner;
use tracing_subscriber::EnvFilter;

/// Initializes the fmt subscriber with env-filter overrides.
pub fn init_tracing() {
    // Diagnostics go to stderr; stdout is reserved for the response body
    // and the confirmation line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Builds a client from `.env` plus the process environment.
///
/// # Errors
///
/// Returns an authentication error when no API key is configured.
pub fn client_from_env() -> CorsaResult<AnthropicClient> {
    // Load API key from .env file when present.
    dotenvy::dotenv().ok();
    let config = AnthropicConfig::from_env()?;
    Ok(AnthropicClient::new(config))
}

/// Builds the prompt runner used by every role binary.
pub fn runner_from_env() -> CorsaResult<PromptRunner<AnthropicClient>> {
    Ok(PromptRunner::new(client_from_env()?))
}
