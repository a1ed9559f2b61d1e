//! Anthropic API configuration.

use corsa_error::{CorsaError, CorsaErrorKind, CorsaResult};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Default API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com";

/// Anthropic API configuration, resolved once by the caller and passed
/// into the client explicitly.
#[derive(Debug, Clone, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct AnthropicConfig {
    api_key: String,
    #[builder(default = "DEFAULT_ENDPOINT.to_string()")]
    endpoint: String,
}

impl AnthropicConfig {
    /// Creates a builder for `AnthropicConfig`.
    pub fn builder() -> AnthropicConfigBuilder {
        AnthropicConfigBuilder::default()
    }

    /// Resolves the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an authentication error when `ANTHROPIC_API_KEY` is unset
    /// or empty.
    pub fn from_env() -> CorsaResult<Self> {
        let api_key = std::env::var(API_KEY_VAR).unwrap_or_default();
        if api_key.is_empty() {
            return Err(CorsaError::new(CorsaErrorKind::Authentication(format!(
                "{API_KEY_VAR} is not set"
            ))));
        }
        Ok(Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }
}
