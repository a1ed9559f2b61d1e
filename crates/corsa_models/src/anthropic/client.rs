//! Anthropic Messages API HTTP client.

use crate::anthropic::config::AnthropicConfig;
use crate::anthropic::convert;
use crate::anthropic::types::MessagesResponse;
use crate::driver::Driver;
use async_trait::async_trait;
use corsa_core::{CompletionRequest, CompletionResponse};
use corsa_error::{CorsaError, CorsaErrorKind, CorsaResult, ServiceErrorKind};
use reqwest::StatusCode;
use tracing::{debug, error};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic HTTP client.
///
/// No request timeout is configured; the transport default applies.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: reqwest::Client,
    config: AnthropicConfig,
}

impl AnthropicClient {
    /// Creates a new client from an explicit configuration.
    pub fn new(config: AnthropicConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl Driver for AnthropicClient {
    #[tracing::instrument(skip_all, fields(model = %request.model()))]
    async fn generate(&self, request: &CompletionRequest) -> CorsaResult<CompletionResponse> {
        let url = format!("{}/v1/messages", self.config.endpoint());
        let body = convert::to_wire(request);

        debug!(turns = request.turns().len(), url = %url, "Sending request");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", self.config.api_key())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                CorsaError::new(CorsaErrorKind::Service(ServiceErrorKind::Http(
                    e.to_string(),
                )))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, message = %message, "API error");
            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                return Err(CorsaError::new(CorsaErrorKind::Authentication(format!(
                    "credentials rejected ({status}): {message}"
                ))));
            }
            return Err(CorsaError::new(CorsaErrorKind::Service(
                ServiceErrorKind::Api {
                    status: status.as_u16(),
                    message,
                },
            )));
        }

        let wire: MessagesResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            CorsaError::new(CorsaErrorKind::Service(ServiceErrorKind::Parse(
                e.to_string(),
            )))
        })?;

        debug!(
            blocks = wire.content().len(),
            stop_reason = ?wire.stop_reason(),
            "Received response"
        );

        Ok(convert::from_wire(wire))
    }
}
