//! Anthropic Messages API binding.

mod client;
mod config;
mod convert;
mod types;

pub use client::AnthropicClient;
pub use config::{API_KEY_VAR, AnthropicConfig, AnthropicConfigBuilder, DEFAULT_ENDPOINT};
pub use types::{
    ImageSource, MessagesRequest, MessagesResponse, ResponseContent, Usage, WireBlock,
    WireMessage,
};
