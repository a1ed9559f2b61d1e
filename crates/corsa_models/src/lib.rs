//! Completion service bindings for the Corsa prompt dispatch toolkit.
//!
//! Provides the [`Driver`] trait that abstracts a completion backend, and
//! the Anthropic Messages API implementation of it.

mod anthropic;
mod driver;

pub use anthropic::{
    API_KEY_VAR, AnthropicClient, AnthropicConfig, AnthropicConfigBuilder, DEFAULT_ENDPOINT,
    ImageSource, MessagesRequest, MessagesResponse, ResponseContent, Usage, WireBlock,
    WireMessage,
};
pub use driver::Driver;
