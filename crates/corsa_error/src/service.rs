//! Remote service error kinds.

/// Failures raised by the completion service or its transport.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ServiceErrorKind {
    /// The service returned a non-success status.
    #[display("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service
        status: u16,
        /// Error body returned by the service
        message: String,
    },
    /// The HTTP request could not be completed.
    #[display("HTTP error: {_0}")]
    Http(String),
    /// The response body could not be decoded.
    #[display("response parsing error: {_0}")]
    Parse(String),
    /// The response carried no text content block.
    #[display("response contained no text content block")]
    EmptyResponse,
}
