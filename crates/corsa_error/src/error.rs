//! Top-level error type with location tracking.

use crate::{ServiceErrorKind, ValidationErrorKind};

/// Error kinds for prompt dispatch operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CorsaErrorKind {
    /// Missing or rejected credentials.
    #[display("Authentication error: {_0}")]
    Authentication(String),
    /// Malformed or out-of-bounds request, caught before submission.
    #[display("Request validation error: {_0}")]
    Validation(ValidationErrorKind),
    /// Remote call failed, was rejected, or returned an unexpected shape.
    #[display("Service error: {_0}")]
    Service(ServiceErrorKind),
    /// Local file read or write failed.
    #[display("I/O error: {_0}")]
    Io(String),
}

impl From<ValidationErrorKind> for CorsaErrorKind {
    fn from(kind: ValidationErrorKind) -> Self {
        Self::Validation(kind)
    }
}

impl From<ServiceErrorKind> for CorsaErrorKind {
    fn from(kind: ServiceErrorKind) -> Self {
        Self::Service(kind)
    }
}

impl From<std::io::Error> for CorsaErrorKind {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Prompt dispatch error with location tracking.
///
/// # Examples
///
/// ```
/// use corsa_error::{CorsaError, CorsaErrorKind};
///
/// let err = CorsaError::new(CorsaErrorKind::Authentication(
///     "ANTHROPIC_API_KEY is not set".to_string(),
/// ));
/// assert!(matches!(err.kind(), CorsaErrorKind::Authentication(_)));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Corsa Error: {} at line {} in {}", kind, line, file)]
pub struct CorsaError {
    kind: CorsaErrorKind,
    line: u32,
    file: &'static str,
}

impl CorsaError {
    /// Create a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CorsaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CorsaErrorKind {
        &self.kind
    }
}

impl<T> From<T> for CorsaError
where
    T: Into<CorsaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result alias used throughout the workspace.
pub type CorsaResult<T> = Result<T, CorsaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_kind_converts_into_error() {
        let err: CorsaError = ValidationErrorKind::EmptyTurns.into();
        assert!(matches!(
            err.kind(),
            CorsaErrorKind::Validation(ValidationErrorKind::EmptyTurns)
        ));
    }

    #[test]
    fn io_error_converts_into_io_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CorsaError = io.into();
        assert!(matches!(err.kind(), CorsaErrorKind::Io(_)));
    }

    #[test]
    fn display_includes_kind_and_location() {
        let err = CorsaError::new(CorsaErrorKind::Io("disk full".to_string()));
        let rendered = err.to_string();
        assert!(rendered.contains("disk full"));
        assert!(rendered.contains("error.rs"));
    }
}
