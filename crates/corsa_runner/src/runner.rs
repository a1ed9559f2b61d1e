//! The prompt dispatch and persist routine.

use corsa_core::{CompletionRequest, OutputArtifact};
use corsa_error::{CorsaError, CorsaErrorKind, CorsaResult, ServiceErrorKind};
use corsa_models::Driver;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Executes exactly one round trip to a completion backend and persists
/// the result.
///
/// Failures are never retried: a single failed attempt terminates the
/// invocation. Concurrent runs against the same output path are not
/// coordinated; the last writer wins.
#[derive(Debug, Clone)]
pub struct PromptRunner<D> {
    driver: D,
}

impl<D: Driver> PromptRunner<D> {
    /// Creates a runner over the given backend.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Dispatches a request, prints the primary text to stdout, and writes
    /// it to `output_path` behind the literal `header`.
    ///
    /// The body is printed before the file write, so a failed write still
    /// leaves the text on the console. The file is truncated on every run.
    ///
    /// # Errors
    ///
    /// Validation failures are returned before any network call; backend
    /// failures propagate unchanged; a response without a leading text
    /// block is a service error; file creation or write failures are I/O
    /// errors (a partial file may remain).
    #[tracing::instrument(skip_all, fields(model = %request.model()))]
    pub async fn run(
        &self,
        request: &CompletionRequest,
        output_path: impl AsRef<Path>,
        header: &str,
    ) -> CorsaResult<OutputArtifact> {
        request.validate()?;

        debug!(turns = request.turns().len(), "Dispatching prompt");
        let response = self.driver.generate(request).await?;

        let body = response
            .primary_text()
            .ok_or_else(|| {
                CorsaError::new(CorsaErrorKind::Service(ServiceErrorKind::EmptyResponse))
            })?
            .to_string();

        println!("{body}");

        let path = output_path.as_ref();
        write_artifact(path, header, &body)?;

        info!(
            path = %path.display(),
            bytes = header.len() + body.len(),
            "Artifact written"
        );
        Ok(OutputArtifact::new(
            path.to_path_buf(),
            header.to_string(),
            body,
        ))
    }
}

/// Writes header then body, truncating any existing file. The handle is
/// scoped to this function, so it is released on every exit path.
fn write_artifact(path: &Path, header: &str, body: &str) -> CorsaResult<()> {
    let mut file = File::create(path).map_err(|e| {
        CorsaError::new(CorsaErrorKind::Io(format!(
            "failed to create {}: {e}",
            path.display()
        )))
    })?;
    file.write_all(header.as_bytes())
        .and_then(|_| file.write_all(body.as_bytes()))
        .map_err(|e| {
            CorsaError::new(CorsaErrorKind::Io(format!(
                "failed to write {}: {e}",
                path.display()
            )))
        })
}
