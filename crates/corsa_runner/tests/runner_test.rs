use async_trait::async_trait;
use corsa_core::{CompletionRequest, CompletionResponse, ContentBlock, Turn};
use corsa_error::{CorsaErrorKind, CorsaResult, ServiceErrorKind, ValidationErrorKind};
use corsa_models::Driver;
use corsa_runner::PromptRunner;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Fake backend that returns a canned response and counts calls.
struct FakeDriver {
    response: CompletionResponse,
    calls: Arc<AtomicUsize>,
}

impl FakeDriver {
    fn text(body: &str) -> Self {
        Self::with_content(vec![ContentBlock::text(body)])
    }

    fn with_content(content: Vec<ContentBlock>) -> Self {
        Self {
            response: CompletionResponse::new(content),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Handle onto the call counter, usable after the driver moves into
    /// the runner.
    fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl Driver for FakeDriver {
    async fn generate(&self, _request: &CompletionRequest) -> CorsaResult<CompletionResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

fn hello_request() -> CompletionRequest {
    CompletionRequest::new(
        "m1",
        1024,
        vec![Turn::user(vec![ContentBlock::text("Say hello")])],
    )
}

#[tokio::test]
async fn run_writes_header_then_body() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ARCHITECTURE.md");
    let runner = PromptRunner::new(FakeDriver::text("Hello! I'm working."));

    let artifact = runner
        .run(&hello_request(), &path, "# Architecture\n\n")
        .await
        .unwrap();

    assert_eq!(artifact.body(), "Hello! I'm working.");
    assert_eq!(artifact.header(), "# Architecture\n\n");
    assert_eq!(artifact.file_path(), &path);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "# Architecture\n\nHello! I'm working."
    );
}

#[tokio::test]
async fn rerun_replaces_previous_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("PLAN.md");

    let first = PromptRunner::new(FakeDriver::text(
        "A long first answer that should disappear entirely.",
    ));
    first
        .run(&hello_request(), &path, "# Plan\n\n")
        .await
        .unwrap();

    let second = PromptRunner::new(FakeDriver::text("short"));
    second
        .run(&hello_request(), &path, "# Plan\n\n")
        .await
        .unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Plan\n\nshort");
}

#[tokio::test]
async fn empty_turns_are_rejected_before_dispatch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("OUT.md");
    let driver = FakeDriver::text("never returned");
    let calls = driver.counter();
    let runner = PromptRunner::new(driver);

    let request = CompletionRequest::new("m1", 1024, vec![]);
    let err = runner.run(&request, &path, "").await.unwrap_err();

    assert!(matches!(
        err.kind(),
        CorsaErrorKind::Validation(ValidationErrorKind::EmptyTurns)
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(!path.exists());
}

#[tokio::test]
async fn zero_token_budget_is_rejected_before_dispatch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("OUT.md");
    let driver = FakeDriver::text("never returned");
    let calls = driver.counter();
    let runner = PromptRunner::new(driver);

    let request = CompletionRequest::new(
        "m1",
        0,
        vec![Turn::user(vec![ContentBlock::text("Say hello")])],
    );
    let err = runner.run(&request, &path, "").await.unwrap_err();

    assert!(matches!(
        err.kind(),
        CorsaErrorKind::Validation(ValidationErrorKind::ZeroTokenBudget)
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(!path.exists());
}

#[tokio::test]
async fn missing_output_directory_is_an_io_error_after_dispatch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("OUT.md");
    let driver = FakeDriver::text("Hello! I'm working.");
    let calls = driver.counter();
    let runner = PromptRunner::new(driver);

    let err = runner.run(&hello_request(), &path, "").await.unwrap_err();

    assert!(matches!(err.kind(), CorsaErrorKind::Io(_)));
    // The network call happened; only the write failed.
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(!path.exists());
}

#[tokio::test]
async fn response_without_text_block_is_a_service_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("OUT.md");
    let runner = PromptRunner::new(FakeDriver::with_content(vec![]));

    let err = runner.run(&hello_request(), &path, "").await.unwrap_err();

    assert!(matches!(
        err.kind(),
        CorsaErrorKind::Service(ServiceErrorKind::EmptyResponse)
    ));
    assert!(!path.exists());
}

#[tokio::test]
async fn leading_image_block_is_a_service_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("OUT.md");
    let runner = PromptRunner::new(FakeDriver::with_content(vec![ContentBlock::png(vec![
        0x89, 0x50,
    ])]));

    let err = runner.run(&hello_request(), &path, "").await.unwrap_err();

    assert!(matches!(
        err.kind(),
        CorsaErrorKind::Service(ServiceErrorKind::EmptyResponse)
    ));
}
