//! Connectivity smoke check: one tiny request, response printed, no file.

use anyhow::Result;
use corsa::bootstrap;
use corsa::roles::MODEL;
use corsa::{
    CompletionRequest, ContentBlock, CorsaError, CorsaErrorKind, Driver, ServiceErrorKind, Turn,
};

#[tokio::main]
async fn main() -> Result<()> {
    bootstrap::init_tracing();
    let client = bootstrap::client_from_env()?;
    let request = CompletionRequest::new(
        MODEL,
        1024,
        vec![Turn::user(vec![ContentBlock::text(
            "Say hello and confirm you're working!",
        )])],
    );
    let response = client.generate(&request).await?;
    let body = response
        .primary_text()
        .ok_or_else(|| CorsaError::new(CorsaErrorKind::Service(ServiceErrorKind::EmptyResponse)))?;
    println!("{body}");
    Ok(())
}
