//! QA/DevOps role binary: saves the testing and deployment guide.

use anyhow::Result;
use corsa::bootstrap;
use corsa::roles::qa_devops;

#[tokio::main]
async fn main() -> Result<()> {
    bootstrap::init_tracing();
    let runner = bootstrap::runner_from_env()?;
    runner
        .run(&qa_devops::request(), qa_devops::OUTPUT_PATH, qa_devops::HEADER)
        .await?;
    println!("\n✅ QA/DevOps guide saved to {}", qa_devops::OUTPUT_PATH);
    Ok(())
}
