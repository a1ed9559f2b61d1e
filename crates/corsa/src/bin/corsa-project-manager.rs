//! Project manager role binary: saves the master integration plan.

use anyhow::Result;
use corsa::bootstrap;
use corsa::roles::project_manager;

#[tokio::main]
async fn main() -> Result<()> {
    bootstrap::init_tracing();
    let runner = bootstrap::runner_from_env()?;
    runner
        .run(
            &project_manager::request(),
            project_manager::OUTPUT_PATH,
            project_manager::HEADER,
        )
        .await?;
    println!("\n✅ Project plan saved to {}", project_manager::OUTPUT_PATH);
    Ok(())
}
