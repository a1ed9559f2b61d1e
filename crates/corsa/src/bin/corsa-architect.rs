//! System architect role binary: saves the platform architecture design.

use anyhow::Result;
use corsa::bootstrap;
use corsa::roles::architect;

#[tokio::main]
async fn main() -> Result<()> {
    bootstrap::init_tracing();
    let runner = bootstrap::runner_from_env()?;
    runner
        .run(&architect::request(), architect::OUTPUT_PATH, architect::HEADER)
        .await?;
    println!("\n✅ Architecture saved to {}", architect::OUTPUT_PATH);
    Ok(())
}
