//! Backend developer role binary: saves the core implementation modules.

use anyhow::Result;
use corsa::bootstrap;
use corsa::roles::backend_developer;

#[tokio::main]
async fn main() -> Result<()> {
    bootstrap::init_tracing();
    let runner = bootstrap::runner_from_env()?;
    runner
        .run(
            &backend_developer::request(),
            backend_developer::OUTPUT_PATH,
            backend_developer::HEADER,
        )
        .await?;
    println!(
        "\n✅ Implementation code saved to {}",
        backend_developer::OUTPUT_PATH
    );
    Ok(())
}
