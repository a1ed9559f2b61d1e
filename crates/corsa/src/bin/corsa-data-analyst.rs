//! Data analyst role binary: saves the recommendation engine design.

use anyhow::Result;
use corsa::bootstrap;
use corsa::roles::data_analyst;

#[tokio::main]
async fn main() -> Result<()> {
    bootstrap::init_tracing();
    let runner = bootstrap::runner_from_env()?;
    runner
        .run(
            &data_analyst::request(),
            data_analyst::OUTPUT_PATH,
            data_analyst::HEADER,
        )
        .await?;
    println!(
        "\n✅ Recommendation engine design saved to {}",
        data_analyst::OUTPUT_PATH
    );
    Ok(())
}
