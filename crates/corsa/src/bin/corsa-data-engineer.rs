//! Data engineer role binary: saves the API integration guide.

use anyhow::Result;
use corsa::bootstrap;
use corsa::roles::data_engineer;

#[tokio::main]
async fn main() -> Result<()> {
    bootstrap::init_tracing();
    let runner = bootstrap::runner_from_env()?;
    runner
        .run(
            &data_engineer::request(),
            data_engineer::OUTPUT_PATH,
            data_engineer::HEADER,
        )
        .await?;
    println!(
        "\n✅ Data integration guide saved to {}",
        data_engineer::OUTPUT_PATH
    );
    Ok(())
}
