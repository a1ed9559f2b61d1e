//! Briefing generator binary: reads the morning screenshots and saves the
//! daily training briefing.

use anyhow::Result;
use corsa::bootstrap;
use corsa::roles::briefing;

#[tokio::main]
async fn main() -> Result<()> {
    bootstrap::init_tracing();
    let runner = bootstrap::runner_from_env()?;
    let request = briefing::request(briefing::OURA_SCREENSHOT, briefing::TRAINING_LOG)?;
    runner
        .run(&request, briefing::OUTPUT_PATH, briefing::HEADER)
        .await?;
    println!("\n✅ Briefing saved to {}", briefing::OUTPUT_PATH);
    Ok(())
}
