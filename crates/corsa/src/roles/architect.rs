//! System architect role: designs the overall platform architecture.

use crate::roles::MODEL;
use corsa_core::{CompletionRequest, ContentBlock, Turn};

pub const MAX_TOKENS: u32 = 4000;
pub const OUTPUT_PATH: &str = "ARCHITECTURE.md";
pub const HEADER: &str = "# Athletic Optimization System Architecture\n\n";

const SYSTEM_PROMPT: &str = r#"You are an expert System Architect specializing in athletic performance optimization systems.

Your job:
- Design data flow architecture for multi-device integration (Oura, Garmin, Polar, Stryd)
- Specify API integration requirements
- Define database schema for training/recovery data
- Create system diagrams and technical specifications
- Identify potential bottlenecks and solutions

Be specific, technical, and actionable."#;

const USER_PROMPT: &str = r#"Design the system architecture for an athletic optimization platform that:

1. Integrates data from:
   - Oura Ring (sleep, HRV, RHR, body temp, SPO2)
   - Garmin Connect API (workouts, HR, pace, cadence, power from Stryd)

2. Analyzes patterns across:
   - Training load
   - Recovery metrics
   - Sleep quality
   - Performance trends

3. Generates recommendations for:
   - When to train hard vs easy
   - Optimal sleep timing
   - Recovery interventions needed
   - Performance predictions

Provide:
- High-level architecture diagram (text description)
- API integration approach
- Database schema recommendations
- Processing pipeline design"#;

/// Builds the architect's completion request.
pub fn request() -> CompletionRequest {
    CompletionRequest::new(
        MODEL,
        MAX_TOKENS,
        vec![Turn::user(vec![ContentBlock::text(USER_PROMPT)])],
    )
    .with_system(SYSTEM_PROMPT)
}
