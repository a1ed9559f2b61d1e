//! Data engineer role: specifies the wearable API integration pipeline.

use crate::roles::MODEL;
use corsa_core::{CompletionRequest, ContentBlock, Turn};

pub const MAX_TOKENS: u32 = 4000;
pub const OUTPUT_PATH: &str = "DATA_INTEGRATION_GUIDE.md";
pub const HEADER: &str =
    "# Data Integration Guide\n\n**Athletic Optimization System - API Integration Specifications**\n\n";

const SYSTEM_PROMPT: &str = r#"You are an expert Data Engineer specializing in wearable device API integration.

Your job:
- Design OAuth authentication flows for APIs
- Specify data extraction endpoints and methods
- Define data transformation pipelines (including unit conversions)
- Create data validation and error handling strategies
- Design database schema for raw and processed data

Be specific, include code examples, and provide actionable implementation steps."#;

const USER_PROMPT: &str = r#"Design the data integration pipeline for:

**SOURCE 1: Oura Ring API**
- Sleep data (stages, efficiency, timing)
- Readiness score
- HRV, RHR, body temperature
- SPO2
- Activity data

**SOURCE 2: Garmin Connect API**
- Workout data (GPS, HR, pace, elevation)
- Stryd power data (flows through Garmin)
- Daily activity summary
- Training load metrics

**REQUIREMENTS:**
1. OAuth 2.0 authentication for both APIs
2. Automated daily data pulls
3. **ALL DISTANCE CONVERSIONS: km → miles** (critical!)
4. Data validation and error handling
5. Storage in structured format for analysis
6. Deduplication logic

**PROVIDE:**
- API endpoint specifications
- Authentication flow diagrams
- Data transformation pipeline (with km→miles conversion)
- Database schema recommendations
- Python code examples for key functions"#;

/// Builds the data engineer's completion request.
pub fn request() -> CompletionRequest {
    CompletionRequest::new(
        MODEL,
        MAX_TOKENS,
        vec![Turn::user(vec![ContentBlock::text(USER_PROMPT)])],
    )
    .with_system(SYSTEM_PROMPT)
}
