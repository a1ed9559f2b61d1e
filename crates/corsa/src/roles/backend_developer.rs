//! Backend developer role: writes the core implementation modules.

use crate::roles::MODEL;
use corsa_core::{CompletionRequest, ContentBlock, Turn};

pub const MAX_TOKENS: u32 = 4000;
pub const OUTPUT_PATH: &str = "IMPLEMENTATION_CODE.md";
pub const HEADER: &str =
    "# Implementation Code\n\n**Athletic Optimization System - Core Python Modules**\n\n";

const SYSTEM_PROMPT: &str = r#"You are an expert Backend Developer specializing in Python API integrations and data pipelines.

Your job:
- Write production-ready Python code
- Implement OAuth authentication flows
- Create robust API client classes
- Build data transformation pipelines
- Include comprehensive error handling
- Write clean, well-documented code

Provide actual working code, not pseudocode."#;

const USER_PROMPT: &str = r#"Based on the system architecture and data integration specs, write the core Python modules for:

**MODULE 1: Oura API Client**
- OAuth 2.0 authentication
- Methods to fetch: sleep data, readiness, HRV, RHR, activity
- Rate limiting and error handling
- Data validation

**MODULE 2: Garmin API Client**
- OAuth 2.0 authentication
- Methods to fetch: workouts, activities, training metrics
- Parse Stryd data from Garmin activities
- Rate limiting and error handling

**MODULE 3: Data Transformer**
- **Convert ALL distances from km to miles**
- Standardize timestamps (UTC)
- Validate data ranges (HR, pace, etc.)
- Handle missing data
- Format for database storage

**MODULE 4: Database Manager**
- SQLite schema (can upgrade to PostgreSQL later)
- Insert/update operations
- Deduplication logic
- Query helpers for analysis

**REQUIREMENTS:**
- Production-ready code
- Type hints
- Docstrings
- Error handling
- Unit conversion constants (KM_TO_MILES = 0.621371)

Provide complete, working Python code for all 4 modules."#;

/// Builds the backend developer's completion request.
pub fn request() -> CompletionRequest {
    CompletionRequest::new(
        MODEL,
        MAX_TOKENS,
        vec![Turn::user(vec![ContentBlock::text(USER_PROMPT)])],
    )
    .with_system(SYSTEM_PROMPT)
}
