//! Data analyst role: designs the recommendation engine.

use crate::roles::MODEL;
use corsa_core::{CompletionRequest, ContentBlock, Turn};

pub const MAX_TOKENS: u32 = 4000;
pub const OUTPUT_PATH: &str = "RECOMMENDATION_ENGINE.md";
pub const HEADER: &str =
    "# Recommendation Engine Design\n\n**Athletic Optimization System - Analysis & Decision Logic**\n\n";

const SYSTEM_PROMPT: &str = r#"You are an expert Data Analyst and Sports Scientist specializing in athletic performance optimization.

Your job:
- Design analytical models for training optimization
- Create recommendation algorithms based on recovery metrics
- Build predictive models for performance
- Define alert thresholds for overtraining/injury risk
- Specify data visualization strategies

Combine data science with sports science expertise."#;

const USER_PROMPT: &str = r#"Design the recommendation engine for athletic optimization:

**INPUT DATA:**
- Resting Heart Rate (RHR) trends
- Heart Rate Variability (HRV)
- Sleep quality metrics (efficiency, duration, deep sleep %)
- Training load (weekly mileage, intensity distribution)
- Recovery scores (Oura readiness)
- Performance metrics (pace at threshold HR, running power)
- Body temperature trends
- SPO2 readings

**OUTPUTS NEEDED:**
1. **Daily Training Recommendations:**
   - Go hard (quality workout)
   - Go moderate (tempo/steady)
   - Go easy (recovery run)
   - Rest day (full recovery needed)

2. **Recovery Interventions:**
   - Sleep optimization suggestions
   - Active recovery protocols
   - When to take extra rest

3. **Performance Predictions:**
   - Fitness trend analysis
   - Race readiness assessment
   - Optimal taper timing

4. **Risk Alerts:**
   - Overtraining warning signs
   - Injury risk indicators
   - Illness/burnout flags

**SPECIFIC REQUIREMENTS:**
- Define RHR threshold logic (e.g., >3 bpm above baseline = yellow flag)
- HRV interpretation (% deviation from norm)
- Sleep debt calculation
- Training load vs recovery balance
- Trend analysis (3-day, 7-day, 4-week windows)

**PROVIDE:**
- Decision tree logic for recommendations
- Alert threshold specifications
- Python implementation examples
- Visualization recommendations"#;

/// Builds the data analyst's completion request.
pub fn request() -> CompletionRequest {
    CompletionRequest::new(
        MODEL,
        MAX_TOKENS,
        vec![Turn::user(vec![ContentBlock::text(USER_PROMPT)])],
    )
    .with_system(SYSTEM_PROMPT)
}
