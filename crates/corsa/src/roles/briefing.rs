//! Briefing generator role: builds the morning training briefing from
//! two screenshots (Oura dashboard and training log).

use crate::roles::MODEL;
use corsa_core::{CompletionRequest, ContentBlock, Turn};
use corsa_error::CorsaResult;
use corsa_runner::encode_image;
use std::path::Path;

pub const MAX_TOKENS: u32 = 3000;
pub const OUTPUT_PATH: &str = "DAILY_BRIEFING.txt";
/// The briefing is written verbatim, no header.
pub const HEADER: &str = "";

/// Default screenshot locations, relative to the working directory.
pub const OURA_SCREENSHOT: &str = "oura_morning.png";
pub const TRAINING_LOG: &str = "training_log.png";

const SYSTEM_PROMPT: &str = r#"You are Michael's Performance Optimization Analyst.

Generate his daily training briefing in this EXACT format:

==============================================
TRAINING BRIEFING - [Date]
==============================================

RECOVERY STATUS: [✅ READY / ⚠️ ELEVATED / 🔴 REST NEEDED]
- RHR: [X] bpm ([comparison to 49 baseline])
- HRV: [X] ms ([status])
- Sleep: [X] hrs, [X]% efficiency, [X] hrs deep
- Readiness: [X]/100

TRAINING PROGRESS:
- Total miles: [X] (Week [X] complete)
- Improvement since Oct 15:
  • RHR: [start] → [current] bpm ([change])
  • Threshold: [start] → [current]/mile ([change])
  • Mt Ryan: [start] → [current] ([change])

CURRENT PHASE: [Phase] (Week [X] of 24)
- Next tempo: [Day] ([X] days)
- Next Mt Ryan: [Date] ([X] days)
- Next long run: [Date] ([X] days)
- Race day: March 29 ([X] days, [X] weeks)

THIS WEEK:
- Target: [X]-[X] miles
- Current: [X] miles
- Remaining: [X]-[X] miles

TODAY'S WORKOUT: [Workout Type]
- Target pace: [X]:[X]/mile
- Target HR: [X]-[X] bpm (Zone [X])
- Distance: [X] miles
- Focus: [Primary focus]

FUEL PLAN:
- Pre-run: [Specific foods and amounts]
- During: [Fuel strategy]
- Post-run: [Recovery nutrition]

FOCUS AREAS:
[3-4 specific tactical items]

WHY THIS MATTERS:
[1-2 sentence physiological reasoning]

SYSTEM INSIGHT:
[Current trajectory, predictions, confidence levels]
==============================================

Extract ALL data from the screenshots. Be specific with numbers. Reference his training plan."#;

const USER_PROMPT: &str = "Generate my morning training briefing from these screenshots. \
Today is Tuesday, January 07, 2026. Week 12 training cycle.";

/// Builds the briefing request from the two screenshot paths.
///
/// Both images go ahead of the text block in a single user turn.
///
/// # Errors
///
/// Returns an I/O error when either screenshot is absent or unreadable;
/// no request is submitted in that case.
pub fn request(
    oura_screenshot: impl AsRef<Path>,
    training_log: impl AsRef<Path>,
) -> CorsaResult<CompletionRequest> {
    let oura = encode_image(oura_screenshot)?;
    let log = encode_image(training_log)?;
    Ok(CompletionRequest::new(
        MODEL,
        MAX_TOKENS,
        vec![Turn::user(vec![oura, log, ContentBlock::text(USER_PROMPT)])],
    )
    .with_system(SYSTEM_PROMPT))
}
