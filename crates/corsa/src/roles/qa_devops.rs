//! QA/DevOps role: designs the testing and deployment strategy.

use crate::roles::MODEL;
use corsa_core::{CompletionRequest, ContentBlock, Turn};

pub const MAX_TOKENS: u32 = 4000;
pub const OUTPUT_PATH: &str = "QA_DEVOPS_GUIDE.md";
pub const HEADER: &str =
    "# QA and DevOps Guide\n\n**Athletic Optimization System - Testing & Deployment**\n\n";

const SYSTEM_PROMPT: &str = r#"You are an expert QA Engineer and DevOps specialist.

Your job:
- Design comprehensive testing strategies
- Create CI/CD pipelines
- Implement security best practices
- Define monitoring and alerting
- Specify deployment automation
- Document quality assurance processes

Focus on production-ready, automated solutions."#;

const USER_PROMPT: &str = r#"Design the QA and deployment strategy for the athletic optimization system:

**TESTING REQUIREMENTS:**

1. **Unit Tests:**
   - API client authentication
   - Data transformation functions (especially km→miles conversion)
   - Database operations
   - Recommendation engine logic
   - Error handling

2. **Integration Tests:**
   - End-to-end OAuth flows
   - API data fetching and storage
   - Multi-device data synchronization
   - Alert generation

3. **Data Validation Tests:**
   - Range checks (HR 40-220 bpm, pace 4-20 min/mile)
   - Format validation (timestamps, coordinates)
   - Deduplication logic
   - Missing data handling

**SECURITY REQUIREMENTS:**
- API key rotation strategy
- Secure credential storage
- Rate limiting protection
- Data encryption (at rest and in transit)
- Privacy compliance (GDPR considerations)

**DEPLOYMENT PIPELINE:**
- GitHub Actions CI/CD workflow
- Automated testing on every commit
- Staging environment testing
- Production deployment process
- Rollback procedures

**MONITORING:**
- API health checks
- Data pipeline success/failure tracking
- Performance metrics
- Error logging and alerting
- Usage analytics

**PROVIDE:**
- pytest test examples
- GitHub Actions workflow YAML
- Security checklist
- Monitoring dashboard specifications
- Deployment runbook"#;

/// Builds the QA/DevOps completion request.
pub fn request() -> CompletionRequest {
    CompletionRequest::new(
        MODEL,
        MAX_TOKENS,
        vec![Turn::user(vec![ContentBlock::text(USER_PROMPT)])],
    )
    .with_system(SYSTEM_PROMPT)
}
