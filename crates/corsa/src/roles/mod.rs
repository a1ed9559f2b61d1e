//! Role catalog for the athletic optimization project team.
//!
//! Each module embeds one role's system instructions, user prompt, token
//! budget, output path, and artifact header, and builds the completion
//! request for its binary. No role takes runtime arguments.

pub mod architect;
pub mod backend_developer;
pub mod briefing;
pub mod data_analyst;
pub mod data_engineer;
pub mod project_manager;
pub mod qa_devops;

/// Model used by every role.
pub const MODEL: &str = "claude-sonnet-4-20250514";

#[cfg(test)]
mod tests {
    use super::*;
    use corsa_core::ContentBlock;
    use corsa_error::CorsaErrorKind;

    #[test]
    fn every_review_role_builds_a_valid_request() {
        let requests = [
            architect::request(),
            data_engineer::request(),
            backend_developer::request(),
            data_analyst::request(),
            project_manager::request(),
            qa_devops::request(),
        ];
        for request in &requests {
            assert!(request.validate().is_ok());
            assert!(request.system().is_some());
            assert_eq!(request.model(), MODEL);
            assert_eq!(*request.max_tokens(), 4000);
        }
    }

    #[test]
    fn artifact_paths_are_distinct() {
        let paths = [
            architect::OUTPUT_PATH,
            data_engineer::OUTPUT_PATH,
            backend_developer::OUTPUT_PATH,
            data_analyst::OUTPUT_PATH,
            project_manager::OUTPUT_PATH,
            qa_devops::OUTPUT_PATH,
            briefing::OUTPUT_PATH,
        ];
        let unique: std::collections::HashSet<_> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());
    }

    #[test]
    fn briefing_embeds_both_screenshots_before_the_text() {
        let dir = tempfile::tempdir().unwrap();
        let oura = dir.path().join("oura_morning.png");
        let log = dir.path().join("training_log.png");
        std::fs::write(&oura, [0x89, 0x50, 0x4e, 0x47]).unwrap();
        std::fs::write(&log, [0x89, 0x50, 0x4e, 0x47]).unwrap();

        let request = briefing::request(&oura, &log).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(*request.max_tokens(), 3000);

        let content = request.turns()[0].content();
        assert_eq!(content.len(), 3);
        assert!(matches!(content[0], ContentBlock::Image { .. }));
        assert!(matches!(content[1], ContentBlock::Image { .. }));
        assert!(matches!(content[2], ContentBlock::Text(_)));
    }

    #[test]
    fn briefing_fails_with_io_error_for_missing_screenshot() {
        let dir = tempfile::tempdir().unwrap();
        let err = briefing::request(
            dir.path().join("absent.png"),
            dir.path().join("also_absent.png"),
        )
        .unwrap_err();
        assert!(matches!(err.kind(), CorsaErrorKind::Io(_)));
    }
}
