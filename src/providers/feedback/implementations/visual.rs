use crate::data::family::EvaluationFamily;
use crate::providers::feedback::trait_feedback::FeedbackProvider;

/// Retroalimentación visual con insignias (familia gamificada).
#[derive(Debug, Default)]
pub struct VisualFeedback;

impl VisualFeedback {
    pub fn new() -> Self {
        Self
    }
}

impl FeedbackProvider for VisualFeedback {
    fn get_name(&self) -> &str {
        "visual_feedback"
    }

    fn get_version(&self) -> &str {
        "1.0.0"
    }

    fn get_description(&self) -> &str {
        "Visual feedback with badges and progress"
    }

    fn get_family(&self) -> EvaluationFamily {
        EvaluationFamily::Gamified
    }

    fn style(&self) -> &'static str {
        "Visual feedback with badges."
    }
}
