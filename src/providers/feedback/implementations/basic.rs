use crate::data::family::EvaluationFamily;
use crate::providers::feedback::trait_feedback::FeedbackProvider;

/// Retroalimentación textual simple (familia tradicional).
#[derive(Debug, Default)]
pub struct BasicFeedback;

impl BasicFeedback {
    pub fn new() -> Self {
        Self
    }
}

impl FeedbackProvider for BasicFeedback {
    fn get_name(&self) -> &str {
        "basic_feedback"
    }

    fn get_version(&self) -> &str {
        "1.0.0"
    }

    fn get_description(&self) -> &str {
        "Plain textual feedback"
    }

    fn get_family(&self) -> EvaluationFamily {
        EvaluationFamily::Traditional
    }

    fn style(&self) -> &'static str {
        "Basic textual feedback."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_feedback_line_and_family() {
        let f = BasicFeedback::new();
        assert_eq!(f.style(), "Basic textual feedback.");
        assert_eq!(f.get_family(), EvaluationFamily::Traditional);
    }
}
