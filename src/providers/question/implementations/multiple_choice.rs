use crate::data::family::EvaluationFamily;
use crate::providers::question::trait_question::QuestionProvider;

/// Pregunta de opción múltiple (familia tradicional).
#[derive(Debug, Default)]
pub struct MultipleChoiceQuestion;

impl MultipleChoiceQuestion {
    pub fn new() -> Self {
        Self
    }
}

impl QuestionProvider for MultipleChoiceQuestion {
    fn get_name(&self) -> &str {
        "multiple_choice_question"
    }

    fn get_version(&self) -> &str {
        "1.0.0"
    }

    fn get_description(&self) -> &str {
        "Multiple choice question with fixed options"
    }

    fn get_family(&self) -> EvaluationFamily {
        EvaluationFamily::Traditional
    }

    fn prompt(&self) -> &'static str {
        "Multiple choice question."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_choice_question_line_and_family() {
        let q = MultipleChoiceQuestion::new();
        assert_eq!(q.prompt(), "Multiple choice question.");
        assert_eq!(q.get_family(), EvaluationFamily::Traditional);
        assert_eq!(q.get_name(), "multiple_choice_question");
    }
}
