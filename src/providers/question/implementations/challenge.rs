use crate::data::family::EvaluationFamily;
use crate::providers::question::trait_question::QuestionProvider;

/// Pregunta de reto interactivo (familia gamificada).
#[derive(Debug, Default)]
pub struct ChallengeQuestion;

impl ChallengeQuestion {
    pub fn new() -> Self {
        Self
    }
}

impl QuestionProvider for ChallengeQuestion {
    fn get_name(&self) -> &str {
        "challenge_question"
    }

    fn get_version(&self) -> &str {
        "1.0.0"
    }

    fn get_description(&self) -> &str {
        "Interactive challenge presented as a game"
    }

    fn get_family(&self) -> EvaluationFamily {
        EvaluationFamily::Gamified
    }

    fn prompt(&self) -> &'static str {
        "Interactive challenge question."
    }
}
