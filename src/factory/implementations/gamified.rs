use crate::data::family::EvaluationFamily;
use crate::factory::trait_factory::EvaluationFactory;
use crate::providers::delivery::implementations::interactive::InteractiveDelivery;
use crate::providers::delivery::trait_delivery::DeliveryProvider;
use crate::providers::feedback::implementations::visual::VisualFeedback;
use crate::providers::feedback::trait_feedback::FeedbackProvider;
use crate::providers::grading::implementations::achievement::AchievementGrading;
use crate::providers::grading::trait_grading::GradingProvider;
use crate::providers::question::implementations::challenge::ChallengeQuestion;
use crate::providers::question::trait_question::QuestionProvider;

/// Factory de la familia gamificada: reto interactivo, nota por logros,
/// retroalimentación visual y entrega en plataforma.
#[derive(Debug, Default)]
pub struct GamifiedEvaluationFactory;

impl GamifiedEvaluationFactory {
    pub fn new() -> Self {
        Self
    }
}

impl EvaluationFactory for GamifiedEvaluationFactory {
    fn get_name(&self) -> &str {
        "gamified_evaluation_factory"
    }

    fn get_family(&self) -> EvaluationFamily {
        EvaluationFamily::Gamified
    }

    fn create_question(&self) -> Box<dyn QuestionProvider> {
        Box::new(ChallengeQuestion::new())
    }

    fn create_grading(&self) -> Box<dyn GradingProvider> {
        Box::new(AchievementGrading::new())
    }

    fn create_feedback(&self) -> Box<dyn FeedbackProvider> {
        Box::new(VisualFeedback::new())
    }

    fn create_delivery(&self) -> Box<dyn DeliveryProvider> {
        Box::new(InteractiveDelivery::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamified_factory_produces_gamified_lines() {
        let factory = GamifiedEvaluationFactory::new();
        assert_eq!(factory.get_family(), EvaluationFamily::Gamified);
        assert_eq!(factory.create_question().prompt(), "Interactive challenge question.");
        assert_eq!(factory.create_grading().scheme(), "Grading based on achievements.");
        assert_eq!(factory.create_feedback().style(), "Visual feedback with badges.");
        assert_eq!(factory.create_delivery().channel(), "Delivered through interactive platform.");
    }

    #[test]
    fn test_gamified_factory_never_mixes_families() {
        let factory = GamifiedEvaluationFactory::new();
        assert_eq!(factory.create_question().get_family(), EvaluationFamily::Gamified);
        assert_eq!(factory.create_grading().get_family(), EvaluationFamily::Gamified);
        assert_eq!(factory.create_feedback().get_family(), EvaluationFamily::Gamified);
        assert_eq!(factory.create_delivery().get_family(), EvaluationFamily::Gamified);
    }
}
