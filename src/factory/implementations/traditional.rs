use crate::data::family::EvaluationFamily;
use crate::factory::trait_factory::EvaluationFactory;
use crate::providers::delivery::implementations::pdf::PdfDelivery;
use crate::providers::delivery::trait_delivery::DeliveryProvider;
use crate::providers::feedback::implementations::basic::BasicFeedback;
use crate::providers::feedback::trait_feedback::FeedbackProvider;
use crate::providers::grading::implementations::numeric::NumericGrading;
use crate::providers::grading::trait_grading::GradingProvider;
use crate::providers::question::implementations::multiple_choice::MultipleChoiceQuestion;
use crate::providers::question::trait_question::QuestionProvider;

/// Factory de la familia tradicional: opción múltiple, nota numérica,
/// retroalimentación textual y entrega en PDF.
#[derive(Debug, Default)]
pub struct TraditionalEvaluationFactory;

impl TraditionalEvaluationFactory {
    pub fn new() -> Self {
        Self
    }
}

impl EvaluationFactory for TraditionalEvaluationFactory {
    fn get_name(&self) -> &str {
        "traditional_evaluation_factory"
    }

    fn get_family(&self) -> EvaluationFamily {
        EvaluationFamily::Traditional
    }

    fn create_question(&self) -> Box<dyn QuestionProvider> {
        Box::new(MultipleChoiceQuestion::new())
    }

    fn create_grading(&self) -> Box<dyn GradingProvider> {
        Box::new(NumericGrading::new())
    }

    fn create_feedback(&self) -> Box<dyn FeedbackProvider> {
        Box::new(BasicFeedback::new())
    }

    fn create_delivery(&self) -> Box<dyn DeliveryProvider> {
        Box::new(PdfDelivery::new())
    }
}
