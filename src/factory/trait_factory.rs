//! Trait de la factory abstracta de evaluación.
//!
//! Una factory produce una instancia de cada una de las cuatro capacidades
//! (pregunta, calificación, retroalimentación, entrega), todas de la misma
//! familia. El cliente trabaja solo contra objetos trait, sin conocer los
//! tipos concretos.
//!
//! Invariante: una factory dada siempre devuelve variantes de su propia
//! familia; no existe mezcla de familias dentro de una misma factory. Los
//! tests de cada implementación comparan `get_family()` de cada producto con
//! la familia de la factory.
use crate::data::family::EvaluationFamily;
use crate::factory::implementations::gamified::GamifiedEvaluationFactory;
use crate::factory::implementations::traditional::TraditionalEvaluationFactory;
use crate::providers::delivery::trait_delivery::DeliveryProvider;
use crate::providers::feedback::trait_feedback::FeedbackProvider;
use crate::providers::grading::trait_grading::GradingProvider;
use crate::providers::question::trait_question::QuestionProvider;

pub trait EvaluationFactory: Send + Sync {
    fn get_name(&self) -> &str;
    /// Familia de todas las variantes producidas por esta factory.
    fn get_family(&self) -> EvaluationFamily;

    fn create_question(&self) -> Box<dyn QuestionProvider>;
    fn create_grading(&self) -> Box<dyn GradingProvider>;
    fn create_feedback(&self) -> Box<dyn FeedbackProvider>;
    fn create_delivery(&self) -> Box<dyn DeliveryProvider>;
}

/// Construye la factory concreta para la familia indicada. La selección es un
/// valor de configuración explícito, no una línea fija en el punto de entrada.
pub fn factory_for(family: EvaluationFamily) -> Box<dyn EvaluationFactory> {
    match family {
        EvaluationFamily::Traditional => Box::new(TraditionalEvaluationFactory::new()),
        EvaluationFamily::Gamified => Box::new(GamifiedEvaluationFactory::new()),
    }
}
