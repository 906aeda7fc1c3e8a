use crate::data::family::EvaluationFamily;
use crate::providers::grading::trait_grading::GradingProvider;

/// Calificación numérica sobre 100 (familia tradicional).
#[derive(Debug, Default)]
pub struct NumericGrading;

impl NumericGrading {
    pub fn new() -> Self {
        Self
    }
}

impl GradingProvider for NumericGrading {
    fn get_name(&self) -> &str {
        "numeric_grading"
    }

    fn get_version(&self) -> &str {
        "1.0.0"
    }

    fn get_description(&self) -> &str {
        "Numeric score on a 0-100 scale"
    }

    fn get_family(&self) -> EvaluationFamily {
        EvaluationFamily::Traditional
    }

    fn scheme(&self) -> &'static str {
        "Numeric grading over 100."
    }
}
