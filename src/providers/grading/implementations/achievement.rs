use crate::data::family::EvaluationFamily;
use crate::providers::grading::trait_grading::GradingProvider;

/// Calificación basada en logros desbloqueados (familia gamificada).
#[derive(Debug, Default)]
pub struct AchievementGrading;

impl AchievementGrading {
    pub fn new() -> Self {
        Self
    }
}

impl GradingProvider for AchievementGrading {
    fn get_name(&self) -> &str {
        "achievement_grading"
    }

    fn get_version(&self) -> &str {
        "1.0.0"
    }

    fn get_description(&self) -> &str {
        "Grade derived from unlocked achievements"
    }

    fn get_family(&self) -> EvaluationFamily {
        EvaluationFamily::Gamified
    }

    fn scheme(&self) -> &'static str {
        "Grading based on achievements."
    }
}
