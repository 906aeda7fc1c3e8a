//! Trait para proveedores de retroalimentación al estudiante.
use crate::data::family::EvaluationFamily;

pub trait FeedbackProvider: Send + Sync {
    fn get_name(&self) -> &str;
    fn get_version(&self) -> &str;
    fn get_description(&self) -> &str;
    fn get_family(&self) -> EvaluationFamily;
    /// Línea fija que describe el estilo de retroalimentación.
    fn style(&self) -> &'static str;

    /// Muestra la retroalimentación (una línea en stdout). No falla ni
    /// devuelve valor.
    fn show_feedback(&self) {
        println!("{}", self.style());
    }
}
