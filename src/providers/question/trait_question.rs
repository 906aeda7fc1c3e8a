//! Trait para proveedores de preguntas de examen.
//! Proporciona el contrato para presentar una pregunta al estudiante. Cada
//! variante concreta pertenece a una familia (`get_family`) y describe su
//! presentación con una línea fija (`prompt`); `show` escribe esa línea en
//! stdout simulando la acción real.
use crate::data::family::EvaluationFamily;

pub trait QuestionProvider: Send + Sync {
    fn get_name(&self) -> &str;
    fn get_version(&self) -> &str;
    fn get_description(&self) -> &str;
    /// Familia a la que pertenece esta variante.
    fn get_family(&self) -> EvaluationFamily;
    /// Línea fija que describe la pregunta presentada.
    fn prompt(&self) -> &'static str;

    /// Presenta la pregunta (una línea en stdout). No falla ni devuelve valor.
    fn show(&self) {
        println!("{}", self.prompt());
    }
}
