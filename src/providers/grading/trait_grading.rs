//! Trait para proveedores de calificación.
//! El contrato es análogo al de las otras capacidades: metadatos, familia y
//! una línea fija (`scheme`) que `calculate` escribe en stdout simulando el
//! cálculo de la nota.
use crate::data::family::EvaluationFamily;

pub trait GradingProvider: Send + Sync {
    fn get_name(&self) -> &str;
    fn get_version(&self) -> &str;
    fn get_description(&self) -> &str;
    fn get_family(&self) -> EvaluationFamily;
    /// Línea fija que describe el esquema de calificación aplicado.
    fn scheme(&self) -> &'static str;

    /// Calcula la calificación (una línea en stdout). No falla ni devuelve valor.
    fn calculate(&self) {
        println!("{}", self.scheme());
    }
}
