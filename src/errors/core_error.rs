use thiserror::Error;

/// Errores de infraestructura del generador: historial en memoria y
/// resolución de configuración. Las operaciones de los productos no fallan,
/// así que no hay variantes para ellas.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error interno: {0}")]
    Internal(String),
    #[error("Error de configuración: {0}")]
    Config(String),
}
