use thiserror::Error;

/// Errores del dominio de la aplicación
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Familia de evaluación desconocida: {0}")]
    UnknownFamily(String),
    #[error("Validación fallida: {0}")]
    Validation(String),
}
