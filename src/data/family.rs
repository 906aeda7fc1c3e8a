//! Definición de `EvaluationFamily`, el selector enumerado de familia de
//! productos de evaluación.
//!
//! Objetivos de este módulo:
//! - Representar la elección de familia (tradicional o gamificada) como un
//!   valor de primera clase, en lugar de una línea de código fija en el
//!   punto de entrada.
//! - Garantizar que cada proveedor y cada factory declaren a qué familia
//!   pertenecen, lo que permite verificar la invariante de consistencia
//!   (nunca mezclar variantes de familias distintas en una misma ejecución).
//! - Permitir parsear la familia desde configuración (`FromStr`) y
//!   serializarla en registros de ejecución (serde).
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain_error::DomainError;

/// Familia de productos de evaluación. Todas las variantes creadas por una
/// misma factory pertenecen a la misma familia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationFamily {
    Traditional,
    Gamified,
}

impl EvaluationFamily {
    /// Nombre canónico en minúsculas (coincide con la forma serde y con el
    /// valor aceptado en configuración).
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationFamily::Traditional => "traditional",
            EvaluationFamily::Gamified => "gamified",
        }
    }

    /// Todas las familias disponibles, útil para tests y reportes.
    pub fn all() -> [EvaluationFamily; 2] {
        [EvaluationFamily::Traditional, EvaluationFamily::Gamified]
    }
}

impl fmt::Display for EvaluationFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvaluationFamily {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "" => Err(DomainError::Validation("nombre de familia vacío".into())),
            "traditional" => Ok(EvaluationFamily::Traditional),
            "gamified" => Ok(EvaluationFamily::Gamified),
            other => Err(DomainError::UnknownFamily(other.to_string())),
        }
    }
}
