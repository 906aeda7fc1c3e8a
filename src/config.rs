//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
//! La única sección actual es la familia de evaluación por defecto: sin
//! `EXAMFLOW_FAMILY` definida se usa la familia gamificada, la elección por
//! defecto del generador.
use once_cell::sync::Lazy;
use std::env;

use crate::data::family::EvaluationFamily;
use crate::errors::core_error::CoreError;

/// Configuración global de la aplicación (extensible para más secciones: logging, etc.).
pub struct AppConfig {
    /// Configuración específica de la generación de exámenes.
    pub exam: ExamConfig,
}

/// Parámetros de generación de exámenes.
pub struct ExamConfig {
    /// Familia de productos usada por defecto al construir la factory.
    pub default_family: EvaluationFamily,
}

/// Convierte el valor crudo de `EXAMFLOW_FAMILY` en una familia, elevando el
/// error de dominio a error de configuración.
pub fn parse_family_setting(raw: &str) -> Result<EvaluationFamily, CoreError> {
    raw.parse::<EvaluationFamily>().map_err(|e| CoreError::Config(e.to_string()))
}

/// Resuelve la familia por defecto: variable ausente → gamificada; valor
/// presente pero inválido → error de configuración.
pub fn resolve_default_family() -> Result<EvaluationFamily, CoreError> {
    let _ = dotenvy::dotenv();
    match env::var("EXAMFLOW_FAMILY") {
        Ok(raw) => parse_family_setting(&raw),
        Err(env::VarError::NotPresent) => Ok(EvaluationFamily::Gamified),
        Err(e) => Err(CoreError::Config(e.to_string())),
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let family = resolve_default_family().expect("EXAMFLOW_FAMILY inválida (use 'traditional' o 'gamified')");
    AppConfig { exam: ExamConfig { default_family: family } }
});
