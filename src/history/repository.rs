//! Repositorio en memoria para registros de generación de exámenes.
//! Proporciona almacenamiento rápido para tests y reportes; la persistencia
//! en disco o base de datos queda explícitamente fuera del alcance del
//! sistema.
//!
//! Responsabilidades clave:
//! - Guardar cada `ExamRecord` asociado a su sesión.
//! - Recuperar el historial completo de una sesión para verificar orden y
//!   determinismo.
//! - Exportar un reporte JSON por sesión.
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::errors::core_error::CoreError;
use crate::workflow::record::ExamRecord;

#[derive(Clone, Default)]
pub struct ExamHistoryRepository {
    in_memory: Arc<RwLock<HashMap<Uuid, Vec<ExamRecord>>>>,
}

impl ExamHistoryRepository {
    pub fn new() -> Self {
        Self { in_memory: Arc::new(RwLock::new(HashMap::new())) }
    }

    pub fn save_exam_record(&self, record: &ExamRecord) -> Result<(), CoreError> {
        let mut guard = self.in_memory
                            .write()
                            .map_err(|_| CoreError::Internal("bloqueo del historial envenenado".into()))?;
        guard.entry(record.session_id).or_default().push(record.clone());
        Ok(())
    }

    /// Historial de una sesión, en orden de inserción. Sesión desconocida →
    /// vector vacío.
    pub fn get_records(&self, session_id: Uuid) -> Vec<ExamRecord> {
        self.in_memory
            .read()
            .map(|guard| guard.get(&session_id).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    pub fn record_count(&self, session_id: Uuid) -> usize {
        self.get_records(session_id).len()
    }

    /// Reporte JSON con todas las ejecuciones registradas de la sesión.
    pub fn export_exam_report(&self, session_id: Uuid) -> serde_json::Value {
        let records = self.get_records(session_id);
        serde_json::json!({
            "session_id": session_id,
            "runs": records.iter().map(|r| r.to_report()).collect::<Vec<_>>(),
        })
    }
}
