//! Registro de ejecución de una generación de examen.
//!
//! `ExamRecord` es la instantánea de una invocación de `generate_exam`:
//! identifica la sesión, la familia usada, las cuatro líneas emitidas en
//! orden y los tiempos de inicio y fin. El `record_hash` se calcula en forma
//! canónica sobre familia + líneas (sin tiempos ni ids), de modo que dos
//! ejecuciones con la misma factory producen la misma huella.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::data::family::EvaluationFamily;
use crate::hashing::compute_sorted_hash;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamRecord {
    pub session_id: Uuid,
    pub family: EvaluationFamily,
    /// Líneas emitidas por la orquestación, en el orden pregunta →
    /// calificación → retroalimentación → entrega.
    pub lines: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Huella canónica del contenido observable (familia + líneas).
    pub record_hash: Option<String>,
}

impl ExamRecord {
    pub fn new(session_id: Uuid, family: EvaluationFamily, lines: Vec<String>, started_at: DateTime<Utc>, finished_at: DateTime<Utc>) -> Self {
        let mut record = Self { session_id,
                                family,
                                lines,
                                started_at,
                                finished_at,
                                record_hash: None };
        record.recompute_hash();
        record
    }

    /// Recalcula el hash canónico del registro basándose en familia y líneas.
    /// Los tiempos y la sesión quedan fuera para que la huella sea estable
    /// entre ejecuciones repetidas.
    pub fn recompute_hash(&mut self) {
        let hash = compute_sorted_hash(&serde_json::json!({
            "family": self.family,
            "lines": self.lines,
        }));
        self.record_hash = Some(hash);
    }

    /// Exporta el registro como JSON para reportes.
    pub fn to_report(&self) -> serde_json::Value {
        serde_json::json!({
            "session_id": self.session_id,
            "family": self.family,
            "lines": self.lines,
            "started_at": self.started_at,
            "finished_at": self.finished_at,
            "record_hash": self.record_hash,
        })
    }
}
