//! Orquestador principal de la generación de exámenes.
//! Se encarga de:
//! - Adquirir de la factory una instancia de cada capacidad (pregunta,
//!   calificación, retroalimentación, entrega) exactamente una vez, en el
//!   momento de la construcción. La construcción no emite salida.
//! - Invocar las cuatro operaciones en el orden fijo pregunta → calificación
//!   → retroalimentación → entrega; el efecto observable son cuatro líneas
//!   en stdout.
//! - Registrar cada ejecución como `ExamRecord` en el repositorio de
//!   historial para trazabilidad y verificación de determinismo.
//!
//! Una vez construido, el generador no puede reapuntarse a otra factory: las
//! cuatro instancias retenidas provienen de la misma factory, lo que
//! garantiza la consistencia de familia durante toda la secuencia.
use chrono::Utc;
use uuid::Uuid;

use crate::data::family::EvaluationFamily;
use crate::errors::core_error::CoreError;
use crate::factory::trait_factory::EvaluationFactory;
use crate::history::repository::ExamHistoryRepository;
use crate::providers::delivery::trait_delivery::DeliveryProvider;
use crate::providers::feedback::trait_feedback::FeedbackProvider;
use crate::providers::grading::trait_grading::GradingProvider;
use crate::providers::question::trait_question::QuestionProvider;
use crate::workflow::record::ExamRecord;

pub struct ExamGenerator {
    /// Identificador de la sesión de generación (constante durante la vida
    /// del generador).
    session_id: Uuid,
    family: EvaluationFamily,
    history: ExamHistoryRepository,
    question: Box<dyn QuestionProvider>,
    grading: Box<dyn GradingProvider>,
    feedback: Box<dyn FeedbackProvider>,
    delivery: Box<dyn DeliveryProvider>,
}

impl ExamGenerator {
    /// Construye el generador adquiriendo una instancia de cada capacidad de
    /// la factory dada. No produce salida; las líneas solo se emiten en
    /// `generate_exam`.
    pub fn new(factory: &dyn EvaluationFactory) -> Self {
        Self { session_id: Uuid::new_v4(),
               family: factory.get_family(),
               history: ExamHistoryRepository::new(),
               question: factory.create_question(),
               grading: factory.create_grading(),
               feedback: factory.create_feedback(),
               delivery: factory.create_delivery() }
    }

    /// Devuelve el identificador de la sesión actual.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }
    /// Familia de la factory con la que se construyó el generador.
    pub fn family(&self) -> EvaluationFamily {
        self.family
    }
    /// Acceso al historial de ejecuciones de esta sesión.
    pub fn history(&self) -> &ExamHistoryRepository {
        &self.history
    }

    /// Las cuatro líneas que emitirá `generate_exam`, en orden, sin
    /// ejecutarlas.
    pub fn script(&self) -> [&'static str; 4] {
        [self.question.prompt(), self.grading.scheme(), self.feedback.style(), self.delivery.channel()]
    }

    /// Verifica la invariante de consistencia: las cuatro instancias
    /// retenidas pertenecen a la familia de la factory de origen.
    pub fn is_family_consistent(&self) -> bool {
        self.question.get_family() == self.family
            && self.grading.get_family() == self.family
            && self.feedback.get_family() == self.family
            && self.delivery.get_family() == self.family
    }

    pub fn generate_exam(&self) -> Result<ExamRecord, CoreError> {
        // 1. Marcar inicio antes de ejecutar para registrar tiempos correctos.
        let started_at = Utc::now();

        // 2. Invocar cada operación en el orden fijo. Cada una escribe su
        //    línea en stdout; ninguna puede fallar.
        self.question.show();
        self.grading.calculate();
        self.feedback.show_feedback();
        self.delivery.deliver();

        // 3. Construir el registro con las líneas emitidas (las mismas que
        //    exponen los accesores de cada variante) y calcular su huella.
        let lines = self.script().iter().map(|l| l.to_string()).collect();
        let record = ExamRecord::new(self.session_id, self.family, lines, started_at, Utc::now());

        // 4. Persistir en el historial en memoria y devolver el registro al
        //    llamador.
        self.history.save_exam_record(&record)?;
        Ok(record)
    }
}
