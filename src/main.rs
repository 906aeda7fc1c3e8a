//! Punto de entrada de ExamFlow.
//! Resuelve la familia de evaluación desde la configuración (gamificada por
//! defecto), construye la factory y el generador, y ejecuta una única
//! generación de examen. La salida del proceso son exactamente las cuatro
//! líneas de la familia seleccionada.
use examflow_rust::config::CONFIG;
use examflow_rust::factory::factory_for;
use examflow_rust::workflow::manager::ExamGenerator;

fn main() {
    let family = CONFIG.exam.default_family;
    let factory = factory_for(family);
    let generator = ExamGenerator::new(factory.as_ref());
    if let Err(e) = generator.generate_exam() {
        eprintln!("[examflow] Error registrando la ejecución: {e}");
    }
}
