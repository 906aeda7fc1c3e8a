//! ExamFlow Rust Library
//!
//! Este crate actúa como la librería central de ExamFlow:
//! - Expone `providers` con las cuatro capacidades de evaluación (pregunta,
//!   calificación, retroalimentación y entrega) y sus variantes concretas.
//! - Expone `factory` para construir familias coherentes de proveedores
//!   (tradicional o gamificada) sin conocer los tipos concretos.
//! - Expone `workflow` con el generador de exámenes que orquesta las cuatro
//!   operaciones en orden fijo.
//! - Expone `errors` para manejar errores de núcleo y dominio, `hashing`
//!   para huellas canónicas y `history` para el registro en memoria.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod config;
pub mod data;
pub mod errors;
pub mod factory;
pub mod hashing;
pub mod history;
pub mod providers;
pub mod workflow;
