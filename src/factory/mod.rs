pub mod implementations;
pub mod trait_factory;

pub use trait_factory::{factory_for, EvaluationFactory};
