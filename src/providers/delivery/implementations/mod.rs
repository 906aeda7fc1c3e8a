pub mod interactive;
pub mod pdf;
