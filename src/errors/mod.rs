pub mod core_error;
pub mod domain_error;
