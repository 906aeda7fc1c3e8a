pub mod basic;
pub mod visual;
