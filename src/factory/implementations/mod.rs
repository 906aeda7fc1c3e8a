pub mod gamified;
pub mod traditional;
