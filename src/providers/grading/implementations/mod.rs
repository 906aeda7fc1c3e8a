pub mod achievement;
pub mod numeric;
