pub mod delivery;
pub mod feedback;
pub mod grading;
pub mod question;
