pub mod challenge;
pub mod multiple_choice;
