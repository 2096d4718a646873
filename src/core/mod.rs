pub mod constants;
pub mod hero;
pub mod mission;
pub mod rules;
