pub mod language;
pub mod term;
