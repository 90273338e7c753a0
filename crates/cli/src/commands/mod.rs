pub mod catalog;
pub mod texts;
