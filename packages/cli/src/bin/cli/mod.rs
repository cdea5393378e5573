pub mod generate;
pub mod studio;
pub mod templates;
