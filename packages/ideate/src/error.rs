// ABOUTME: Error types for the ideate package
// ABOUTME: Defines all error variants for template lookup, validation and export

use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum IdeateError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, IdeateError>;
