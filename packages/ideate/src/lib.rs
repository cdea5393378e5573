// ABOUTME: PRD Studio ideate library - PRD expansion and export
// ABOUTME: Provides generation, canonical text export, templates, preview layout and the session store

pub mod error;
pub mod export_service;
pub mod prd_generator;
pub mod render;
pub mod session_store;
pub mod templates;
pub mod types;
pub mod validation;

pub use error::{IdeateError, Result};
pub use export_service::{serialize, ExportFormat, ExportResult, ExportService};
pub use prd_generator::PRDGenerator;
pub use render::{document_view, DocumentView, ViewSection};
pub use session_store::{SessionStats, SessionStore};
pub use templates::TemplateManager;
pub use types::*;
pub use validation::{validate_inputs, ValidationError};

/// Generate a PRD from raw inputs, stamped with the current time
pub fn generate(inputs: &RawInputs) -> PRD {
    PRDGenerator::new().generate(inputs)
}

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{IdeateError, Result};
    pub use crate::export_service::{serialize, ExportFormat, ExportService};
    pub use crate::prd_generator::PRDGenerator;
    pub use crate::session_store::SessionStore;
    pub use crate::templates::TemplateManager;
    pub use crate::types::{PRDTemplate, RawInputs, TemplateCategory, PRD};
}
