// ABOUTME: Copies canonical PRD text to the system clipboard
// ABOUTME: Reports whether the copy landed so callers can fall back to printing

use std::fmt::Display;
use tracing::{debug, warn};

/// Where copied text ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Clipboard,
    /// No usable clipboard; the caller should show the text instead
    Unavailable(String),
}

pub fn copy_to_clipboard(text: &str) -> CopyOutcome {
    copy_with(text, cli_clipboard::set_contents)
}

/// Copy through `set`, turning any failure into [`CopyOutcome::Unavailable`]
pub fn copy_with<F, E>(text: &str, set: F) -> CopyOutcome
where
    F: FnOnce(String) -> Result<(), E>,
    E: Display,
{
    match set(text.to_string()) {
        Ok(()) => {
            debug!("Copied {} bytes to clipboard", text.len());
            CopyOutcome::Clipboard
        }
        Err(e) => {
            warn!("Clipboard unavailable: {}", e);
            CopyOutcome::Unavailable(e.to_string())
        }
    }
}
