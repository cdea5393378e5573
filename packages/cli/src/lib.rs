// ABOUTME: PRD Studio CLI library
// ABOUTME: Configuration, logging setup, generate-argument handling, prompts and terminal display

pub mod clipboard;
pub mod commands;
pub mod config;
pub mod display;
pub mod logging;
pub mod prompts;

pub use clipboard::{copy_to_clipboard, CopyOutcome};
pub use commands::{resolve_inputs, GenerateArgs};
pub use config::{Config, ConfigError};
pub use logging::init_tracing;
pub use prompts::cancelled_as_none;

#[cfg(test)]
mod tests;
