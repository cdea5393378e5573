// ABOUTME: Configuration constants for PRD Studio
// ABOUTME: Shared environment variable names so every package reads the same keys

pub mod constants;

pub use constants::*;
