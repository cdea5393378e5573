// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across PRD Studio

// Export Configuration
pub const PRD_STUDIO_OUTPUT_DIR: &str = "PRD_STUDIO_OUTPUT_DIR";

// Generation Configuration
pub const PRD_STUDIO_GENERATION_DELAY_MS: &str = "PRD_STUDIO_GENERATION_DELAY_MS";

// Logging
pub const PRD_STUDIO_LOG: &str = "PRD_STUDIO_LOG";
