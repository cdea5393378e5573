// ABOUTME: Core utilities for PRD Studio
// ABOUTME: Foundational package providing the clock seam, naming and date helpers

pub mod clock;
pub mod constants;
pub mod utils;

// Re-export the clock seam
pub use clock::{Clock, FixedClock, SystemClock};

// Re-export constants
pub use constants::{DEFAULT_OUTPUT_DIR, DEFAULT_TITLE, TITLE_WORD_LIMIT};

// Re-export utilities
pub use utils::{display_width, format_date, format_time, slugify_filename, weeks_between};
