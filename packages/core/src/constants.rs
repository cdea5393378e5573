/// Title used when the problem statement has no words
pub const DEFAULT_TITLE: &str = "Product Requirement Document";

/// Number of problem statement words carried into a derived title
pub const TITLE_WORD_LIMIT: usize = 6;

/// Directory downloads land in when nothing else is configured
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Fixed date format used in serialized documents (ISO 8601 calendar date)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fixed time format used in the on-screen footer
pub const TIME_FORMAT: &str = "%H:%M:%S";
