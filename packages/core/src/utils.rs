// ABOUTME: Shared utility functions for PRD Studio
// ABOUTME: Filename slugging, fixed-format date rendering, title width and week arithmetic

use chrono::{DateTime, Utc};

use crate::constants::{DATE_FORMAT, TIME_FORMAT};

/// Turn a document title into a download-safe file stem.
///
/// Lowercases the title and replaces every character outside `[a-z0-9]` with `_`,
/// one underscore per character. No trimming or collapsing is done.
pub fn slugify_filename(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Render a timestamp as an ISO 8601 calendar date (`YYYY-MM-DD`, UTC)
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format(DATE_FORMAT).to_string()
}

/// Render a timestamp as `HH:MM:SS` (UTC)
pub fn format_time(at: &DateTime<Utc>) -> String {
    at.format(TIME_FORMAT).to_string()
}

/// Length of a string in UTF-16 code units, the unit title underlines are measured in
pub fn display_width(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Whole weeks elapsed from `from` to `to`, rounded up. Negative spans count as zero.
pub fn weeks_between(from: &DateTime<Utc>, to: &DateTime<Utc>) -> u64 {
    const WEEK_MS: i64 = 1000 * 60 * 60 * 24 * 7;

    let elapsed = to.signed_duration_since(*from).num_milliseconds();
    if elapsed <= 0 {
        return 0;
    }
    ((elapsed + WEEK_MS - 1) / WEEK_MS) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_slugify_filename() {
        assert_eq!(
            slugify_filename("PRD: Users cannot find the settings page..."),
            "prd__users_cannot_find_the_settings_page___"
        );
        assert_eq!(slugify_filename("X"), "x");
        assert_eq!(slugify_filename(""), "");
    }

    #[test]
    fn test_slugify_filename_replaces_non_ascii_per_char() {
        // Each non-ASCII character becomes exactly one underscore
        assert_eq!(slugify_filename("Café 2.0"), "caf__2_0");
    }

    #[test]
    fn test_format_date_and_time() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap();

        assert_eq!(format_date(&at), "2024-03-05");
        assert_eq!(format_time(&at), "14:07:09");
    }

    #[test]
    fn test_display_width_counts_utf16_units() {
        assert_eq!(display_width("X"), 1);
        assert_eq!(display_width("PRD: a..."), 9);
        assert_eq!(display_width("é"), 1);
        // Astral plane characters take two UTF-16 units
        assert_eq!(display_width("🚀"), 2);
    }

    #[test]
    fn test_weeks_between() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(weeks_between(&start, &start), 0);
        assert_eq!(weeks_between(&start, &(start + Duration::minutes(1))), 1);
        assert_eq!(weeks_between(&start, &(start + Duration::days(7))), 1);
        assert_eq!(weeks_between(&start, &(start + Duration::days(8))), 2);
        assert_eq!(weeks_between(&(start + Duration::days(1)), &start), 0);
    }
}
