use crate::display::{documents_table, format_stats, templates_table, truncate};
use chrono::{TimeZone, Utc};
use prd_studio_core::FixedClock;
use prd_studio_ideate::{PRDGenerator, RawInputs, SessionStats, SessionStore, TemplateManager};
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exactly ten", 11), "exactly ten");
    assert_eq!(truncate("a much longer sentence", 10), "a much ...");
}

#[test]
fn test_templates_table_lists_catalog() {
    let rendered = templates_table(TemplateManager::new().get_templates()).to_string();

    for id in ["new-feature", "enhancement", "bug-fix", "mvp"] {
        assert!(rendered.contains(id), "missing {id}");
    }
    assert!(rendered.contains("NEW FEATURE"));
}

#[test]
fn test_documents_table_shows_saved_prds() {
    let at = Utc.with_ymd_and_hms(2024, 9, 2, 10, 0, 0).unwrap();
    let clock = Arc::new(FixedClock::new(at));
    let prd = PRDGenerator::with_clock(clock.clone())
        .generate(&RawInputs::new("Search is slow", "analysts", "speed", "index"));
    let mut store = SessionStore::with_clock(clock);
    let saved = store.save(&prd);

    let rendered = documents_table(store.list()).to_string();

    assert!(rendered.contains(saved.id.as_deref().unwrap()));
    assert!(rendered.contains("PRD: Search is slow..."));
    assert!(rendered.contains("2024-09-02"));
    assert!(rendered.contains("11"));
}

#[test]
fn test_format_stats() {
    let stats = SessionStats {
        total: 3,
        per_week: 1,
        avg_requirements: 11,
    };

    assert_eq!(
        format_stats(&stats),
        "Total PRDs: 3  |  Per Week: 1  |  Avg Requirements: 11"
    );
}
