use crate::config::{Config, ConfigError};
use rstest::rstest;
use serial_test::serial;
use std::cell::RefCell;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_defaults() {
    let config = Config::from_lookup(lookup_from(&[])).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.output_dir, PathBuf::from("."));
    assert_eq!(config.generation_delay, Duration::ZERO);
    assert!(config.log_filter.is_none());
}

#[test]
fn test_config_reads_only_prd_studio_keys() {
    let asked = RefCell::new(Vec::new());
    Config::from_lookup(|key| {
        asked.borrow_mut().push(key.to_string());
        None
    })
    .unwrap();

    // RUST_LOG is left to the tracing EnvFilter
    let asked = asked.into_inner();
    assert_eq!(asked.len(), 3);
    assert!(asked.iter().all(|key| key.starts_with("PRD_STUDIO_")), "{asked:?}");
}

#[test]
fn test_config_with_all_custom() {
    let config = Config::from_lookup(lookup_from(&[
        ("PRD_STUDIO_OUTPUT_DIR", "/tmp/prds"),
        ("PRD_STUDIO_GENERATION_DELAY_MS", "2000"),
        ("PRD_STUDIO_LOG", "debug"),
    ]))
    .unwrap();

    assert_eq!(config.output_dir, PathBuf::from("/tmp/prds"));
    assert_eq!(config.generation_delay, Duration::from_millis(2000));
    assert_eq!(config.log_filter.as_deref(), Some("debug"));
}

#[rstest]
#[case("not-a-number")]
#[case("-5")]
#[case("1.5")]
fn test_config_invalid_delay(#[case] value: &str) {
    let result = Config::from_lookup(lookup_from(&[("PRD_STUDIO_GENERATION_DELAY_MS", value)]));

    assert!(matches!(result, Err(ConfigError::InvalidDelay(_))));
}

#[test]
fn test_config_empty_output_dir() {
    let result = Config::from_lookup(lookup_from(&[("PRD_STUDIO_OUTPUT_DIR", "  ")]));

    assert!(matches!(result, Err(ConfigError::EmptyOutputDir)));
}

#[test]
fn test_config_blank_log_filter_is_ignored() {
    let config = Config::from_lookup(lookup_from(&[("PRD_STUDIO_LOG", "")])).unwrap();

    assert!(config.log_filter.is_none());
}

#[test]
#[serial]
fn test_config_from_env() {
    env::set_var("PRD_STUDIO_OUTPUT_DIR", "exports");
    env::remove_var("PRD_STUDIO_GENERATION_DELAY_MS");

    let config = Config::from_env().unwrap();

    assert_eq!(config.output_dir, PathBuf::from("exports"));
    assert_eq!(config.generation_delay, Duration::ZERO);

    env::remove_var("PRD_STUDIO_OUTPUT_DIR");
}
