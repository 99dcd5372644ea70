//! Integration tests for capture configuration.

use log_capture::{CaptureConfig, DEFAULT_MAX_LEVEL, Echo, Level};

#[test]
fn default_config() {
    let config = CaptureConfig::default();
    assert_eq!(config.max_level, DEFAULT_MAX_LEVEL);
    assert_eq!(config.max_level, Level::TRACE);
    assert!(config.targets.is_empty());
    assert_eq!(config.echo, Echo::Off);
    assert!(config.span_properties);
}

#[test]
fn builder_pattern() {
    let config = CaptureConfig::new()
        .max_level(Level::WARN)
        .target("app")
        .echo(Echo::Stdout)
        .span_properties(false);

    assert_eq!(config.max_level, Level::WARN);
    assert_eq!(config.targets, vec!["app".to_string()]);
    assert_eq!(config.echo, Echo::Stdout);
    assert!(!config.span_properties);
}

#[test]
fn multiple_targets_accumulate() {
    let config = CaptureConfig::new().target("app").target("worker");
    assert_eq!(config.targets.len(), 2);
}

#[test]
fn config_is_cloneable() {
    let config = CaptureConfig::new().target("app");
    let copy = config.clone();
    assert_eq!(copy.targets, config.targets);
}

#[test]
fn echo_default_is_off() {
    assert_eq!(Echo::default(), Echo::Off);
}
