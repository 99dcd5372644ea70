//! Integration tests for the `log` crate bridge.
//!
//! Run with `--features log-compat`.

#![cfg(feature = "log-compat")]

use log_capture::expect::{info, warn};
use log_capture::{CaptureConfig, Level, LogCapture};

#[test]
fn captures_log_macro_output() {
    let logs = LogCapture::start();

    log::info!("hello from the log crate");

    let entries = logs.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].level, Level::INFO);
    assert_eq!(entries[0].message, "hello from the log crate");
}

#[test]
fn bridge_preserves_target() {
    let logs = LogCapture::start();

    log::warn!(target: "legacy::subsystem", "deprecated call");

    let entry = &logs.entries()[0];
    assert_eq!(entry.target, "legacy::subsystem");
    assert_eq!(entry.level, Level::WARN);
}

#[test]
fn target_filter_applies_to_bridged_targets() {
    let logs = LogCapture::with_config(CaptureConfig::new().target("legacy"));

    log::info!(target: "legacy::subsystem", "kept");
    log::info!(target: "elsewhere", "dropped");

    let entries = logs.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].target, "legacy::subsystem");
    assert_eq!(entries[0].message, "kept");
}

#[test]
fn level_filter_applies_to_bridged_events() {
    let logs = LogCapture::with_config(CaptureConfig::new().max_level(Level::INFO));

    log::info!("kept");
    log::debug!("dropped");

    assert_eq!(logs.len(), 1);
    assert_eq!(logs.entries()[0].level, Level::INFO);
}

#[test]
fn bridge_metadata_does_not_leak_into_properties() {
    let logs = LogCapture::start();

    log::info!("plain message");

    // The bridge normalizes record metadata into `log.*` fields; those are
    // implementation detail, not contextual properties
    assert!(logs.entries()[0].properties.is_empty());
}

#[test]
fn assertions_work_over_bridged_entries() {
    let logs = LogCapture::start();

    log::info!("starting up");
    log::warn!("cache miss rate {}%", 42);

    logs.assert_logged(&[info("starting"), warn("cache miss rate 42%")]);
    logs.assert_nothing_else_logged();
}

#[test]
fn starting_multiple_captures_reinstalls_bridge_quietly() {
    {
        let logs = LogCapture::start();
        log::info!("first session");
        assert_eq!(logs.len(), 1);
    }
    {
        let logs = LogCapture::start();
        log::info!("second session");
        assert_eq!(logs.len(), 1);
    }
}
