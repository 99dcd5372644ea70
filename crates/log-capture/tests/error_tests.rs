//! Integration tests for error types and failure-report formatting.

use log_capture::expect::{info, warn};
use log_capture::{CaptureError, LogCapture};

#[test]
fn missing_error_shows_boxed_entry_snippet() {
    let logs = LogCapture::start();

    tracing::info!("starting");
    tracing::warn!("low disk space");

    let err = logs.verify_logged(&[info("ready")]).unwrap_err();
    let msg = err.to_string();

    assert!(msg.contains("┌─ captured entries (2)"));
    assert!(msg.contains("0: INFO"));
    assert!(msg.contains("starting"));
    assert!(msg.contains("1: WARN"));
    assert!(msg.contains("low disk space"));
    assert!(msg.contains("└"));
}

#[test]
fn missing_error_is_numbered_from_snippet_offset() {
    let logs = LogCapture::start();

    for i in 0..30 {
        tracing::info!("tick {i}");
    }

    let err = logs.verify_logged(&[info("tock")]).unwrap_err();
    let msg = err.to_string();

    assert!(msg.contains("captured entries (30)"));
    assert!(msg.contains("entries hidden"));
    assert!(msg.contains("tick 29"));
}

#[test]
fn empty_capture_renders_placeholder() {
    let logs = LogCapture::start();

    let err = logs.verify_logged(&[warn("anything")]).unwrap_err();
    assert!(err.to_string().contains("(no entries were captured)"));
}

#[test]
fn ordered_failure_mentions_search_start() {
    let logs = LogCapture::start();

    tracing::info!("ready");
    tracing::info!("starting");

    // "starting" sits before the cursor once "ready" matched entry 0
    let err = logs
        .verify_logged(&[info("starting"), info("ready")])
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("starting at entry 2"));
}

#[test]
fn no_expectations_is_its_own_error() {
    let logs = LogCapture::start();
    let err = logs.verify_logged_in_any_order(&[]).unwrap_err();
    assert!(matches!(err, CaptureError::NoExpectations));
    assert!(err.to_string().contains("test bug"));
}
