//! Integration tests for the assertion surface.

use log_capture::expect::{any_level, error, info, message, warn};
use log_capture::{AssertionError, CaptureError, LogCapture};

fn emit_startup_sequence() {
    tracing::info!("starting");
    tracing::debug!("loading config");
    tracing::warn!("config missing, using defaults");
    tracing::info!("ready");
}

#[test]
fn assert_logged_in_order_with_gaps() {
    let logs = LogCapture::start();
    emit_startup_sequence();

    logs.assert_logged(&[info("starting"), info("ready")]);
}

#[test]
#[should_panic(expected = "expected log entry was not captured")]
fn assert_logged_fails_on_wrong_order() {
    let logs = LogCapture::start();
    emit_startup_sequence();

    logs.assert_logged(&[info("ready"), info("starting")]);
}

#[test]
#[should_panic(expected = "expected log entry was not captured")]
fn assert_logged_fails_on_wrong_level() {
    let logs = LogCapture::start();
    emit_startup_sequence();

    logs.assert_logged(&[error("starting")]);
}

#[test]
fn assert_logged_in_any_order() {
    let logs = LogCapture::start();
    emit_startup_sequence();

    logs.assert_logged_in_any_order(&[info("ready"), warn("defaults"), info("starting")]);
}

#[test]
fn assert_logged_exactly_pairwise() {
    let logs = LogCapture::start();

    tracing::info!("one");
    tracing::warn!("two");

    logs.assert_logged_exactly(&[info("one"), warn("two")]);
}

#[test]
#[should_panic(expected = "captured entry count does not match")]
fn assert_logged_exactly_rejects_extra_entries() {
    let logs = LogCapture::start();

    tracing::info!("one");
    tracing::info!("unexpected extra");

    logs.assert_logged_exactly(&[info("one")]);
}

#[test]
#[should_panic(expected = "does not match expectation at position 1")]
fn assert_logged_exactly_reports_mismatch_position() {
    let logs = LogCapture::start();

    tracing::info!("one");
    tracing::info!("two");

    logs.assert_logged_exactly(&[info("one"), warn("two")]);
}

#[test]
fn assert_not_logged_passes_when_absent() {
    let logs = LogCapture::start();
    emit_startup_sequence();

    logs.assert_not_logged(&error("anything"));
}

#[test]
#[should_panic(expected = "forbidden log entry was captured")]
fn assert_not_logged_fails_with_offending_entry() {
    let logs = LogCapture::start();
    emit_startup_sequence();

    logs.assert_not_logged(&warn("defaults"));
}

#[test]
fn assert_nothing_else_logged_after_full_coverage() {
    let logs = LogCapture::start();

    tracing::info!("starting");
    tracing::info!("ready");

    logs.assert_logged(&[info("starting"), info("ready")]);
    logs.assert_nothing_else_logged();
}

#[test]
fn matching_is_cumulative_across_assertions() {
    let logs = LogCapture::start();
    emit_startup_sequence();

    logs.assert_logged(&[info("starting"), info("ready")]);
    logs.assert_logged_in_any_order(&[warn("defaults"), any_level("loading config")]);
    logs.assert_nothing_else_logged();
}

#[test]
#[should_panic(expected = "not covered by any assertion")]
fn assert_nothing_else_logged_lists_leftovers() {
    let logs = LogCapture::start();
    emit_startup_sequence();

    logs.assert_logged(&[info("starting")]);
    logs.assert_nothing_else_logged();
}

#[test]
fn expectations_on_marker_and_properties() {
    let logs = LogCapture::start();

    let span = tracing::info_span!("request", request_id = 42);
    let _enter = span.enter();
    tracing::info!(marker = "AUDIT", "purchase complete");

    logs.assert_logged(&[info("purchase")
        .with_marker("AUDIT")
        .with_property("request_id", message::regex(r"^\d+$").unwrap())]);
}

#[test]
fn expectations_on_target() {
    let logs = LogCapture::start();

    tracing::info!(target: "app::billing", "invoice sent");

    logs.assert_logged(&[info("invoice").from_target(message::starts_with("app::"))]);
    logs.assert_not_logged(&info("invoice").from_target(message::exact("app::shipping")));
}

#[test]
fn verify_logged_returns_report() {
    let logs = LogCapture::start();
    emit_startup_sequence();

    let report = logs.verify_logged(&[info("starting"), info("ready")]).unwrap();
    assert_eq!(report.pairs(), &[(0, 0), (1, 3)]);
}

#[test]
fn verify_logged_rejects_empty_expectations() {
    let logs = LogCapture::start();

    let err = logs.verify_logged(&[]).unwrap_err();
    assert!(matches!(err, CaptureError::NoExpectations));
}

#[test]
fn verify_failure_carries_readable_diff() {
    let logs = LogCapture::start();
    emit_startup_sequence();

    let err = logs.verify_logged(&[error("exploded")]).unwrap_err();
    let CaptureError::Assertion(assertion) = err else {
        panic!("expected an assertion error");
    };
    assert!(assertion.is_missing());

    let msg = assertion.to_string();
    assert!(msg.contains("Expectation #0"));
    assert!(msg.contains("ERROR message containing \"exploded\""));
    assert!(msg.contains("captured entries (4)"));
    assert!(msg.contains("config missing, using defaults"));
    assert!(msg.contains("Tip:"));
}

#[test]
fn verify_not_logged_failure_names_the_entry() {
    let logs = LogCapture::start();
    emit_startup_sequence();

    let err = logs.verify_not_logged(&warn("defaults")).unwrap_err();
    let CaptureError::Assertion(assertion) = err else {
        panic!("expected an assertion error");
    };
    assert!(assertion.is_unexpected());
    assert!(matches!(assertion, AssertionError::Unexpected { index: 2, .. }));
}

#[test]
fn failed_assertion_does_not_mark_entries() {
    let logs = LogCapture::start();

    tracing::info!("only entry");

    assert!(logs.verify_logged(&[info("missing")]).is_err());
    assert!(logs.verify_nothing_else_logged().is_err());

    logs.assert_logged(&[info("only entry")]);
    logs.assert_nothing_else_logged();
}

#[test]
fn duplicate_expectations_consume_distinct_entries() {
    let logs = LogCapture::start();

    tracing::info!("tick");
    tracing::info!("tick");

    logs.assert_logged(&[info("tick"), info("tick")]);
    assert!(logs.verify_logged(&[info("tick"), info("tick"), info("tick")]).is_err());
}
