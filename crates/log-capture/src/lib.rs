//! log-capture: capture log output in tests and assert on it
//!
//! This crate records every `tracing` event emitted during a test into an
//! ordered in-memory list and exposes a fluent expectation DSL over the
//! captured entries. Capture is scoped: starting a [`LogCapture`] installs a
//! collector as the thread's default subscriber, and dropping the handle (or
//! leaving the `#[log_test]` function) removes it again, so parallel tests
//! never see each other's output.
//!
//! # Features
//!
//! - **Scoped capture** with thread-local test isolation
//! - **Structured entries**: target, level, message, marker, and the fields
//!   of every span in scope as contextual properties
//! - **Fluent expectations** with literal, substring, regex, and glob message
//!   matchers
//! - **Ordered, unordered, exact, and negative assertions** with readable
//!   failure diffs
//! - **`log` crate bridge** so `log::info!` output is captured too
//!   (feature: `log-compat`)
//!
//! # Example
//!
//! ```
//! use log_capture::prelude::*;
//!
//! #[tracing::instrument(fields(request_id = 7))]
//! fn handle() {
//!     tracing::info!(marker = "AUDIT", "purchase complete");
//! }
//!
//! let logs = LogCapture::start();
//! handle();
//!
//! logs.assert_logged(&[info("purchase complete")
//!     .with_marker("AUDIT")
//!     .with_property("request_id", exact("7"))]);
//! logs.assert_nothing_else_logged();
//! ```

// Re-export macros
pub use log_capture_macros::{expected, log_test};
// The host framework's level type, used throughout the expectation DSL
pub use tracing::Level;

pub mod capture;
pub mod config;
pub mod entry;
pub mod error;
pub mod expect;
pub mod prelude;
pub mod report;

pub use capture::{CaptureLayer, LogCapture};
pub use config::{CaptureConfig, DEFAULT_MAX_LEVEL, Echo};
pub use entry::{CapturedEntry, Properties};
pub use error::{AssertionError, CaptureError, Result};
pub use expect::{
    CompiledRegex, LevelExpectation, LogExpectation, MatchReport, MessageMatcher,
};
