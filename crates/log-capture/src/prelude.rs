//! Convenience re-exports for writing log assertions.
//!
//! ```
//! use log_capture::prelude::*;
//!
//! let logs = LogCapture::start();
//! tracing::info!("started");
//! logs.assert_logged(&[info("started")]);
//! ```

pub use crate::capture::{CaptureLayer, LogCapture};
pub use crate::config::{CaptureConfig, Echo};
pub use crate::entry::{CapturedEntry, Properties};
pub use crate::error::{AssertionError, CaptureError, Result};
pub use crate::expect::message::{self, contains, ends_with, exact, glob, regex, starts_with};
pub use crate::expect::{
    LevelExpectation, LogExpectation, MessageMatcher, any_level, debug, error, info, trace, warn,
};
pub use log_capture_macros::{expected, log_test};
pub use tracing::Level;
