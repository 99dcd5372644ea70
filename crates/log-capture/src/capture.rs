//! Capture lifecycle and assertion surface.
//!
//! [`LogCapture`] installs an in-memory collector as the thread's default
//! subscriber for the lifetime of the handle and exposes both panicking
//! `assert_*` methods and non-panicking `verify_*` counterparts over the
//! recorded entries.

mod layer;

use std::sync::Arc;

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::Registry;

use crate::config::CaptureConfig;
use crate::entry::CapturedEntry;
use crate::error::{AssertionError, CaptureError, Result};
use crate::expect::{
    LogExpectation, MatchReport, find_match, match_exact, match_ordered, match_unordered,
};
use layer::CaptureStore;
pub use layer::CaptureLayer;

/// A capture session over the current thread's log output.
///
/// Creating a handle installs the collector; dropping it uninstalls the
/// collector. Each handle sees only events emitted on its own thread while it
/// is alive, so parallel tests are isolated from each other.
///
/// # Example
///
/// ```
/// use log_capture::LogCapture;
/// use log_capture::expect::{info, warn};
///
/// let logs = LogCapture::start();
///
/// tracing::info!("listening on 8080");
/// tracing::warn!("connection lost");
///
/// logs.assert_logged(&[info("listening"), warn("connection lost")]);
/// ```
#[must_use = "dropping the handle stops capturing"]
pub struct LogCapture {
    store: Arc<CaptureStore>,
    _guard: DefaultGuard,
}

impl LogCapture {
    /// Start capturing with the default configuration.
    pub fn start() -> Self {
        Self::with_config(CaptureConfig::default())
    }

    /// Start capturing with the given configuration.
    pub fn with_config(config: CaptureConfig) -> Self {
        // Forward `log` macro calls into tracing. Installation is global and
        // idempotent; an already-installed bridge is not an error.
        #[cfg(feature = "log-compat")]
        {
            let _ = tracing_log::LogTracer::init();
        }

        let store = Arc::new(CaptureStore::default());
        let layer = CaptureLayer::new(Arc::clone(&store), config);
        let guard = tracing::subscriber::set_default(Registry::default().with(layer));

        Self {
            store,
            _guard: guard,
        }
    }

    /// An ordered snapshot of the entries captured so far.
    #[must_use]
    pub fn entries(&self) -> Vec<CapturedEntry> {
        self.store.snapshot()
    }

    /// The number of entries captured so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.len() == 0
    }

    /// Discard all captured entries and match bookkeeping.
    pub fn clear(&self) {
        self.store.clear();
    }

    /// Verify that the expectations match captured entries in order, with
    /// other entries allowed in between.
    ///
    /// On success the matched entries are marked for
    /// [`assert_nothing_else_logged`](Self::assert_nothing_else_logged).
    pub fn verify_logged(&self, expected: &[LogExpectation]) -> Result<MatchReport> {
        self.verify_scan(expected, match_ordered, true)
    }

    /// Verify that each expectation matches a distinct captured entry, in any
    /// order.
    pub fn verify_logged_in_any_order(&self, expected: &[LogExpectation]) -> Result<MatchReport> {
        self.verify_scan(expected, match_unordered, false)
    }

    /// Verify that the captured entries correspond pairwise to the
    /// expectations, with no unexpected and no missing entries.
    pub fn verify_logged_exactly(&self, expected: &[LogExpectation]) -> Result<MatchReport> {
        self.verify_scan(expected, match_exact, true)
    }

    /// Verify that no captured entry satisfies the expectation.
    pub fn verify_not_logged(&self, expectation: &LogExpectation) -> Result<()> {
        let entries = self.entries();
        match find_match(&entries, expectation) {
            None => Ok(()),
            Some(index) => Err(CaptureError::Assertion(AssertionError::Unexpected {
                expectation: expectation.to_string(),
                index,
                entry: entries[index].to_string(),
            })),
        }
    }

    /// Verify that every captured entry was matched by a previous positive
    /// verification on this handle.
    pub fn verify_nothing_else_logged(&self) -> Result<()> {
        let unmatched = self.store.unmatched();
        if unmatched.is_empty() {
            return Ok(());
        }

        Err(CaptureError::Assertion(AssertionError::Unmatched {
            unmatched: unmatched
                .iter()
                .map(|(i, entry)| format!("entry {i}: {entry}"))
                .collect(),
            total: self.store.len(),
        }))
    }

    /// Assert that the expectations match captured entries in order, with
    /// other entries allowed in between.
    ///
    /// # Panics
    ///
    /// Panics with a human-readable diff if the expectations are not
    /// satisfied.
    #[track_caller]
    pub fn assert_logged(&self, expected: &[LogExpectation]) {
        if let Err(err) = self.verify_logged(expected) {
            panic!("{err}");
        }
    }

    /// Assert that each expectation matches a distinct captured entry, in any
    /// order.
    ///
    /// # Panics
    ///
    /// Panics with a human-readable diff if the expectations are not
    /// satisfied.
    #[track_caller]
    pub fn assert_logged_in_any_order(&self, expected: &[LogExpectation]) {
        if let Err(err) = self.verify_logged_in_any_order(expected) {
            panic!("{err}");
        }
    }

    /// Assert that the captured entries correspond pairwise to the
    /// expectations.
    ///
    /// # Panics
    ///
    /// Panics with a human-readable diff on any unexpected, missing, or
    /// mismatched entry.
    #[track_caller]
    pub fn assert_logged_exactly(&self, expected: &[LogExpectation]) {
        if let Err(err) = self.verify_logged_exactly(expected) {
            panic!("{err}");
        }
    }

    /// Assert that no captured entry satisfies the expectation.
    ///
    /// # Panics
    ///
    /// Panics with the offending entry if one matches.
    #[track_caller]
    pub fn assert_not_logged(&self, expectation: &LogExpectation) {
        if let Err(err) = self.verify_not_logged(expectation) {
            panic!("{err}");
        }
    }

    /// Assert that every captured entry was matched by a previous positive
    /// assertion on this handle.
    ///
    /// # Panics
    ///
    /// Panics listing the entries no assertion accounted for.
    #[track_caller]
    pub fn assert_nothing_else_logged(&self) {
        if let Err(err) = self.verify_nothing_else_logged() {
            panic!("{err}");
        }
    }

    fn verify_scan(
        &self,
        expected: &[LogExpectation],
        scan: impl Fn(
            &[CapturedEntry],
            &[LogExpectation],
        ) -> std::result::Result<MatchReport, crate::expect::MatchFailure>,
        ordered: bool,
    ) -> Result<MatchReport> {
        if expected.is_empty() {
            return Err(CaptureError::NoExpectations);
        }

        let entries = self.entries();
        match scan(&entries, expected) {
            Ok(report) => {
                self.store.mark(&report.entry_indices());
                Ok(report)
            }
            Err(failure) => Err(CaptureError::Assertion(AssertionError::from_failure(
                failure, &entries, expected, ordered,
            ))),
        }
    }
}
