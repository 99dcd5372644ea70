//! Error types for log-capture.
//!
//! Assertion failures surface as panics inside `assert_*` methods (standard
//! test-failure signals); the `verify_*` methods return these types directly
//! so failure text can itself be asserted on.

use thiserror::Error;

use crate::entry::CapturedEntry;
use crate::expect::{LogExpectation, MatchFailure};
use crate::report::{
    format_count_error, format_mismatch_error, format_missing_error, format_unexpected_error,
    format_unmatched_error,
};

/// The main error type for log-capture operations.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// A verification was attempted with an empty expectation list.
    #[error("no expectations given: verifying an empty expectation list is a test bug")]
    NoExpectations,

    /// Invalid regex pattern in an expectation.
    #[error("invalid regex pattern: {0}")]
    Regex(#[from] regex::Error),

    /// A scan over the captured entries failed.
    #[error(transparent)]
    Assertion(#[from] AssertionError),
}

/// A failed comparison between captured and expected entries.
///
/// The `Display` output is the human-readable diff used as the panic message
/// of the corresponding `assert_*` method.
#[derive(Debug, Error)]
pub enum AssertionError {
    /// An expectation matched no captured entry.
    #[error("{}", format_missing_error(expectation, *index, *searched_from, *ordered, entries))]
    Missing {
        /// Description of the unsatisfied expectation.
        expectation: String,
        /// Index of the expectation in the supplied sequence.
        index: usize,
        /// First entry index considered (ordered scans).
        searched_from: usize,
        /// Whether the scan was ordered.
        ordered: bool,
        /// Rendered captured entries.
        entries: Vec<String>,
    },

    /// An exact scan found a different number of entries than expected.
    #[error("{}", format_count_error(*expected, *actual, entries))]
    Count {
        /// Number of expectations supplied.
        expected: usize,
        /// Number of entries captured.
        actual: usize,
        /// Rendered captured entries.
        entries: Vec<String>,
    },

    /// An exact scan found a non-matching entry at a position.
    #[error("{}", format_mismatch_error(*position, expectation, entry, entries))]
    Mismatch {
        /// Position of the mismatch.
        position: usize,
        /// Description of the expectation at that position.
        expectation: String,
        /// Rendered entry at that position.
        entry: String,
        /// Rendered captured entries.
        entries: Vec<String>,
    },

    /// A forbidden entry was captured.
    #[error("{}", format_unexpected_error(expectation, *index, entry))]
    Unexpected {
        /// Description of the negative expectation.
        expectation: String,
        /// Index of the offending entry.
        index: usize,
        /// Rendered offending entry.
        entry: String,
    },

    /// Entries remained unmatched after all assertions.
    #[error("{}", format_unmatched_error(unmatched, *total))]
    Unmatched {
        /// Rendered entries never matched by a positive assertion.
        unmatched: Vec<String>,
        /// Total number of captured entries.
        total: usize,
    },
}

impl AssertionError {
    /// Build an assertion error from a scan failure plus the context needed
    /// to render the diff.
    pub(crate) fn from_failure(
        failure: MatchFailure,
        entries: &[CapturedEntry],
        expected: &[LogExpectation],
        ordered: bool,
    ) -> Self {
        let rendered: Vec<String> = entries.iter().map(ToString::to_string).collect();

        match failure {
            MatchFailure::Missing {
                expectation,
                searched_from,
            } => Self::Missing {
                expectation: expected[expectation].to_string(),
                index: expectation,
                searched_from,
                ordered,
                entries: rendered,
            },
            MatchFailure::Count {
                expected: expected_count,
                actual,
            } => Self::Count {
                expected: expected_count,
                actual,
                entries: rendered,
            },
            MatchFailure::Mismatch { position } => Self::Mismatch {
                position,
                expectation: expected[position].to_string(),
                entry: rendered[position].clone(),
                entries: rendered,
            },
        }
    }

    /// Check if this is a missing-expectation failure.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    /// Check if this is an unexpected-entry failure.
    #[must_use]
    pub const fn is_unexpected(&self) -> bool {
        matches!(self, Self::Unexpected { .. })
    }
}

/// Result type alias for log-capture operations.
pub type Result<T> = std::result::Result<T, CaptureError>;
