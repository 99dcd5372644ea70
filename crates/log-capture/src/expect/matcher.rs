//! Recorded-vs-expected comparison.
//!
//! The scans in this module walk the ordered list of captured entries against
//! a sequence of expectations. They are pure: failures come back as data and
//! are turned into assertion errors by the capture handle.

use std::collections::HashSet;

use crate::entry::CapturedEntry;
use crate::expect::expectation::LogExpectation;

/// The result of a successful scan: which entry satisfied which expectation.
#[derive(Debug, Clone, Default)]
pub struct MatchReport {
    pairs: Vec<(usize, usize)>,
}

impl MatchReport {
    /// Pairs of `(expectation index, entry index)`.
    #[must_use]
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// The indices of the entries that were matched.
    #[must_use]
    pub fn entry_indices(&self) -> Vec<usize> {
        self.pairs.iter().map(|&(_, entry)| entry).collect()
    }

    /// The number of matched pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if the report is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Why a scan failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MatchFailure {
    /// An expectation had no matching entry.
    Missing {
        /// Index of the unsatisfied expectation.
        expectation: usize,
        /// First entry index that was considered (ordered scans only).
        searched_from: usize,
    },
    /// Entry and expectation counts differ (exact scans only).
    Count { expected: usize, actual: usize },
    /// The entry at this position does not satisfy the expectation at the
    /// same position (exact scans only).
    Mismatch { position: usize },
}

/// Ordered scan with gaps allowed: each expectation must match an entry
/// strictly after the previous expectation's entry.
pub(crate) fn match_ordered(
    entries: &[CapturedEntry],
    expected: &[LogExpectation],
) -> Result<MatchReport, MatchFailure> {
    let mut pairs = Vec::with_capacity(expected.len());
    let mut cursor = 0;

    for (i, expectation) in expected.iter().enumerate() {
        let found = entries[cursor..]
            .iter()
            .position(|entry| expectation.matches(entry))
            .map(|offset| cursor + offset);

        match found {
            Some(j) => {
                pairs.push((i, j));
                cursor = j + 1;
            }
            None => {
                return Err(MatchFailure::Missing {
                    expectation: i,
                    searched_from: cursor,
                });
            }
        }
    }

    Ok(MatchReport { pairs })
}

/// Unordered scan: each expectation must match a distinct entry, in any order.
pub(crate) fn match_unordered(
    entries: &[CapturedEntry],
    expected: &[LogExpectation],
) -> Result<MatchReport, MatchFailure> {
    let mut pairs = Vec::with_capacity(expected.len());
    let mut used: HashSet<usize> = HashSet::new();

    for (i, expectation) in expected.iter().enumerate() {
        let found = entries
            .iter()
            .enumerate()
            .find(|(j, entry)| !used.contains(j) && expectation.matches(entry))
            .map(|(j, _)| j);

        match found {
            Some(j) => {
                used.insert(j);
                pairs.push((i, j));
            }
            None => {
                return Err(MatchFailure::Missing {
                    expectation: i,
                    searched_from: 0,
                });
            }
        }
    }

    Ok(MatchReport { pairs })
}

/// Exact scan: entries and expectations must correspond pairwise, with no
/// unexpected and no missing entries.
pub(crate) fn match_exact(
    entries: &[CapturedEntry],
    expected: &[LogExpectation],
) -> Result<MatchReport, MatchFailure> {
    if entries.len() != expected.len() {
        return Err(MatchFailure::Count {
            expected: expected.len(),
            actual: entries.len(),
        });
    }

    for (position, (expectation, entry)) in expected.iter().zip(entries).enumerate() {
        if !expectation.matches(entry) {
            return Err(MatchFailure::Mismatch { position });
        }
    }

    Ok(MatchReport {
        pairs: (0..expected.len()).map(|i| (i, i)).collect(),
    })
}

/// Find the first entry satisfying the expectation, if any.
pub(crate) fn find_match(
    entries: &[CapturedEntry],
    expectation: &LogExpectation,
) -> Option<usize> {
    entries.iter().position(|entry| expectation.matches(entry))
}
