//! Expectation DSL and recorded-vs-expected scans.
//!
//! This module provides the declarative expectation types, the message
//! matchers they are built from, and the scan logic that compares the
//! captured entry list against a sequence of expectations.

mod expectation;
mod matcher;
pub mod message;

pub use expectation::{
    LevelExpectation, LogExpectation, any_level, debug, error, info, trace, warn,
};
pub(crate) use matcher::{MatchFailure, find_match, match_exact, match_ordered, match_unordered};
pub use matcher::MatchReport;
pub use message::{CompiledRegex, MessageMatcher};
