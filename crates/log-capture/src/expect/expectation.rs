//! Declarative per-entry expectations.
//!
//! A [`LogExpectation`] describes one entry the test expects to have been
//! logged: a level, one or more message matchers, and optional constraints on
//! target, marker, and contextual properties. Expectations are built with the
//! level constructors ([`info`], [`warn`], ...) and refined fluently.

use std::fmt;

use tracing::Level;

use crate::entry::CapturedEntry;
use crate::expect::message::MessageMatcher;

/// The level constraint of an expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelExpectation {
    /// Any level satisfies the expectation.
    Any,
    /// Only this level satisfies the expectation.
    Exactly(Level),
}

impl LevelExpectation {
    /// Check if the given level satisfies this constraint.
    #[must_use]
    pub fn matches(&self, level: Level) -> bool {
        match self {
            Self::Any => true,
            Self::Exactly(expected) => level == *expected,
        }
    }
}

impl fmt::Display for LevelExpectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "any level"),
            Self::Exactly(level) => write!(f, "{level}"),
        }
    }
}

/// A declarative expectation for a single captured entry.
#[derive(Debug, Clone)]
pub struct LogExpectation {
    level: LevelExpectation,
    message: Vec<MessageMatcher>,
    target: Option<MessageMatcher>,
    marker: Option<String>,
    properties: Vec<(String, MessageMatcher)>,
}

impl LogExpectation {
    /// Create an expectation with the given level constraint and message
    /// matcher.
    #[must_use]
    pub fn new(level: LevelExpectation, message: impl Into<MessageMatcher>) -> Self {
        Self {
            level,
            message: vec![message.into()],
            target: None,
            marker: None,
            properties: Vec::new(),
        }
    }

    /// Require an additional message matcher. All matchers must accept the
    /// message.
    #[must_use]
    pub fn and_message(mut self, matcher: impl Into<MessageMatcher>) -> Self {
        self.message.push(matcher.into());
        self
    }

    /// Constrain the entry's target ("logger name").
    #[must_use]
    pub fn from_target(mut self, matcher: impl Into<MessageMatcher>) -> Self {
        self.target = Some(matcher.into());
        self
    }

    /// Require the entry to carry the given marker.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Require a contextual property whose value satisfies the matcher.
    #[must_use]
    pub fn with_property(
        mut self,
        key: impl Into<String>,
        matcher: impl Into<MessageMatcher>,
    ) -> Self {
        self.properties.push((key.into(), matcher.into()));
        self
    }

    /// Get the level constraint.
    #[must_use]
    pub const fn level(&self) -> LevelExpectation {
        self.level
    }

    /// Check if the given entry satisfies every constraint of this
    /// expectation.
    #[must_use]
    pub fn matches(&self, entry: &CapturedEntry) -> bool {
        if !self.level.matches(entry.level) {
            return false;
        }

        if !self.message.iter().all(|m| m.matches(&entry.message)) {
            return false;
        }

        if let Some(target) = &self.target {
            if !target.matches(&entry.target) {
                return false;
            }
        }

        if let Some(marker) = &self.marker {
            if !entry.has_marker(marker) {
                return false;
            }
        }

        self.properties.iter().all(|(key, matcher)| {
            entry.property(key).is_some_and(|value| matcher.matches(value))
        })
    }
}

impl fmt::Display for LogExpectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} message", self.level)?;

        for (i, matcher) in self.message.iter().enumerate() {
            if i > 0 {
                write!(f, " and")?;
            }
            write!(f, " {matcher}")?;
        }

        if let Some(target) = &self.target {
            write!(f, ", target {target}")?;
        }

        if let Some(marker) = &self.marker {
            write!(f, ", marker {marker:?}")?;
        }

        for (key, matcher) in &self.properties {
            write!(f, ", property {key} {matcher}")?;
        }

        Ok(())
    }
}

/// Expect a TRACE entry with the given message matcher.
#[must_use]
pub fn trace(message: impl Into<MessageMatcher>) -> LogExpectation {
    LogExpectation::new(LevelExpectation::Exactly(Level::TRACE), message)
}

/// Expect a DEBUG entry with the given message matcher.
#[must_use]
pub fn debug(message: impl Into<MessageMatcher>) -> LogExpectation {
    LogExpectation::new(LevelExpectation::Exactly(Level::DEBUG), message)
}

/// Expect an INFO entry with the given message matcher.
#[must_use]
pub fn info(message: impl Into<MessageMatcher>) -> LogExpectation {
    LogExpectation::new(LevelExpectation::Exactly(Level::INFO), message)
}

/// Expect a WARN entry with the given message matcher.
#[must_use]
pub fn warn(message: impl Into<MessageMatcher>) -> LogExpectation {
    LogExpectation::new(LevelExpectation::Exactly(Level::WARN), message)
}

/// Expect an ERROR entry with the given message matcher.
#[must_use]
pub fn error(message: impl Into<MessageMatcher>) -> LogExpectation {
    LogExpectation::new(LevelExpectation::Exactly(Level::ERROR), message)
}

/// Expect an entry of any level with the given message matcher.
#[must_use]
pub fn any_level(message: impl Into<MessageMatcher>) -> LogExpectation {
    LogExpectation::new(LevelExpectation::Any, message)
}
