//! Message matchers.
//!
//! This module defines the string predicates an expectation applies to a
//! captured message (or target, or property value): exact equality, substring,
//! prefix/suffix, regular expressions, and globs.

use std::fmt;

use regex::Regex;

/// A predicate over a captured string.
#[derive(Clone)]
pub enum MessageMatcher {
    /// The string must equal this value exactly.
    Exact(String),

    /// The string must contain this value.
    Contains(String),

    /// The string must start with this value.
    StartsWith(String),

    /// The string must end with this value.
    EndsWith(String),

    /// The string must contain a match of this regular expression.
    Regex(CompiledRegex),

    /// The whole string must match this glob pattern (`*` and `?`).
    Glob(String),
}

impl MessageMatcher {
    /// Create an exact-equality matcher.
    #[must_use]
    pub fn exact(s: impl Into<String>) -> Self {
        Self::Exact(s.into())
    }

    /// Create a substring matcher.
    #[must_use]
    pub fn contains(s: impl Into<String>) -> Self {
        Self::Contains(s.into())
    }

    /// Create a prefix matcher.
    #[must_use]
    pub fn starts_with(s: impl Into<String>) -> Self {
        Self::StartsWith(s.into())
    }

    /// Create a suffix matcher.
    #[must_use]
    pub fn ends_with(s: impl Into<String>) -> Self {
        Self::EndsWith(s.into())
    }

    /// Create a regex matcher.
    ///
    /// # Errors
    ///
    /// Returns an error if the regex pattern is invalid.
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        Ok(Self::Regex(CompiledRegex::new(pattern.to_string(), regex)))
    }

    /// Create a glob matcher.
    #[must_use]
    pub fn glob(pattern: impl Into<String>) -> Self {
        Self::Glob(pattern.into())
    }

    /// Check if this matcher accepts the given text.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::Exact(s) => text == s,
            Self::Contains(s) => text.contains(s),
            Self::StartsWith(s) => text.starts_with(s),
            Self::EndsWith(s) => text.ends_with(s),
            Self::Regex(r) => r.is_match(text),
            Self::Glob(pattern) => glob_match(pattern, text),
        }
    }
}

impl fmt::Debug for MessageMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(s) => write!(f, "Exact({s:?})"),
            Self::Contains(s) => write!(f, "Contains({s:?})"),
            Self::StartsWith(s) => write!(f, "StartsWith({s:?})"),
            Self::EndsWith(s) => write!(f, "EndsWith({s:?})"),
            Self::Regex(r) => write!(f, "Regex({:?})", r.pattern()),
            Self::Glob(s) => write!(f, "Glob({s:?})"),
        }
    }
}

impl fmt::Display for MessageMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(s) => write!(f, "equal to {s:?}"),
            Self::Contains(s) => write!(f, "containing {s:?}"),
            Self::StartsWith(s) => write!(f, "starting with {s:?}"),
            Self::EndsWith(s) => write!(f, "ending with {s:?}"),
            Self::Regex(r) => write!(f, "matching /{}/", r.pattern()),
            Self::Glob(s) => write!(f, "matching glob {s:?}"),
        }
    }
}

impl From<&str> for MessageMatcher {
    fn from(s: &str) -> Self {
        Self::Contains(s.to_string())
    }
}

impl From<String> for MessageMatcher {
    fn from(s: String) -> Self {
        Self::Contains(s)
    }
}

/// Create an exact-equality matcher.
#[must_use]
pub fn exact(s: impl Into<String>) -> MessageMatcher {
    MessageMatcher::exact(s)
}

/// Create a substring matcher.
#[must_use]
pub fn contains(s: impl Into<String>) -> MessageMatcher {
    MessageMatcher::contains(s)
}

/// Create a prefix matcher.
#[must_use]
pub fn starts_with(s: impl Into<String>) -> MessageMatcher {
    MessageMatcher::starts_with(s)
}

/// Create a suffix matcher.
#[must_use]
pub fn ends_with(s: impl Into<String>) -> MessageMatcher {
    MessageMatcher::ends_with(s)
}

/// Create a regex matcher.
///
/// # Errors
///
/// Returns an error if the regex pattern is invalid.
pub fn regex(pattern: &str) -> Result<MessageMatcher, regex::Error> {
    MessageMatcher::regex(pattern)
}

/// Create a glob matcher.
#[must_use]
pub fn glob(pattern: impl Into<String>) -> MessageMatcher {
    MessageMatcher::glob(pattern)
}

/// A compiled regular expression with its source pattern.
#[derive(Clone)]
pub struct CompiledRegex {
    pattern: String,
    regex: Regex,
}

impl CompiledRegex {
    /// Create a new compiled regex.
    #[must_use]
    pub const fn new(pattern: String, regex: Regex) -> Self {
        Self { pattern, regex }
    }

    /// Get the source pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Check if the text contains a match.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Glob matching over the whole text.
///
/// Supports `*` (any characters) and `?` (single character).
fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let mut p = 0;
    let mut t = 0;
    let mut star_p = None;
    let mut star_t = 0;

    while t < text.len() {
        if p < pattern.len() && (pattern[p] == '?' || pattern[p] == text[t]) {
            p += 1;
            t += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            star_p = Some(p);
            star_t = t;
            p += 1;
        } else if let Some(sp) = star_p {
            p = sp + 1;
            star_t += 1;
            t = star_t;
        } else {
            return false;
        }
    }

    // Trailing stars may match the empty remainder
    while p < pattern.len() && pattern[p] == '*' {
        p += 1;
    }

    p == pattern.len()
}
