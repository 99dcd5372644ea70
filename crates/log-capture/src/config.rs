//! Configuration for log capture.
//!
//! This module defines the capture configuration: level filtering, target
//! scoping, echo behavior, and span-property recording.

use tracing::{Level, Metadata};

/// Default maximum level captured (everything).
pub const DEFAULT_MAX_LEVEL: Level = Level::TRACE;

/// Where to echo captured events while they are being recorded.
///
/// Capture replaces the default subscriber for the duration of a test, so
/// nothing reaches the terminal unless echoing is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Echo {
    /// Do not echo captured events.
    #[default]
    Off,
    /// Echo captured events to stderr.
    Stderr,
    /// Echo captured events to stdout.
    Stdout,
}

/// Configuration for a capture session.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Maximum level to record. Events above this verbosity are ignored.
    pub max_level: Level,

    /// Target prefixes to record. Empty means record everything.
    pub targets: Vec<String>,

    /// Echo behavior for captured events.
    pub echo: Echo,

    /// Whether fields of in-scope spans are merged into entry properties.
    pub span_properties: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            targets: Vec::new(),
            echo: Echo::default(),
            span_properties: true,
        }
    }
}

impl CaptureConfig {
    /// Create a new capture configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum level to record.
    #[must_use]
    pub const fn max_level(mut self, level: Level) -> Self {
        self.max_level = level;
        self
    }

    /// Restrict capture to targets under the given prefix.
    ///
    /// May be called multiple times; an event is recorded if its target equals
    /// any prefix or sits below it in the module path (`prefix::...`).
    #[must_use]
    pub fn target(mut self, prefix: impl Into<String>) -> Self {
        self.targets.push(prefix.into());
        self
    }

    /// Set the echo behavior.
    #[must_use]
    pub const fn echo(mut self, echo: Echo) -> Self {
        self.echo = echo;
        self
    }

    /// Set whether span fields are merged into entry properties.
    #[must_use]
    pub const fn span_properties(mut self, enabled: bool) -> Self {
        self.span_properties = enabled;
        self
    }

    /// Check whether an event with the given metadata should be recorded.
    pub(crate) fn accepts(&self, metadata: &Metadata<'_>) -> bool {
        *metadata.level() <= self.max_level && self.accepts_target(metadata.target())
    }

    fn accepts_target(&self, target: &str) -> bool {
        self.targets.is_empty()
            || self.targets.iter().any(|prefix| {
                target == prefix
                    || (target.starts_with(prefix)
                        && target[prefix.len()..].starts_with("::"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_captures_all_levels() {
        let config = CaptureConfig::default();
        assert_eq!(config.max_level, Level::TRACE);
        assert!(config.targets.is_empty());
        assert_eq!(config.echo, Echo::Off);
        assert!(config.span_properties);
    }

    #[test]
    fn builder_chain() {
        let config = CaptureConfig::new()
            .max_level(Level::DEBUG)
            .target("app")
            .target("lib::worker")
            .echo(Echo::Stderr)
            .span_properties(false);

        assert_eq!(config.max_level, Level::DEBUG);
        assert_eq!(config.targets, vec!["app", "lib::worker"]);
        assert_eq!(config.echo, Echo::Stderr);
        assert!(!config.span_properties);
    }

    #[test]
    fn target_prefix_matching() {
        let config = CaptureConfig::new().target("app");

        assert!(config.accepts_target("app"));
        assert!(config.accepts_target("app::server"));
        assert!(config.accepts_target("app::server::http"));
        assert!(!config.accepts_target("application"));
        assert!(!config.accepts_target("other"));
    }

    #[test]
    fn empty_targets_accept_everything() {
        let config = CaptureConfig::new();
        assert!(config.accepts_target("anything::at::all"));
    }
}
