//! Captured log entries.
//!
//! A [`CapturedEntry`] is one recorded logging event: the target ("logger
//! name"), level, formatted message, optional marker, and the contextual
//! properties in effect when the event fired.

use std::collections::BTreeMap;
use std::fmt;

use tracing::Level;

/// Contextual properties attached to an entry.
///
/// Holds the fields of every span in scope when the event fired (outermost
/// first, inner spans override outer keys) merged with the event's own fields
/// other than `message` and `marker`. Values are the rendered string form of
/// the recorded field values.
pub type Properties = BTreeMap<String, String>;

/// A single captured logging event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEntry {
    /// The event's target (module path unless overridden at the call site).
    pub target: String,

    /// The event's level.
    pub level: Level,

    /// The formatted message.
    pub message: String,

    /// The marker, taken from an event field named `marker`, if present.
    pub marker: Option<String>,

    /// Contextual properties (span fields plus remaining event fields).
    pub properties: Properties,
}

impl CapturedEntry {
    /// Look up a contextual property by key.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Check whether the entry carries the given marker.
    #[must_use]
    pub fn has_marker(&self, marker: &str) -> bool {
        self.marker.as_deref() == Some(marker)
    }
}

impl fmt::Display for CapturedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<5} {}: {}", self.level, self.target, self.message)?;

        if let Some(marker) = &self.marker {
            write!(f, " marker={marker}")?;
        }

        if !self.properties.is_empty() {
            let rendered: Vec<String> = self
                .properties
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect();
            write!(f, " {{{}}}", rendered.join(", "))?;
        }

        Ok(())
    }
}
