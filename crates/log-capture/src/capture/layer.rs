//! The in-memory collector layer.
//!
//! [`CaptureLayer`] hooks into the subscriber as a `tracing_subscriber::Layer`:
//! span fields are recorded into span extensions, and every accepted event is
//! turned into a [`CapturedEntry`] and pushed onto the shared store.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::field::{Field, Visit};
use tracing::{Event, Metadata, Subscriber, span};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::config::{CaptureConfig, Echo};
use crate::entry::{CapturedEntry, Properties};

/// Shared store of captured entries plus match bookkeeping.
#[derive(Debug, Default)]
pub(crate) struct CaptureStore {
    inner: Mutex<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    entries: Vec<CapturedEntry>,
    matched: HashSet<usize>,
}

impl CaptureStore {
    fn push(&self, entry: CapturedEntry) {
        self.lock().entries.push(entry);
    }

    pub(crate) fn snapshot(&self) -> Vec<CapturedEntry> {
        self.lock().entries.clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub(crate) fn clear(&self) {
        let mut inner = self.lock();
        inner.entries.clear();
        inner.matched.clear();
    }

    /// Record that the given entry indices were matched by an assertion.
    pub(crate) fn mark(&self, indices: &[usize]) {
        self.lock().matched.extend(indices.iter().copied());
    }

    /// Entries never matched by any positive assertion, with their indices.
    pub(crate) fn unmatched(&self) -> Vec<(usize, CapturedEntry)> {
        let inner = self.lock();
        inner
            .entries
            .iter()
            .enumerate()
            .filter(|(i, _)| !inner.matched.contains(i))
            .map(|(i, entry)| (i, entry.clone()))
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Span fields recorded into span extensions, merged into entry properties.
#[derive(Debug, Default)]
struct PropertyMap(Properties);

/// The listener installed for the duration of a capture session.
pub struct CaptureLayer {
    store: Arc<CaptureStore>,
    config: CaptureConfig,
}

impl CaptureLayer {
    pub(crate) const fn new(store: Arc<CaptureStore>, config: CaptureConfig) -> Self {
        Self { store, config }
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        // Spans stay enabled so their fields are available as properties
        if !metadata.is_event() {
            return true;
        }

        // Events forwarded from the `log` crate arrive through shared static
        // callsites whose target is "log"; the real target only exists in the
        // per-event normalized metadata, so their filtering happens in
        // `on_event`.
        #[cfg(feature = "log-compat")]
        if metadata.target() == "log" {
            return true;
        }

        self.config.accepts(metadata)
    }

    fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else { return };

        let mut visitor = SpanVisitor::default();
        attrs.record(&mut visitor);
        span.extensions_mut().insert(PropertyMap(visitor.properties));
    }

    fn on_record(&self, id: &span::Id, values: &span::Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else { return };

        let mut visitor = SpanVisitor::default();
        values.record(&mut visitor);

        let mut extensions = span.extensions_mut();
        if let Some(map) = extensions.get_mut::<PropertyMap>() {
            map.0.extend(visitor.properties);
        } else {
            extensions.insert(PropertyMap(visitor.properties));
        }
    }

    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        // Bridged `log` events carry their original target, level, and
        // location in normalized metadata rather than the callsite's
        #[cfg(feature = "log-compat")]
        let normalized = tracing_log::NormalizeEvent::normalized_metadata(event);
        #[cfg(feature = "log-compat")]
        let metadata = normalized.as_ref().unwrap_or_else(|| event.metadata());
        #[cfg(not(feature = "log-compat"))]
        let metadata = event.metadata();

        // Bridged events bypass `enabled`, so apply the filter here
        #[cfg(feature = "log-compat")]
        if normalized.is_some() && !self.config.accepts(metadata) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let mut properties = Properties::new();

        // Outermost span first; inner spans and event fields override
        if self.config.span_properties {
            if let Some(scope) = ctx.event_scope(event) {
                for span in scope.from_root() {
                    if let Some(map) = span.extensions().get::<PropertyMap>() {
                        properties
                            .extend(map.0.iter().map(|(k, v)| (k.clone(), v.clone())));
                    }
                }
            }
        }
        properties.extend(visitor.properties);

        let entry = CapturedEntry {
            target: metadata.target().to_string(),
            level: *metadata.level(),
            message: visitor.message.unwrap_or_default(),
            marker: visitor.marker,
            properties,
        };

        match self.config.echo {
            Echo::Off => {}
            Echo::Stderr => eprintln!("{entry}"),
            Echo::Stdout => println!("{entry}"),
        }

        self.store.push(entry);
    }
}

/// Visitor for event fields: lifts `message` and `marker` out of the property
/// map.
#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    marker: Option<String>,
    properties: Properties,
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = Some(value.to_string()),
            "marker" => self.marker = Some(value.to_string()),
            // `log.*` fields are normalized metadata from the log bridge,
            // not user properties
            name if name.starts_with("log.") => {}
            name => {
                self.properties.insert(name.to_string(), value.to_string());
            }
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = Some(format!("{value:?}")),
            "marker" => self.marker = Some(format!("{value:?}")),
            name if name.starts_with("log.") => {}
            name => {
                self.properties.insert(name.to_string(), format!("{value:?}"));
            }
        }
    }
}

/// Visitor for span fields: everything is a property.
#[derive(Default)]
struct SpanVisitor {
    properties: Properties,
}

impl Visit for SpanVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.properties
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.properties
            .insert(field.name().to_string(), format!("{value:?}"));
    }
}
