//! `tracing` layer that renders events as [`LogEntry`] lines.

use std::fmt;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry};

use crate::logging::{LogConfig, LogEntry, LogFormat, LogLevel, ObservabilityError};

/// Destination for rendered log lines.
pub type LogSink = fn(&str);


/// Layer that converts every event into a [`LogEntry`] and hands the rendered
/// line to a sink.
#[derive(Debug, Clone, Copy)]
pub struct SinkLayer {
    format: LogFormat,
    sink: LogSink,
}

impl SinkLayer {
    /// Create a layer writing `format` lines to `sink`.
    pub fn new(format: LogFormat, sink: LogSink) -> Self {
        Self { format, sink }
    }
}

impl<S: Subscriber> Layer<S> for SinkLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut entry = LogEntry::new(LogLevel::from(metadata.level()), metadata.target(), "");
        event.record(&mut EntryVisitor(&mut entry));
        (self.sink)(&entry.render(self.format));
    }
}

struct EntryVisitor<'a>(&'a mut LogEntry);

impl EntryVisitor<'_> {
    fn insert(&mut self, field: &Field, value: serde_json::Value) {
        self.0.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for EntryVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.0.message = value.to_string();
        } else {
            self.insert(field, value.into());
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value.into());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0.message = format!("{:?}", value);
        } else {
            self.insert(field, format!("{:?}", value).into());
        }
    }
}

/// Build a subscriber that writes to `sink` at `config.level` and above.
pub fn subscriber(config: LogConfig, sink: LogSink) -> impl Subscriber + Send + Sync {
    Registry::default().with(SinkLayer::new(config.format, sink).with_filter(config.level.as_filter()))
}

/// Install the subscriber globally.
///
/// Fails if another global subscriber is already set.
pub fn init(config: LogConfig, sink: LogSink) -> Result<(), ObservabilityError> {
    subscriber(config, sink)
        .try_init()
        .map_err(|e| ObservabilityError::AlreadyInitialized(e.to_string()))?;

    tracing::debug!(level = %config.level, format = ?config.format, "logging initialized");
    Ok(())
}
