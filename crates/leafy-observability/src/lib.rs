//! Structured logging for the Leafy Lane storefront.
//!
//! This crate provides:
//! - `LogEntry` - one structured log record, rendered as JSON or text
//! - `SinkLayer` - a `tracing` layer turning events into `LogEntry` values
//! - `init` - installs the layer globally with a minimum level
//!
//! Output goes to a caller-supplied sink. The browser build writes to the
//! developer console; tests capture lines in memory.

mod layer;
mod logging;

pub use layer::*;
pub use logging::*;
