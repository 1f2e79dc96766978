//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → FileSpanExporter → RotatingWriter
//! ```
//!
//! Spans land in `~/.local/share/zellij/catalog-browser/catalog-browser-otlp.json`
//! as one OTLP JSON document per line. The file rotates at 10 MB and keeps
//! three backups.
//!
//! The level comes from the `trace_level` plugin option (default `"info"`)
//! and accepts any `EnvFilter` directive.
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `exporter`: Span exporter and OTLP JSON formatting
//! - `rotating`: Size-rotated line writer

mod exporter;
mod init;
mod rotating;

pub use init::init_tracing;
