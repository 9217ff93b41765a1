//! Observability setup for Chatline: structured logging through
//! `tracing-subscriber`, with optional OpenTelemetry span export.

pub mod tracing_setup;
