//! Subscriber setup: `fmt` logging filtered by `RUST_LOG`, plus an optional
//! OpenTelemetry layer exporting spans to stdout.
//!
//! ```no_run
//! chatline_observe::tracing_setup::init_tracing(false).unwrap();
//! ```

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use std::sync::OnceLock;

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "chatline_core=info";

/// Instrumentation scope name reported on exported spans.
pub const TRACER_NAME: &str = "chatline";

/// Provider kept for [`shutdown_tracing`]. Only set after a successful init.
static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

/// `RUST_LOG` when set and valid, else [`DEFAULT_FILTER`].
pub fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// With `enable_otel`, spans are also bridged to an OpenTelemetry stdout
/// exporter. The provider is registered globally only once the subscriber
/// has been installed.
///
/// # Errors
///
/// Fails if a global subscriber is already set; nothing is registered then.
pub fn init_tracing(enable_otel: bool) -> Result<(), Box<dyn std::error::Error>> {
    let provider = enable_otel.then(|| {
        SdkTracerProvider::builder()
            .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
            .build()
    });
    let otel_layer = provider
        .as_ref()
        .map(|p| tracing_opentelemetry::layer().with_tracer(p.tracer(TRACER_NAME)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(build_env_filter())
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()?;

    if let Some(provider) = provider {
        let _ = TRACER_PROVIDER.set(provider.clone());
        opentelemetry::global::set_tracer_provider(provider);
    }
    Ok(())
}

/// True when an OpenTelemetry provider was registered by [`init_tracing`].
pub fn otel_enabled() -> bool {
    TRACER_PROVIDER.get().is_some()
}

/// Flush pending spans and shut the provider down. No-op without OTel.
pub fn shutdown_tracing() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            eprintln!("Warning: OTel tracer provider shutdown error: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        let filter = EnvFilter::new(DEFAULT_FILTER);
        assert!(filter.to_string().contains("chatline_core"));
    }

    #[test]
    fn shutdown_without_init_is_noop() {
        assert!(!otel_enabled());
        shutdown_tracing();
    }
}
