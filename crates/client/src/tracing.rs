//! Log and trace pipeline.
//!
//! [`TracingConfig::init`] installs the global `tracing` subscriber:
//! - an `EnvFilter` from `RUST_LOG` (default `warn`)
//! - a fmt layer on stderr, plain or JSON lines
//! - an OpenTelemetry layer exporting over OTLP/gRPC, only when an endpoint is set
//!
//! Stdout is left to the query output. [`inject_trace_context`] carries the
//! active span onto outgoing upstream requests as a W3C `traceparent`.

use std::time::Duration;

use opentelemetry::KeyValue;
use opentelemetry::propagation::TextMapPropagator;
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{Protocol, WithExportConfig};
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::trace::{BatchSpanProcessor, Sampler, SdkTracerProvider};
use tracing_opentelemetry::OpenTelemetrySpanExt;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const TRACER_NAME: &str = "foundry-graph";
const DEFAULT_FILTER: &str = "warn";
const OTLP_EXPORT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// OTLP gRPC collector, e.g. `http://localhost:4317`
    pub otlp_endpoint: Option<String>,
    pub service_name: String,
    /// Emit JSON lines instead of human-readable logs
    pub json: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            otlp_endpoint: None,
            service_name: TRACER_NAME.to_string(),
            json: false,
        }
    }
}

impl TracingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_otlp_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.otlp_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Install the global subscriber. Hold the guard until exit and call
    /// [`TracingGuard::shutdown`] so batched spans reach the collector.
    pub fn init(&self) -> Result<TracingGuard, TracingError> {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let provider = self
            .otlp_endpoint
            .as_deref()
            .map(|endpoint| self.tracer_provider(endpoint))
            .transpose()?;

        let otel_layer = provider
            .as_ref()
            .map(|p| tracing_opentelemetry::layer().with_tracer(p.tracer(TRACER_NAME)));

        let log_layer = if self.json {
            fmt::layer().json().with_writer(std::io::stderr).boxed()
        } else {
            fmt::layer().with_writer(std::io::stderr).boxed()
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(otel_layer)
            .with(log_layer)
            .try_init()
            .map_err(|e| TracingError::Subscriber(e.to_string()))?;

        Ok(TracingGuard { provider })
    }

    fn tracer_provider(&self, endpoint: &str) -> Result<SdkTracerProvider, TracingError> {
        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .with_protocol(Protocol::Grpc)
            .with_timeout(OTLP_EXPORT_TIMEOUT)
            .build()
            .map_err(|e| TracingError::Exporter(e.to_string()))?;

        let resource = opentelemetry_sdk::Resource::builder()
            .with_attributes([
                KeyValue::new("service.name", self.service_name.clone()),
                KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
            ])
            .build();

        Ok(SdkTracerProvider::builder()
            .with_span_processor(BatchSpanProcessor::builder(exporter).build())
            .with_resource(resource)
            .with_sampler(Sampler::ParentBased(Box::new(Sampler::AlwaysOn)))
            .build())
    }
}

/// Keeps the tracer provider alive until shutdown.
#[derive(Debug)]
pub struct TracingGuard {
    provider: Option<SdkTracerProvider>,
}

impl TracingGuard {
    pub fn shutdown(&self) {
        if let Some(provider) = &self.provider
            && let Err(e) = provider.shutdown()
        {
            eprintln!("Failed to flush traces: {e}");
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Failed to build OTLP exporter: {0}")]
    Exporter(String),

    #[error("Failed to install tracing subscriber: {0}")]
    Subscriber(String),
}

/// Add the current span's `traceparent` header, if any.
pub fn inject_trace_context(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    let context = tracing::Span::current().context();
    let mut carrier = std::collections::HashMap::new();
    TraceContextPropagator::new().inject_context(&context, &mut carrier);

    carrier
        .into_iter()
        .fold(builder, |builder, (name, value)| builder.header(name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let config = TracingConfig::new()
            .with_otlp_endpoint("http://localhost:4317")
            .with_service_name("foundry-cli")
            .with_json(true);

        assert_eq!(config.otlp_endpoint.as_deref(), Some("http://localhost:4317"));
        assert_eq!(config.service_name, "foundry-cli");
        assert!(config.json);
    }

    #[test]
    fn test_no_active_span_adds_no_traceparent() {
        let request = inject_trace_context(reqwest::Client::new().get("http://localhost/"))
            .build()
            .unwrap();
        assert!(request.headers().get("traceparent").is_none());
    }
}
