//! Prometheus exposition of the graph and upstream-call metrics.
//!
//! [`MetricsExporter::install`] makes a Prometheus recorder the global
//! `metrics` recorder and serves it as text at `http://<bind>/metrics`.

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder};
use tracing::info;

use crate::metrics::METRIC_REQUEST_DURATION;

/// Upstream calls run between tens of milliseconds and the listing timeout.
const REQUEST_DURATION_BUCKETS: &[f64] = &[
    0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0,
];

/// Running exporter. The listener lives for the rest of the process.
#[derive(Debug)]
pub struct MetricsExporter {
    bind_addr: SocketAddr,
}

impl MetricsExporter {
    /// Parse `bind_addr`, install the recorder and start the listener.
    ///
    /// Fails on an unparsable address or when a recorder is already installed.
    pub fn install(bind_addr: &str) -> Result<Self, MetricsExporterError> {
        let addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|source| MetricsExporterError::InvalidBindAddress {
                addr: bind_addr.to_string(),
                source,
            })?;

        let builder = PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full(METRIC_REQUEST_DURATION.to_string()),
                REQUEST_DURATION_BUCKETS,
            )
            .map_err(MetricsExporterError::Build)?;

        builder
            .with_http_listener(addr)
            .install_recorder()
            .map_err(|_| MetricsExporterError::RecorderAlreadyInstalled)?;

        info!(%addr, "Serving Prometheus metrics");
        Ok(Self { bind_addr: addr })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MetricsExporterError {
    #[error("Invalid metrics bind address '{addr}': {source}")]
    InvalidBindAddress {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("A metrics recorder is already installed")]
    RecorderAlreadyInstalled,

    #[error("Failed to build Prometheus recorder: {0}")]
    Build(BuildError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_host_without_port() {
        let err = MetricsExporter::install("metrics-host").unwrap_err();
        assert!(matches!(
            err,
            MetricsExporterError::InvalidBindAddress { ref addr, .. } if addr == "metrics-host"
        ));
        assert!(err.to_string().contains("metrics-host"));
    }

    #[test]
    fn test_buckets_ascend_to_listing_timeout() {
        assert!(REQUEST_DURATION_BUCKETS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(REQUEST_DURATION_BUCKETS.last(), Some(&30.0));
    }
}
