//! Metrics for upstream calls and graph assembly.
//!
//! Three families are recorded:
//! - `foundry_api_*`: one observation per upstream HTTP call, labelled by the
//!   low-cardinality `endpoint` template, `method` and `status`
//! - `foundry_graph_degraded_fetches_total`: sub-fetches whose failure was
//!   absorbed into an empty contribution, labelled by `operation`
//! - `foundry_graph_agents_parsed_total`: agent nodes produced
//!
//! Exposition lives in [`crate::metrics_exporter`]. Without an installed
//! recorder every call here is a no-op.

use std::time::Duration;

use crate::error::ClientError;

pub const METRIC_REQUEST_DURATION: &str = "foundry_api_request_duration_seconds";
pub const METRIC_REQUESTS_TOTAL: &str = "foundry_api_requests_total";
pub const METRIC_ERRORS_TOTAL: &str = "foundry_api_errors_total";
pub const METRIC_DEGRADED_TOTAL: &str = "foundry_graph_degraded_fetches_total";
pub const METRIC_AGENTS_PARSED: &str = "foundry_graph_agents_parsed_total";

/// `status` label for calls that never got a response.
const NO_RESPONSE_STATUS: &str = "none";

/// Coarse failure class used as the `error_category` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Connection refused, DNS, TLS
    Transport,
    Http4xx,
    Http5xx,
    /// Body was not the JSON we expected
    Decode,
    Timeout,
    /// No token could be obtained for the audience
    Credential,
    Unknown,
}

impl ErrorCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Decode => "decode",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Credential => "credential",
            ErrorCategory::Unknown => "unknown",
        }
    }

    fn from_status(status: u16) -> Self {
        match status {
            400..=499 => ErrorCategory::Http4xx,
            500..=599 => ErrorCategory::Http5xx,
            _ => ErrorCategory::Unknown,
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Timeout(_) => ErrorCategory::Timeout,
            ClientError::CredentialUnavailable(_) | ClientError::AuthFailed(_) => {
                ErrorCategory::Credential
            }
            ClientError::InvalidResponse(_) => ErrorCategory::Decode,
            ClientError::ApiError { status, .. } => ErrorCategory::from_status(*status),
            ClientError::HttpError(e) if e.is_timeout() => ErrorCategory::Timeout,
            ClientError::HttpError(e) if e.is_connect() || e.is_request() => {
                ErrorCategory::Transport
            }
            ClientError::HttpError(e) if e.is_decode() => ErrorCategory::Decode,
            _ => ErrorCategory::Unknown,
        }
    }
}

/// How one upstream call ended.
#[derive(Debug, Clone, Copy)]
pub enum CallOutcome<'a> {
    /// A response arrived, successful or not.
    Responded(u16),
    /// The call failed before any response.
    Failed(&'a ClientError),
}

/// Handle for recording metrics with consistent names and labels.
///
/// Cloning is cheap; a disabled collector records nothing.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record one upstream call: its latency, the attempt, and a categorized
    /// error when it did not succeed.
    pub fn record_call(
        &self,
        endpoint: &str,
        method: &str,
        elapsed: Duration,
        outcome: CallOutcome<'_>,
    ) {
        if !self.enabled {
            return;
        }

        let (status, failure) = match outcome {
            CallOutcome::Responded(code) if (200..300).contains(&code) => (code.to_string(), None),
            CallOutcome::Responded(code) => {
                (code.to_string(), Some(ErrorCategory::from_status(code)))
            }
            CallOutcome::Failed(err) => {
                (NO_RESPONSE_STATUS.to_string(), Some(ErrorCategory::from(err)))
            }
        };

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status.clone(),
        )
        .increment(1);

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status,
        )
        .record(elapsed.as_secs_f64());

        if let Some(category) = failure {
            metrics::counter!(METRIC_ERRORS_TOTAL,
                "endpoint" => endpoint.to_string(),
                "method" => method.to_string(),
                "error_category" => category.as_str(),
            )
            .increment(1);
        }
    }

    /// Record a sub-fetch that fell back to its empty default.
    pub fn record_degraded(&self, operation: &str) {
        if self.enabled {
            metrics::counter!(METRIC_DEGRADED_TOTAL, "operation" => operation.to_string())
                .increment(1);
        }
    }

    pub fn record_agents_parsed(&self, count: usize) {
        if self.enabled {
            metrics::counter!(METRIC_AGENTS_PARSED).increment(count as u64);
        }
    }
}
