//! Single-shot request execution.
//!
//! Every upstream call goes through [`send_request`]: it applies the
//! per-call timeout, propagates trace context, records metrics and maps
//! non-success responses to [`ClientError::ApiError`]. There is no retry;
//! the first failure is final for that call.

use std::time::{Duration, Instant};

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::{CallOutcome, MetricsCollector};
use crate::models::ArmErrorResponse;
use crate::tracing::inject_trace_context;

/// Upper bound on how much of a non-JSON error body is kept in the message.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Send a request once with the given timeout.
///
/// `endpoint` is a low-cardinality label for metrics and logs (no ids).
pub async fn send_request(
    builder: RequestBuilder,
    timeout: Duration,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    let builder = inject_trace_context(builder.timeout(timeout));

    let start = Instant::now();
    let result = builder.send().await;
    let elapsed = start.elapsed();

    let response = match result {
        Ok(response) => response,
        Err(e) => {
            let err = map_transport_error(e, timeout);
            if let Some(m) = metrics {
                m.record_call(endpoint, method, elapsed, CallOutcome::Failed(&err));
            }
            debug!(endpoint, error = %err, "Request failed before a response");
            return Err(err);
        }
    };

    let status = response.status().as_u16();
    if let Some(m) = metrics {
        m.record_call(endpoint, method, elapsed, CallOutcome::Responded(status));
    }
    debug!(endpoint, status, elapsed_ms = elapsed.as_millis() as u64, "Upstream responded");

    if response.status().is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = serde_json::from_str::<ArmErrorResponse>(&body)
        .ok()
        .and_then(|envelope| envelope.summary())
        .unwrap_or_else(|| body.chars().take(MAX_ERROR_BODY_CHARS).collect());

    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}

/// Read a successful response body as JSON.
pub async fn read_json<T: DeserializeOwned>(response: Response, timeout: Duration) -> Result<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| map_transport_error(e, timeout))?;

    serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

fn map_transport_error(err: reqwest::Error, timeout: Duration) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout(timeout)
    } else {
        ClientError::HttpError(err)
    }
}
