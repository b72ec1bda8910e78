//! Outcome of a fault-isolated upstream sub-fetch.
//!
//! A sub-fetch never aborts its caller. It either produced data, or it
//! degraded to the empty default and carries the cause so the caller can
//! log it while still continuing with the degraded value.

use tracing::warn;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

#[derive(Debug)]
pub enum Fetched<T> {
    /// The upstream call succeeded.
    Ok(T),
    /// The upstream call failed; the value is the empty default.
    Degraded(T, ClientError),
}

impl<T: Default> Fetched<T> {
    /// Wrap a fallible call, substituting `T::default()` on failure.
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(value) => Fetched::Ok(value),
            Err(cause) => Fetched::Degraded(T::default(), cause),
        }
    }
}

impl<T> Fetched<T> {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Fetched::Degraded(..))
    }

    /// The failure that caused degradation, if any.
    pub fn cause(&self) -> Option<&ClientError> {
        match self {
            Fetched::Ok(_) => None,
            Fetched::Degraded(_, cause) => Some(cause),
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Fetched::Ok(value) | Fetched::Degraded(value, _) => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Fetched::Ok(value) | Fetched::Degraded(value, _) => value,
        }
    }

    /// Log the cause (if degraded) under `operation` and return the value.
    pub fn into_logged_value(self, operation: &str, metrics: Option<&MetricsCollector>) -> T {
        if let Fetched::Degraded(_, ref cause) = self {
            warn!(operation, error = %cause, "Upstream fetch degraded to empty result");
            if let Some(m) = metrics {
                m.record_degraded(operation);
            }
        }
        self.into_value()
    }
}
