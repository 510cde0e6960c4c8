// File: crates/pulse-history/src/request.rs
// Summary: History request parameters, validation, and URL construction.

use serde::{Deserialize, Serialize};

use crate::error::HistoryError;

/// Parameters of one history query, validated before a request is built.
/// `from`/`to` are epoch millis; `downsample` is the aggregation
/// granularity the API understands and is passed through opaquely.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryRequest {
    pub object_id: String,
    pub from: i64,
    pub to: i64,
    pub downsample: String,
    pub metrics: Vec<String>,
    pub auth_token: String,
}

impl HistoryRequest {
    /// Reject requests with an empty required field before anything is
    /// sent.
    pub fn validate(&self) -> Result<(), HistoryError> {
        if self.object_id.is_empty() {
            return Err(HistoryError::MissingField("object_id"));
        }
        if self.downsample.is_empty() {
            return Err(HistoryError::MissingField("downsample"));
        }
        if self.metrics.is_empty() || self.metrics.iter().any(|m| m.is_empty()) {
            return Err(HistoryError::MissingField("metrics"));
        }
        if self.auth_token.is_empty() {
            return Err(HistoryError::MissingField("auth_token"));
        }
        Ok(())
    }

    /// Full request URL under `base`. Metric names repeat as `metrics[]`
    /// query parameters with percent-encoded values, matching what the
    /// history endpoint expects.
    pub fn url(&self, base: &str) -> String {
        let metric_params = self
            .metrics
            .iter()
            .map(|m| format!("metrics%5B%5D={}", urlencoding::encode(m)))
            .collect::<Vec<_>>()
            .join("&");
        format!(
            "{}/objects/{}/history?from={}&to={}&downsample={}&{}&auth-token={}",
            base, self.object_id, self.from, self.to, self.downsample, metric_params,
            self.auth_token
        )
    }
}

/// Relative time-range presets offered alongside a custom window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    LastHour,
    LastDay,
    LastWeek,
    LastMonth,
    Custom,
}

impl TimeRange {
    /// The (from, to) window ending at `now` (epoch millis). Custom leaves
    /// the caller's window untouched.
    pub fn window(self, now: i64) -> Option<(i64, i64)> {
        const HOUR: i64 = 60 * 60 * 1000;
        let span = match self {
            TimeRange::LastHour => HOUR,
            TimeRange::LastDay => 24 * HOUR,
            TimeRange::LastWeek => 7 * 24 * HOUR,
            TimeRange::LastMonth => 30 * 24 * HOUR,
            TimeRange::Custom => return None,
        };
        Some((now - span, now))
    }
}
