// File: crates/pulse-history/src/client.rs
// Summary: HTTP client that fetches raw metric series from the history API.

use pulse_core::MetricSeries;
use serde::Deserialize;
use serde_json::Value;

use crate::error::HistoryError;
use crate::request::HistoryRequest;

/// One payload entry: a metric name and its `[timestamp, value]` pairs.
#[derive(Debug, Deserialize)]
struct MetricPayload {
    metric: String,
    #[serde(default)]
    dps: Vec<(f64, f64)>,
}

/// Client for the metric history endpoint.
#[derive(Clone, Debug)]
pub struct HistoryClient {
    base_url: String,
    http: reqwest::Client,
}

impl HistoryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetch and decode the raw series for `request`.
    ///
    /// The request is validated first, so nothing goes on the wire with a
    /// missing field. A non-success status or unreadable body is an error;
    /// an empty or non-array payload is "no data" and decodes to an empty
    /// vec.
    pub async fn fetch(&self, request: &HistoryRequest) -> Result<Vec<MetricSeries>, HistoryError> {
        request.validate()?;
        let url = request.url(&self.base_url);
        tracing::debug!(object_id = %request.object_id, metrics = request.metrics.len(), "requesting metric history");

        let response = self.http.get(&url).header("Accept", "application/json").send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(HistoryError::Status { status, body });
        }

        let body = response.text().await?;
        let payload: Value = serde_json::from_str(&body)?;
        decode_payload(payload)
    }
}

/// Decode the success payload into raw series, normalizing timestamps to
/// epoch millis.
fn decode_payload(payload: Value) -> Result<Vec<MetricSeries>, HistoryError> {
    if !payload.is_array() {
        tracing::warn!("history payload is not an array; treating as no data");
        return Ok(Vec::new());
    }
    let entries: Vec<MetricPayload> = serde_json::from_value(payload)?;
    let series = entries
        .into_iter()
        .map(|entry| {
            let datapoints = entry
                .dps
                .into_iter()
                .map(|(ts, value)| (normalize_millis(ts), value))
                .collect();
            MetricSeries::new(entry.metric, datapoints)
        })
        .collect();
    Ok(series)
}

/// Timestamps below 10^12 are epoch seconds; larger values are already
/// millis.
fn normalize_millis(ts: f64) -> i64 {
    if ts >= 1.0e12 {
        ts as i64
    } else {
        (ts * 1000.0) as i64
    }
}
