// File: crates/pulse-core/src/series.rs
// Summary: Raw per-metric series and timestamp-aligned row models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One metric's samples as delivered by the history API.
///
/// Datapoints are (epoch-millis, value) pairs. The input is not guaranteed
/// to be sorted or unique by timestamp; alignment tolerates both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub name: String,
    pub datapoints: Vec<(i64, f64)>,
}

impl MetricSeries {
    pub fn new(name: impl Into<String>, datapoints: Vec<(i64, f64)>) -> Self {
        Self { name: name.into(), datapoints }
    }
}

/// One timestamp with every metric value sampled exactly at that instant.
///
/// A metric with no sample at this timestamp has no key in `values`; a
/// metric that sampled 0.0 keeps its key. Key presence is what separates
/// "missing" from "zero".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlignedRow {
    pub timestamp: i64,
    pub values: HashMap<String, f64>,
}

impl AlignedRow {
    pub fn new(timestamp: i64) -> Self {
        Self { timestamp, values: HashMap::new() }
    }

    /// Value sampled for `metric` at this row's timestamp, if present.
    pub fn value(&self, metric: &str) -> Option<f64> {
        self.values.get(metric).copied()
    }

    /// Whether `metric` has a sample at this row's timestamp.
    pub fn present(&self, metric: &str) -> bool {
        self.values.contains_key(metric)
    }
}
