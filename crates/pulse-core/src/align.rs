// File: crates/pulse-core/src/align.rs
// Summary: Merge independently sampled metric series into dense timestamp-ordered rows.

use std::collections::{BTreeSet, HashMap};

use crate::series::{AlignedRow, MetricSeries};

/// Merge raw series into one row per distinct timestamp, ascending.
///
/// Each row carries the exact-match samples of every series at that
/// timestamp; there is no interpolation and no nearest-neighbor lookup.
/// Duplicate timestamps within a single series resolve last-write-wins,
/// since the input is not guaranteed pre-sorted or deduplicated. An empty
/// input (or one with no datapoints anywhere) yields no rows.
pub fn align(series: &[MetricSeries]) -> Vec<AlignedRow> {
    // Per-series exact-match index, built once; insertion order makes the
    // later duplicate win. The sorted set gives the timestamp union.
    let mut indexed: Vec<(&str, HashMap<i64, f64>)> = Vec::with_capacity(series.len());
    let mut timestamps: BTreeSet<i64> = BTreeSet::new();
    for s in series {
        let mut by_ts = HashMap::with_capacity(s.datapoints.len());
        for &(ts, value) in &s.datapoints {
            by_ts.insert(ts, value);
            timestamps.insert(ts);
        }
        indexed.push((s.name.as_str(), by_ts));
    }

    let mut rows = Vec::with_capacity(timestamps.len());
    for ts in timestamps {
        let mut row = AlignedRow::new(ts);
        for (name, by_ts) in &indexed {
            if let Some(&value) = by_ts.get(&ts) {
                row.values.insert((*name).to_string(), value);
            }
        }
        rows.push(row);
    }

    tracing::debug!(series = series.len(), rows = rows.len(), "aligned metric series");
    rows
}
