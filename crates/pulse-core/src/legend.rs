// File: crates/pulse-core/src/legend.rs
// Summary: Color-keyed legend entries derived from the declared metric order.

use serde::{Deserialize, Serialize};

use crate::palette::{color_for, Color};

/// One legend row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub metric: String,
    pub color: Color,
}

/// Legend entries for every declared metric, in declared order. A metric
/// with no data still gets its entry; the legend reflects the declaration,
/// not the coverage.
pub fn build_legend(metric_order: &[String]) -> Vec<LegendEntry> {
    metric_order
        .iter()
        .enumerate()
        .map(|(index, metric)| LegendEntry { metric: metric.clone(), color: color_for(index) })
        .collect()
}
