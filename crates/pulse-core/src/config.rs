// File: crates/pulse-core/src/config.rs
// Summary: Chart configuration: strategy selection, geometry, and declared metric order.

use serde::{Deserialize, Serialize};

use crate::types::{Insets, HEIGHT, WIDTH};

/// Chart strategy selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
}

/// Immutable per-render configuration.
///
/// `metric_order` is the declared metric list: it fixes color assignment,
/// draw order, and bar slots, independent of which metrics actually appear
/// in the aligned data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChartConfig {
    pub chart_type: ChartType,
    pub margins: Insets,
    pub width: u32,
    pub height: u32,
    pub stroke_width: f32,
    pub point_radius: f32,
    /// Fraction of each bar band left as inter-band padding.
    pub band_padding: f64,
    /// Value-axis maximum used when the data offers no positive value.
    pub value_fallback_max: f64,
    pub metric_order: Vec<String>,
}

impl ChartConfig {
    pub fn new(chart_type: ChartType, metric_order: Vec<String>) -> Self {
        Self { chart_type, metric_order, ..Self::default() }
    }

    /// Plot width inside the margins.
    pub fn plot_width(&self) -> f64 {
        f64::from(self.width.saturating_sub(self.margins.hsum()))
    }

    /// Plot height inside the margins.
    pub fn plot_height(&self) -> f64 {
        f64::from(self.height.saturating_sub(self.margins.vsum()))
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            chart_type: ChartType::Line,
            margins: Insets::default(),
            width: WIDTH,
            height: HEIGHT,
            stroke_width: 2.0,
            point_radius: 6.0,
            band_padding: 0.1,
            value_fallback_max: 1.0,
            metric_order: Vec::new(),
        }
    }
}
