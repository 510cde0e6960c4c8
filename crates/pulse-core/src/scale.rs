// File: crates/pulse-core/src/scale.rs
// Summary: Position (time/band) and value scale transforms built per render.

use crate::config::{ChartConfig, ChartType};
use crate::series::AlignedRow;

/// Horizontal mapping from the data domain onto `[0, plot_width]` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PositionScale {
    /// Continuous time scale over `[t0, t1]` epoch millis.
    Linear { t0: i64, t1: i64, width: f64 },
    /// Discrete row-index scale with evenly spaced bands.
    Band { len: usize, width: f64, padding: f64 },
}

impl PositionScale {
    /// Pixel X for a timestamp on a Linear scale. A degenerate domain
    /// (zero or one distinct timestamp) maps to the plot midpoint.
    /// On a Band scale this returns the midpoint as well; bar placement
    /// goes through [`PositionScale::band`] instead.
    pub fn position(&self, ts: i64) -> f64 {
        match *self {
            PositionScale::Linear { t0, t1, width } => {
                if t1 == t0 {
                    return width / 2.0;
                }
                (ts - t0) as f64 / (t1 - t0) as f64 * width
            }
            PositionScale::Band { width, .. } => width / 2.0,
        }
    }

    /// Band origin and bandwidth for a row index on a Band scale.
    /// The band is `width / len` wide with `padding` of it split evenly
    /// onto both edges.
    pub fn band(&self, index: usize) -> (f64, f64) {
        match *self {
            PositionScale::Band { len, width, padding } => {
                if len == 0 {
                    return (width / 2.0, 0.0);
                }
                let step = width / len as f64;
                let bandwidth = step * (1.0 - padding);
                (index as f64 * step + step * padding / 2.0, bandwidth)
            }
            PositionScale::Linear { width, .. } => (width / 2.0, 0.0),
        }
    }

    /// Center pixel of a row's band (tick placement).
    pub fn band_center(&self, index: usize) -> f64 {
        let (x0, bandwidth) = self.band(index);
        x0 + bandwidth / 2.0
    }
}

/// Vertical mapping from `[0, max]` onto `[plot_height, 0]` pixels
/// (inverted: pixel-down is value-down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub max: f64,
    pub height: f64,
}

impl ValueScale {
    /// Pixel Y for a value; 0 maps to the plot bottom, `max` to the top.
    pub fn to_px(&self, value: f64) -> f64 {
        self.height - value / self.max * self.height
    }
}

/// Both coordinate mappings for one render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    pub position: PositionScale,
    pub value: ValueScale,
}

impl Scales {
    /// Build the scales for `rows` under `config`.
    ///
    /// The value-axis maximum treats a metric with no sample at a row as 0.
    /// That only widens the axis; the strategies still skip absent samples,
    /// so a missing value is never drawn at zero. When no row offers a
    /// positive value the maximum falls back to `config.value_fallback_max`
    /// to keep the scale well-defined.
    pub fn build(rows: &[AlignedRow], metrics: &[String], config: &ChartConfig) -> Scales {
        let width = config.plot_width();
        let height = config.plot_height();

        let position = match config.chart_type {
            ChartType::Line => {
                let t0 = rows.first().map_or(0, |r| r.timestamp);
                let t1 = rows.last().map_or(t0, |r| r.timestamp);
                PositionScale::Linear { t0, t1, width }
            }
            ChartType::Bar => PositionScale::Band {
                len: rows.len(),
                width,
                padding: config.band_padding,
            },
        };

        let mut max = 0.0f64;
        for row in rows {
            for metric in metrics {
                max = max.max(row.value(metric).unwrap_or(0.0));
            }
        }
        if max <= 0.0 {
            max = config.value_fallback_max;
        }

        Scales { position, value: ValueScale { max, height } }
    }
}
