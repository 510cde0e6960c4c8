// File: crates/pulse-core/src/render.rs
// Summary: Draw primitives and the line/bar strategies that emit them.

use crate::config::{ChartConfig, ChartType};
use crate::palette::{color_for, Color};
use crate::scale::Scales;
use crate::series::AlignedRow;

/// Reference attached to every primitive so interaction callbacks can
/// resolve back to the data that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverTarget {
    pub row_index: usize,
    pub metric: String,
}

/// Polyline segments for one metric. Segments break wherever the metric
/// has no sample; a break is never bridged or interpolated.
/// `target.row_index` is the first row the path draws.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPrimitive {
    pub segments: Vec<Vec<(f64, f64)>>,
    pub stroke_width: f32,
    pub color: Color,
    pub target: HoverTarget,
}

/// One sample marker.
#[derive(Clone, Debug, PartialEq)]
pub struct PointPrimitive {
    pub x: f64,
    pub y: f64,
    pub radius: f32,
    pub color: Color,
    pub target: HoverTarget,
}

/// One bar within a row's band.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
    pub target: HoverTarget,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    Path(PathPrimitive),
    Point(PointPrimitive),
    Rect(RectPrimitive),
}

impl DrawPrimitive {
    /// The (row, metric) reference carried for interaction callbacks.
    pub fn target(&self) -> &HoverTarget {
        match self {
            DrawPrimitive::Path(p) => &p.target,
            DrawPrimitive::Point(p) => &p.target,
            DrawPrimitive::Rect(r) => &r.target,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            DrawPrimitive::Path(p) => p.color,
            DrawPrimitive::Point(p) => p.color,
            DrawPrimitive::Rect(r) => r.color,
        }
    }
}

/// A chart strategy turns aligned rows and scales into primitives.
pub trait RenderStrategy {
    fn render(
        &self,
        rows: &[AlignedRow],
        metrics: &[String],
        scales: &Scales,
        config: &ChartConfig,
    ) -> Vec<DrawPrimitive>;
}

/// Render `rows` with the strategy selected by `config.chart_type`.
/// Zero rows is not an error; the result is simply an empty primitive set.
pub fn render(rows: &[AlignedRow], scales: &Scales, config: &ChartConfig) -> Vec<DrawPrimitive> {
    if rows.is_empty() {
        tracing::warn!("no aligned rows; rendering an empty chart");
    }
    let strategy: &dyn RenderStrategy = match config.chart_type {
        ChartType::Line => &LineStrategy,
        ChartType::Bar => &BarStrategy,
    };
    let primitives = strategy.render(rows, &config.metric_order, scales, config);
    tracing::debug!(
        rows = rows.len(),
        primitives = primitives.len(),
        chart_type = ?config.chart_type,
        "rendered primitives"
    );
    primitives
}

/// Connected paths plus per-sample markers, one set per declared metric.
pub struct LineStrategy;

impl RenderStrategy for LineStrategy {
    fn render(
        &self,
        rows: &[AlignedRow],
        metrics: &[String],
        scales: &Scales,
        config: &ChartConfig,
    ) -> Vec<DrawPrimitive> {
        let mut out = Vec::new();
        for (metric_index, metric) in metrics.iter().enumerate() {
            let color = color_for(metric_index);

            let mut segments: Vec<Vec<(f64, f64)>> = Vec::new();
            let mut current: Vec<(f64, f64)> = Vec::new();
            let mut points: Vec<PointPrimitive> = Vec::new();
            let mut first_row: Option<usize> = None;

            for (row_index, row) in rows.iter().enumerate() {
                match row.value(metric) {
                    Some(value) => {
                        let x = scales.position.position(row.timestamp);
                        let y = scales.value.to_px(value);
                        current.push((x, y));
                        first_row.get_or_insert(row_index);
                        points.push(PointPrimitive {
                            x,
                            y,
                            radius: config.point_radius,
                            color,
                            target: HoverTarget { row_index, metric: metric.clone() },
                        });
                    }
                    // Absent sample: the path breaks here, nothing is drawn.
                    None => {
                        if !current.is_empty() {
                            segments.push(std::mem::take(&mut current));
                        }
                    }
                }
            }
            if !current.is_empty() {
                segments.push(current);
            }

            // A metric with no sample in any row contributes nothing.
            let Some(first_row) = first_row else { continue };

            out.push(DrawPrimitive::Path(PathPrimitive {
                segments,
                stroke_width: config.stroke_width,
                color,
                target: HoverTarget { row_index: first_row, metric: metric.clone() },
            }));
            out.extend(points.into_iter().map(DrawPrimitive::Point));
        }
        out
    }
}

/// Grouped bars: each row's band is split into one slot per declared
/// metric, so a metric keeps its slot even in rows where neighbors are
/// missing.
pub struct BarStrategy;

impl RenderStrategy for BarStrategy {
    fn render(
        &self,
        rows: &[AlignedRow],
        metrics: &[String],
        scales: &Scales,
        _config: &ChartConfig,
    ) -> Vec<DrawPrimitive> {
        let slots = metrics.len();
        let mut out = Vec::new();
        if slots == 0 {
            return out;
        }
        for (metric_index, metric) in metrics.iter().enumerate() {
            let color = color_for(metric_index);
            for (row_index, row) in rows.iter().enumerate() {
                let Some(value) = row.value(metric) else { continue };
                let (band_x, bandwidth) = scales.position.band(row_index);
                let slot_width = bandwidth / slots as f64;
                let y = scales.value.to_px(value);
                out.push(DrawPrimitive::Rect(RectPrimitive {
                    x: band_x + slot_width * metric_index as f64,
                    y,
                    width: slot_width,
                    height: scales.value.height - y,
                    color,
                    target: HoverTarget { row_index, metric: metric.clone() },
                }));
            }
        }
        out
    }
}
