// File: crates/pulse-render-svg/src/lib.rs
// Summary: SVG presentation backend: axes, gridlines, primitives, and legend markup.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use chrono::{Local, TimeZone};
use pulse_core::grid::{time_ticks, value_ticks};
use pulse_core::{
    build_legend, format_tooltip, render, AlignedRow, ChartConfig, Color, DrawPrimitive,
    PositionScale, Scales,
};

/// Surface styling for the emitted document.
#[derive(Clone, Copy, Debug)]
pub struct SvgOptions {
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub label: Color,
    pub tick_count: usize,
    pub font_size: u32,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            background: Color::rgb(18, 18, 20),
            grid: Color::rgb(40, 40, 45),
            axis_line: Color::rgb(180, 180, 190),
            label: Color::rgb(210, 210, 220),
            tick_count: 6,
            font_size: 12,
        }
    }
}

/// Render `rows` as a complete SVG document: background, grid, axes, the
/// strategy-selected marks, and the legend. Each mark carries `data-row`/
/// `data-metric` attributes and an embedded tooltip `<title>` so a host
/// page can wire hover behavior without re-deriving the data.
pub fn render_svg(rows: &[AlignedRow], config: &ChartConfig, opts: &SvgOptions) -> String {
    let scales = Scales::build(rows, &config.metric_order, config);
    let primitives = render(rows, &scales, config);
    let legend = build_legend(&config.metric_order);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = config.width,
        h = config.height
    );
    let _ = writeln!(
        svg,
        r#"<rect width="{}" height="{}" fill="{}"/>"#,
        config.width,
        config.height,
        opts.background.to_css()
    );
    let _ = writeln!(
        svg,
        r#"<g transform="translate({},{})">"#,
        config.margins.left, config.margins.top
    );

    write_grid_and_axes(&mut svg, rows, &scales, config, opts);
    write_primitives(&mut svg, rows, &primitives);
    let _ = writeln!(svg, "</g>");

    write_legend(&mut svg, &legend, config, opts);
    let _ = writeln!(svg, "</svg>");
    svg
}

/// Render and write the document to `path`, creating parent directories.
pub fn write_svg(
    rows: &[AlignedRow],
    config: &ChartConfig,
    opts: &SvgOptions,
    path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, render_svg(rows, config, opts))
        .with_context(|| format!("writing {}", path.display()))
}

fn write_grid_and_axes(
    svg: &mut String,
    rows: &[AlignedRow],
    scales: &Scales,
    config: &ChartConfig,
    opts: &SvgOptions,
) {
    let plot_w = config.plot_width();
    let plot_h = config.plot_height();
    let grid = opts.grid.to_css();
    let axis = opts.axis_line.to_css();
    let label = opts.label.to_css();

    // Horizontal gridlines + value labels along the left edge.
    for v in value_ticks(scales.value.max, opts.tick_count) {
        let y = scales.value.to_px(v);
        let _ = writeln!(
            svg,
            r#"<line x1="0" y1="{y:.1}" x2="{plot_w:.1}" y2="{y:.1}" stroke="{grid}" stroke-width="1"/>"#
        );
        let _ = writeln!(
            svg,
            r#"<text x="-8" y="{:.1}" text-anchor="end" fill="{label}" font-size="{}">{:.1}</text>"#,
            y + 4.0,
            opts.font_size,
            v
        );
    }

    // Vertical gridlines + position labels along the bottom edge.
    match scales.position {
        PositionScale::Linear { t0, t1, .. } => {
            for ts in time_ticks(t0, t1, opts.tick_count) {
                let x = scales.position.position(ts);
                let _ = writeln!(
                    svg,
                    r#"<line x1="{x:.1}" y1="0" x2="{x:.1}" y2="{plot_h:.1}" stroke="{grid}" stroke-width="1"/>"#
                );
                let _ = writeln!(
                    svg,
                    r#"<text x="{x:.1}" y="{:.1}" text-anchor="middle" fill="{label}" font-size="{}">{}</text>"#,
                    plot_h + 20.0,
                    opts.font_size,
                    time_label(ts)
                );
            }
        }
        PositionScale::Band { len, .. } => {
            for index in 0..len {
                let x = scales.position.band_center(index);
                let _ = writeln!(
                    svg,
                    r#"<text x="{x:.1}" y="{:.1}" text-anchor="middle" fill="{label}" font-size="{}">{}</text>"#,
                    plot_h + 20.0,
                    opts.font_size,
                    row_label(rows, index)
                );
            }
        }
    }

    // Axis lines last so they sit above the grid.
    let _ = writeln!(
        svg,
        r#"<line x1="0" y1="{plot_h:.1}" x2="{plot_w:.1}" y2="{plot_h:.1}" stroke="{axis}" stroke-width="1.5"/>"#
    );
    let _ = writeln!(
        svg,
        r#"<line x1="0" y1="0" x2="0" y2="{plot_h:.1}" stroke="{axis}" stroke-width="1.5"/>"#
    );
}

fn write_primitives(svg: &mut String, rows: &[AlignedRow], primitives: &[DrawPrimitive]) {
    for prim in primitives {
        match prim {
            DrawPrimitive::Path(path) => {
                let mut d = String::new();
                for segment in &path.segments {
                    for (i, (x, y)) in segment.iter().enumerate() {
                        let cmd = if i == 0 { 'M' } else { 'L' };
                        let _ = write!(d, "{cmd}{x:.1} {y:.1} ");
                    }
                }
                let _ = writeln!(
                    svg,
                    r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" data-metric="{}"/>"#,
                    d.trim_end(),
                    path.color.to_css(),
                    path.stroke_width,
                    escape(&path.target.metric)
                );
            }
            DrawPrimitive::Point(point) => {
                let _ = writeln!(
                    svg,
                    r##"<circle cx="{:.1}" cy="{:.1}" r="{}" fill="{}" stroke="#ffffff" stroke-width="2" data-row="{}" data-metric="{}">"##,
                    point.x,
                    point.y,
                    point.radius,
                    point.color.to_css(),
                    point.target.row_index,
                    escape(&point.target.metric)
                );
                write_title(svg, rows, point.target.row_index, &point.target.metric);
                let _ = writeln!(svg, "</circle>");
            }
            DrawPrimitive::Rect(rect) => {
                let _ = writeln!(
                    svg,
                    r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" data-row="{}" data-metric="{}">"#,
                    rect.x,
                    rect.y,
                    rect.width,
                    rect.height,
                    rect.color.to_css(),
                    rect.target.row_index,
                    escape(&rect.target.metric)
                );
                write_title(svg, rows, rect.target.row_index, &rect.target.metric);
                let _ = writeln!(svg, "</rect>");
            }
        }
    }
}

/// Native SVG hover text for one mark.
fn write_title(svg: &mut String, rows: &[AlignedRow], row_index: usize, metric: &str) {
    if let Some(row) = rows.get(row_index) {
        let _ = writeln!(svg, "<title>{}</title>", escape(&format_tooltip(row, metric)));
    }
}

fn write_legend(svg: &mut String, legend: &[pulse_core::LegendEntry], config: &ChartConfig, opts: &SvgOptions) {
    let _ = writeln!(svg, r#"<g transform="translate({},{})">"#, config.margins.left, 12);
    let mut x = 0.0f64;
    for entry in legend {
        let _ = writeln!(
            svg,
            r#"<rect x="{x:.1}" y="0" width="12" height="12" fill="{}"/>"#,
            entry.color.to_css()
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="10" fill="{}" font-size="{}">{}</text>"#,
            x + 16.0,
            opts.label.to_css(),
            opts.font_size,
            escape(&entry.metric)
        );
        // Rough advance; legends are short labels, not shaped text.
        x += 16.0 + 8.0 * entry.metric.len() as f64 + 12.0;
    }
    let _ = writeln!(svg, "</g>");
}

fn time_label(ts: i64) -> String {
    Local
        .timestamp_millis_opt(ts)
        .single()
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| ts.to_string())
}

/// Bar-band labels show the row's wall-clock time when the row exists.
fn row_label(rows: &[AlignedRow], index: usize) -> String {
    rows.get(index).map_or_else(|| index.to_string(), |row| time_label(row.timestamp))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
