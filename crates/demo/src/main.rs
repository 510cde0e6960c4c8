// File: crates/demo/src/main.rs
// Summary: Demo wiring: app state, sample/CSV/live data sources, SVG chart output.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pulse_core::{align, build_legend, AlignedRow, ChartConfig, ChartType, MetricSeries};
use pulse_history::{HistoryClient, HistoryRequest, LoadGate, TimeRange};
use pulse_render_svg::{write_svg, SvgOptions};

/// Mutable state owned by this presentation layer. The core functions stay
/// pure; chart-type switches and reloads mutate only this.
struct AppState {
    chart_type: ChartType,
    rows: Vec<AlignedRow>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Args: chart type (line|bar), then an optional CSV file of
    // metric,timestamp,value rows. With PULSE_API_URL set, the data comes
    // from the history API instead (PULSE_OBJECT_ID and PULSE_AUTH_TOKEN
    // required, PULSE_DOWNSAMPLE optional).
    let chart_type = match std::env::args().nth(1).as_deref() {
        Some("bar") => ChartType::Bar,
        _ => ChartType::Line,
    };
    let csv_path = std::env::args().nth(2).map(PathBuf::from);

    let declared = metric_order_from_env();
    let (series, metric_order) = if let Ok(api_url) = std::env::var("PULSE_API_URL") {
        (fetch_series(&api_url, &declared).await?, declared)
    } else if let Some(path) = csv_path {
        // CSV input declares its metric order by first appearance.
        let series = load_series_csv(&path)?;
        let order = series.iter().map(|s| s.name.clone()).collect();
        (series, order)
    } else {
        let now = chrono::Utc::now().timestamp_millis();
        (sample_series(&declared, now - 3_600_000, now), declared)
    };

    let mut state = AppState { chart_type, rows: align(&series) };
    println!("Aligned {} rows from {} series", state.rows.len(), series.len());

    let opts = SvgOptions::default();
    let mut config = ChartConfig::new(state.chart_type, metric_order);

    let out = out_path(state.chart_type);
    write_svg(&state.rows, &config, &opts, &out)?;
    println!("Wrote {}", out.display());
    for entry in build_legend(&config.metric_order) {
        println!("  {}  {}", entry.color.to_css(), entry.metric);
    }

    // Toggling the chart type re-renders from the same aligned rows; the
    // prior primitives are replaced wholesale rather than patched.
    state.chart_type = match state.chart_type {
        ChartType::Line => ChartType::Bar,
        ChartType::Bar => ChartType::Line,
    };
    config.chart_type = state.chart_type;
    let out = out_path(state.chart_type);
    write_svg(&state.rows, &config, &opts, &out)?;
    println!("Wrote {}", out.display());

    Ok(())
}

fn out_path(chart_type: ChartType) -> PathBuf {
    let name = match chart_type {
        ChartType::Line => "chart_line.svg",
        ChartType::Bar => "chart_bar.svg",
    };
    PathBuf::from("target/out").join(name)
}

/// Declared metric order, comma-separated in PULSE_METRICS.
fn metric_order_from_env() -> Vec<String> {
    std::env::var("PULSE_METRICS")
        .unwrap_or_else(|_| "cpu,mem".to_string())
        .split(',')
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .collect()
}

/// Twenty evenly spaced sample points per metric over the window, with
/// values in [100, 1100). Seeded so repeated runs draw the same chart.
fn sample_series(metrics: &[String], from: i64, to: i64) -> Vec<MetricSeries> {
    fastrand::seed(7);
    let step = (to - from) / 20;
    metrics
        .iter()
        .map(|name| {
            let datapoints =
                (0..20).map(|i| (from + i * step, 100.0 + fastrand::f64() * 1000.0)).collect();
            MetricSeries::new(name.clone(), datapoints)
        })
        .collect()
}

/// Load metric,timestamp,value rows (headers required, any column order).
fn load_series_csv(path: &Path) -> Result<Vec<MetricSeries>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |name: &str| headers.iter().position(|h| h == name);
    let (Some(i_metric), Some(i_ts), Some(i_value)) =
        (idx("metric"), idx("timestamp"), idx("value"))
    else {
        anyhow::bail!("CSV needs metric,timestamp,value columns");
    };

    let mut order: Vec<String> = Vec::new();
    let mut by_metric: HashMap<String, Vec<(i64, f64)>> = HashMap::new();
    for rec in rdr.records() {
        let rec = rec?;
        let metric = rec.get(i_metric).unwrap_or("").trim();
        let ts = rec.get(i_ts).and_then(|s| s.trim().parse::<i64>().ok());
        let value = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok());
        let (Some(ts), Some(value)) = (ts, value) else { continue };
        if metric.is_empty() {
            continue;
        }
        if !by_metric.contains_key(metric) {
            order.push(metric.to_string());
        }
        by_metric.entry(metric.to_string()).or_default().push((ts, value));
    }

    Ok(order
        .into_iter()
        .map(|name| {
            let datapoints = by_metric.remove(&name).unwrap_or_default();
            MetricSeries::new(name, datapoints)
        })
        .collect())
}

/// Fetch the last hour of history, holding the load gate for the duration
/// of the request so a second trigger cannot overlap it.
async fn fetch_series(api_url: &str, metrics: &[String]) -> Result<Vec<MetricSeries>> {
    let now = chrono::Utc::now().timestamp_millis();
    let (from, to) = TimeRange::LastHour.window(now).context("preset window")?;
    let request = HistoryRequest {
        object_id: std::env::var("PULSE_OBJECT_ID")
            .context("PULSE_OBJECT_ID is required for live fetch")?,
        from,
        to,
        downsample: std::env::var("PULSE_DOWNSAMPLE").unwrap_or_else(|_| "5m".to_string()),
        metrics: metrics.to_vec(),
        auth_token: std::env::var("PULSE_AUTH_TOKEN")
            .context("PULSE_AUTH_TOKEN is required for live fetch")?,
    };

    let gate = LoadGate::new();
    let _permit = gate.try_acquire().context("a load is already in flight")?;
    let series = HistoryClient::new(api_url).fetch(&request).await?;
    tracing::info!(series = series.len(), "fetched history");
    Ok(series)
}
