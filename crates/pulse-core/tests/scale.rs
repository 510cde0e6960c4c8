// File: crates/pulse-core/tests/scale.rs
// Purpose: Validate position/value scale construction and degenerate-domain fallbacks.

use pulse_core::{align, ChartConfig, ChartType, MetricSeries, PositionScale, Scales};

fn config(chart_type: ChartType, metrics: &[&str]) -> ChartConfig {
    ChartConfig::new(chart_type, metrics.iter().map(|m| m.to_string()).collect())
}

#[test]
fn linear_scale_spans_plot_width() {
    let rows = align(&[MetricSeries::new("cpu", vec![(1000, 1.0), (3000, 2.0)])]);
    let cfg = config(ChartType::Line, &["cpu"]);
    let scales = Scales::build(&rows, &cfg.metric_order, &cfg);

    assert_eq!(scales.position.position(1000), 0.0);
    assert_eq!(scales.position.position(3000), cfg.plot_width());
    assert_eq!(scales.position.position(2000), cfg.plot_width() / 2.0);
}

#[test]
fn single_timestamp_maps_to_midpoint() {
    let rows = align(&[MetricSeries::new("cpu", vec![(1000, 1.0)])]);
    let cfg = config(ChartType::Line, &["cpu"]);
    let scales = Scales::build(&rows, &cfg.metric_order, &cfg);

    assert_eq!(scales.position.position(1000), cfg.plot_width() / 2.0);
}

#[test]
fn empty_rows_build_well_defined_scales() {
    let cfg = config(ChartType::Line, &["cpu"]);
    let scales = Scales::build(&[], &cfg.metric_order, &cfg);
    // Degenerate domain: anything maps to the midpoint, max falls back.
    assert_eq!(scales.position.position(12345), cfg.plot_width() / 2.0);
    assert_eq!(scales.value.max, cfg.value_fallback_max);
}

#[test]
fn band_scale_evenly_spaced_with_padding() {
    let rows = align(&[MetricSeries::new(
        "cpu",
        vec![(0, 1.0), (1000, 1.0), (2000, 1.0), (3000, 1.0)],
    )]);
    let mut cfg = config(ChartType::Bar, &["cpu"]);
    cfg.width = 500;
    cfg.margins = pulse_core::Insets::new(0, 0, 0, 100);
    cfg.band_padding = 0.1;
    let scales = Scales::build(&rows, &cfg.metric_order, &cfg);

    // plot width 400, four rows: step 100, bandwidth 90, 5px on each edge.
    match scales.position {
        PositionScale::Band { len, .. } => assert_eq!(len, 4),
        _ => panic!("bar chart must build a band scale"),
    }
    let (x0, bw) = scales.position.band(0);
    assert!((x0 - 5.0).abs() < 1e-9);
    assert!((bw - 90.0).abs() < 1e-9);
    let (x1, _) = scales.position.band(1);
    assert!((x1 - 105.0).abs() < 1e-9);
}

#[test]
fn value_scale_is_inverted() {
    let rows = align(&[MetricSeries::new("cpu", vec![(0, 10.0), (1000, 40.0)])]);
    let cfg = config(ChartType::Line, &["cpu"]);
    let scales = Scales::build(&rows, &cfg.metric_order, &cfg);

    assert_eq!(scales.value.max, 40.0);
    assert_eq!(scales.value.to_px(0.0), cfg.plot_height());
    assert_eq!(scales.value.to_px(40.0), 0.0);
}

#[test]
fn absent_metric_counts_as_zero_for_axis_max_only() {
    // "mem" never appears; the axis max must come from cpu alone, not fail.
    let rows = align(&[MetricSeries::new("cpu", vec![(0, 5.0)])]);
    let cfg = config(ChartType::Line, &["cpu", "mem"]);
    let scales = Scales::build(&rows, &cfg.metric_order, &cfg);
    assert_eq!(scales.value.max, 5.0);
}

#[test]
fn all_zero_values_fall_back_to_configured_max() {
    let rows = align(&[
        MetricSeries::new("cpu", vec![(0, 0.0), (1000, 0.0)]),
        MetricSeries::new("mem", vec![(1000, 0.0)]),
    ]);
    let cfg = config(ChartType::Line, &["cpu", "mem"]);
    let scales = Scales::build(&rows, &cfg.metric_order, &cfg);
    assert_eq!(scales.value.max, cfg.value_fallback_max);
    // Still a usable mapping: zero sits on the plot bottom.
    assert_eq!(scales.value.to_px(0.0), cfg.plot_height());
}
