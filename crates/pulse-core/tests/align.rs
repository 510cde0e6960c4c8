// File: crates/pulse-core/tests/align.rs
// Purpose: Validate timestamp-union alignment ordering, presence, and duplicates.

use pulse_core::{align, MetricSeries};

#[test]
fn mismatched_timestamps_union() {
    let series = vec![
        MetricSeries::new("cpu", vec![(1000, 10.0), (2000, 20.0)]),
        MetricSeries::new("mem", vec![(2000, 50.0)]),
    ];
    let rows = align(&series);

    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].timestamp, 1000);
    assert_eq!(rows[0].value("cpu"), Some(10.0));
    assert!(!rows[0].present("mem"));

    assert_eq!(rows[1].timestamp, 2000);
    assert_eq!(rows[1].value("cpu"), Some(20.0));
    assert_eq!(rows[1].value("mem"), Some(50.0));
}

#[test]
fn empty_input_yields_no_rows() {
    assert!(align(&[]).is_empty());
}

#[test]
fn series_without_datapoints_contributes_nothing() {
    let series = vec![
        MetricSeries::new("idle", vec![]),
        MetricSeries::new("cpu", vec![(1000, 1.0)]),
    ];
    let rows = align(&series);
    assert_eq!(rows.len(), 1);
    assert!(!rows[0].present("idle"));
    assert!(rows[0].present("cpu"));
}

#[test]
fn duplicate_timestamp_last_write_wins() {
    let series = vec![MetricSeries::new("cpu", vec![(1000, 5.0), (1000, 9.0)])];
    let rows = align(&series);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].value("cpu"), Some(9.0));
}

#[test]
fn unsorted_input_sorts_strictly_ascending() {
    let series = vec![
        MetricSeries::new("a", vec![(3000, 3.0), (1000, 1.0), (2000, 2.0)]),
        MetricSeries::new("b", vec![(2500, 2.5), (1000, 1.5)]),
    ];
    let rows = align(&series);
    for pair in rows.windows(2) {
        assert!(pair[0].timestamp < pair[1].timestamp, "timestamps must strictly increase");
    }
    assert_eq!(rows.len(), 4);
}

#[test]
fn zero_valued_sample_stays_present() {
    let series = vec![MetricSeries::new("cpu", vec![(1000, 0.0)])];
    let rows = align(&series);
    assert!(rows[0].present("cpu"));
    assert_eq!(rows[0].value("cpu"), Some(0.0));
}

#[test]
fn align_is_deterministic() {
    let series = vec![
        MetricSeries::new("cpu", vec![(5000, 1.0), (1000, 2.0), (1000, 3.0)]),
        MetricSeries::new("mem", vec![(2000, 4.0)]),
    ];
    assert_eq!(align(&series), align(&series));
}

#[test]
fn union_completeness() {
    // Every (timestamp, metric) pair in the input appears in its row, and
    // no row invents a pair absent from every input series.
    let series = vec![
        MetricSeries::new("m0", (0..40).map(|i| (i * 500, i as f64)).collect()),
        MetricSeries::new("m1", (0..40).filter(|i| i % 3 == 0).map(|i| (i * 500, -i as f64)).collect()),
        MetricSeries::new("m2", (0..40).filter(|i| i % 7 == 0).map(|i| (i * 250, 0.5)).collect()),
    ];
    let rows = align(&series);

    for s in &series {
        for &(ts, value) in &s.datapoints {
            let row = rows.iter().find(|r| r.timestamp == ts).expect("timestamp in union");
            assert_eq!(row.value(&s.name), Some(value));
        }
    }
    for row in &rows {
        for (metric, _) in &row.values {
            let from_input = series
                .iter()
                .any(|s| s.name == *metric && s.datapoints.iter().any(|&(ts, _)| ts == row.timestamp));
            assert!(from_input, "row invented ({}, {})", row.timestamp, metric);
        }
    }
}
