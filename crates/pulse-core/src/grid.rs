// File: crates/pulse-core/src/grid.rs
// Summary: Evenly spaced tick positions for axes and gridlines.

/// `steps` evenly spaced values from `start` to `end`, inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Tick values for a `[0, max]` value axis.
pub fn value_ticks(max: f64, count: usize) -> Vec<f64> {
    linspace(0.0, max, count.max(2))
}

/// Tick timestamps for a `[t0, t1]` time axis (epoch millis).
pub fn time_ticks(t0: i64, t1: i64, count: usize) -> Vec<i64> {
    linspace(t0 as f64, t1 as f64, count.max(2))
        .into_iter()
        .map(|v| v.round() as i64)
        .collect()
}
