// File: crates/sciplot-core/src/axis.rs
// Summary: Axis-limit heuristics, tick layout, and tick number formatting.

use crate::config::PlotConfig;
use crate::series::Key;

/// Compute y-axis bounds that neither truncate deceptively nor waste the
/// visible range on a near-constant signal.
///
/// `distance` is the value extent, or `|min|` for a flat series. Values that
/// vary by less than `near_constant_ratio` of their own magnitude get zoomed
/// with `zoom_margin` headroom on both sides; everything else is anchored near
/// the zero baseline with a `baseline_margin` fraction of slack.
pub fn y_bounds(values: &[f64], cfg: &PlotConfig) -> (f64, f64) {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;
    for &v in values {
        min_v = min_v.min(v);
        max_v = max_v.max(v);
    }
    if !min_v.is_finite() || !max_v.is_finite() {
        return (0.0, 1.0);
    }

    let distance = if max_v > min_v { max_v - min_v } else { min_v.abs() };
    if 0.0 < distance && distance < cfg.near_constant_ratio * min_v {
        return (
            min_v - distance * cfg.zoom_margin,
            max_v + distance * cfg.zoom_margin,
        );
    }
    let lower = if min_v < 0.0 {
        min_v - distance * cfg.baseline_margin
    } else {
        -distance * cfg.baseline_margin
    };
    let mut upper = max_v + distance * cfg.baseline_margin;
    if upper <= lower {
        upper = lower + 1.0;
    }
    (lower, upper)
}

/// Evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Numeric tick positions with labels formatted per their spacing.
pub fn numeric_ticks(min: f64, max: f64, steps: usize) -> Vec<(f64, String)> {
    let positions = linspace(min, max, steps.max(2));
    let spacing = (max - min) / (positions.len() as f64 - 1.0);
    positions
        .into_iter()
        .map(|p| (p, format_tick(p, spacing)))
        .collect()
}

/// Map string keys to integer positions: sorted distinct keys become indices,
/// and each pair takes the index of its own key. Returns the per-pair
/// positions and the `(position, label)` ticks.
pub fn categorical_ticks(keys: &[&Key]) -> (Vec<f64>, Vec<(f64, String)>) {
    let mut sorted: Vec<&str> = keys.iter().filter_map(|k| k.as_str()).collect();
    sorted.sort_unstable();
    sorted.dedup();

    let positions = keys
        .iter()
        .filter_map(|k| k.as_str())
        .map(|s| sorted.binary_search(&s).unwrap_or(0) as f64)
        .collect();
    let ticks = sorted
        .iter()
        .enumerate()
        .map(|(i, s)| (i as f64, s.to_string()))
        .collect();
    (positions, ticks)
}

/// Format an axis value given the typical spacing between adjacent ticks.
///
/// Whole value and whole spacing format as a grouped integer; otherwise the
/// precision shows enough digits to tell neighboring ticks apart, never
/// negative.
pub fn format_tick(value: f64, width: f64) -> String {
    let width = if width.abs() > 0.0 { width.abs() } else { 1.0 };
    if value.fract() == 0.0 && width.fract() == 0.0 && value.abs() < 1e15 {
        return group_thousands(value as i64);
    }
    let from_width = 2 - width.log10().floor() as i32;
    let magnitude = value.abs();
    let from_value = -(if magnitude > 0.0 { magnitude } else { 1.0 })
        .log10()
        .floor() as i32;
    let precision = 0.max(from_width).max(from_value) as usize;
    format!("{value:.precision$}")
}

fn group_thousands(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}
