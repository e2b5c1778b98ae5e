// File: crates/sciplot-core/src/labels.rs
// Summary: Direct value labeling for small bar plots.

use crate::axis::format_tick;
use crate::config::PlotConfig;

/// Where a bar's value label sits relative to the bar top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelAnchor {
    /// Inside the bar, just below its top (bar is tall enough to host it).
    Inside,
    /// Above the bar top, outside the fill.
    Above,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: LabelAnchor,
}

/// Compute direct labels for bars at `positions` with the given heights, or
/// `None` when there are too many bars for direct labeling. When labels are
/// produced the numeric axis should be suppressed.
///
/// A label goes inside the bar when the bar height exceeds twice the padding
/// (a `label_pad` fraction of the tallest bar), above it otherwise.
pub fn direct_labels(positions: &[f64], heights: &[f64], cfg: &PlotConfig) -> Option<Vec<BarLabel>> {
    if heights.is_empty() || heights.len() >= cfg.max_direct_labels {
        return None;
    }
    let tallest = heights.iter().fold(0.0_f64, |acc, &h| acc.max(h.abs()));
    let pad = cfg.label_pad * tallest;

    let labels = positions
        .iter()
        .zip(heights)
        .map(|(&x, &h)| {
            let anchor = if h.abs() > 2.0 * pad {
                LabelAnchor::Inside
            } else {
                LabelAnchor::Above
            };
            let y = match anchor {
                LabelAnchor::Inside => h - pad.copysign(h),
                LabelAnchor::Above => h + pad.copysign(h),
            };
            BarLabel {
                x,
                y,
                text: format_tick(h, 1.0),
                anchor,
            }
        })
        .collect();
    Some(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tall_bars_label_inside_short_ones_above() {
        let cfg = PlotConfig::default();
        let labels =
            direct_labels(&[0.0, 1.0, 2.0], &[100.0, 3.0, 50.0], &cfg).expect("few bars");
        assert_eq!(labels[0].anchor, LabelAnchor::Inside);
        assert_eq!(labels[1].anchor, LabelAnchor::Above);
        assert_eq!(labels[2].anchor, LabelAnchor::Inside);
        assert_eq!(labels[0].text, "100");
    }

    #[test]
    fn too_many_bars_disable_direct_labels() {
        let cfg = PlotConfig::default();
        let heights: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let positions: Vec<f64> = (0..10).map(|i| i as f64).collect();
        assert!(direct_labels(&positions, &heights, &cfg).is_none());
    }
}
