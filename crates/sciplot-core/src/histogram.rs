// File: crates/sciplot-core/src/histogram.rs
// Summary: Histogram bin-width selection and sparse sample counting.

use std::collections::BTreeMap;

use log::debug;

use crate::error::{PlotError, Result};

/// A computed binning: the bin width and the occupied bins only, ordered by
/// bin start. Bins with zero samples are omitted.
///
/// Bin convention: left edge. A sample lands in bin `floor(sample / width)`,
/// whose start is `index * width`.
#[derive(Clone, Debug, PartialEq)]
pub struct Binning {
    pub width: f64,
    pub counts: Vec<(f64, usize)>,
}

impl Binning {
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, c)| c).sum()
    }
}

/// Bin `samples` with the given width, or auto-compute one.
///
/// Auto width: `max(min_gap, span / max_bins)` where `min_gap` is the smallest
/// positive gap between sorted distinct samples and `span` the full extent.
/// Degenerate sample sets (fewer than two distinct values) fall back to 1.
pub fn bin_samples(samples: &[f64], width: Option<f64>, max_bins: usize) -> Result<Binning> {
    if samples.is_empty() && width.is_none() {
        return Err(PlotError::EmptySampleSet);
    }
    let width = match width {
        Some(w) if w > 0.0 => w,
        Some(_) => {
            return Err(PlotError::InvalidOption {
                name: "bin_width".to_string(),
                variant: "histogram",
            });
        }
        None => auto_width(samples, max_bins),
    };

    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for &s in samples {
        let index = (s / width).floor() as i64;
        *counts.entry(index).or_insert(0) += 1;
    }
    Ok(Binning {
        width,
        counts: counts
            .into_iter()
            .map(|(index, count)| (index as f64 * width, count))
            .collect(),
    })
}

fn auto_width(samples: &[f64], max_bins: usize) -> f64 {
    let mut distinct: Vec<f64> = samples.to_vec();
    distinct.sort_by(f64::total_cmp);
    distinct.dedup_by(|a, b| a.total_cmp(b).is_eq());

    if distinct.len() < 2 || max_bins < 2 {
        return 1.0;
    }
    let span = distinct[distinct.len() - 1] - distinct[0];
    let min_gap = distinct
        .windows(2)
        .map(|w| w[1] - w[0])
        .filter(|&g| g > 0.0)
        .fold(f64::INFINITY, f64::min);

    let mut width = min_gap.max(span / max_bins as f64);
    // A sample sitting exactly on a bin boundary can open one bin past the
    // cap; widen only when the occupied index spread overflows.
    let spread = |w: f64| {
        ((distinct[distinct.len() - 1] / w).floor() - (distinct[0] / w).floor()) as i64
    };
    if spread(width) >= max_bins as i64 {
        width = span / (max_bins as f64 - 1.0);
    }
    debug!("auto bin width {width} (span {span}, min gap {min_gap})");
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_single_value_uses_unit_width() {
        let b = bin_samples(&[7.0, 7.0, 7.0], None, 40).unwrap();
        assert_eq!(b.width, 1.0);
        assert_eq!(b.counts, vec![(7.0, 3)]);
    }

    #[test]
    fn empty_with_width_yields_empty_binning() {
        let b = bin_samples(&[], Some(2.0), 40).unwrap();
        assert!(b.counts.is_empty());
        assert_eq!(b.width, 2.0);
    }

    #[test]
    fn negative_samples_bin_below_zero() {
        let b = bin_samples(&[-0.5, 0.5], Some(1.0), 40).unwrap();
        assert_eq!(b.counts, vec![(-1.0, 1), (0.0, 1)]);
    }
}
