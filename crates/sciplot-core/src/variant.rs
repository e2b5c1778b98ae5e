// File: crates/sciplot-core/src/variant.rs
// Summary: Plot variant tag and the heuristic selector.

use log::debug;

use crate::series::Series;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Bar,
    Scatter,
    Line,
    Matrix,
    Histogram,
    Network,
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Bar => "bar",
            Variant::Scatter => "scatter",
            Variant::Line => "line",
            Variant::Matrix => "matrix",
            Variant::Histogram => "histogram",
            Variant::Network => "network",
        }
    }
}

/// Choose a variant for a normalized series. First match wins:
///
/// 1. empty -> Line (degenerate, draws nothing);
/// 2. row values -> Matrix;
/// 3. duplicate keys -> Scatter (a point cloud is the only honest view);
/// 4. string keys -> Bar (no ordering to interpolate along);
/// 5. otherwise -> Line.
///
/// Histogram and Network are never auto-selected: raw samples and edge lists
/// are indistinguishable from plain sequences, so they require the explicit
/// constructors.
pub fn select(series: &Series) -> Variant {
    let chosen = if series.is_empty() {
        Variant::Line
    } else if series.has_rows() {
        Variant::Matrix
    } else if series.distinct_key_count() != series.len() {
        Variant::Scatter
    } else if series.keys_are_strings() {
        Variant::Bar
    } else {
        Variant::Line
    };
    debug!("selected {} for series of {} entries", chosen.name(), series.len());
    chosen
}
