// File: crates/sciplot-core/src/plot.rs
// Summary: Plot construction (explicit and auto-selected), the figure drawing
// pipeline, and multi-plot grid layout.

use std::path::Path;

use log::debug;

use crate::axis::{categorical_ticks, numeric_ticks, y_bounds};
use crate::config::PlotConfig;
use crate::data::Data;
use crate::error::{PlotError, Result};
use crate::geometry::RectI32;
use crate::histogram::bin_samples;
use crate::labels::direct_labels;
use crate::palette;
use crate::series::{Key, Series, Value};
use crate::surface::{AxisSide, FigureStyle, Surface};
use crate::variant::{select, Variant};

/// Node-link data for the Network variant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    pub nodes: Vec<String>,
    pub edges: Vec<(usize, usize)>,
}

impl Graph {
    /// Build from an edge list, collecting nodes in order of first appearance.
    pub fn from_edges(edges: &[(String, String)]) -> Self {
        let mut nodes: Vec<String> = Vec::new();
        let mut index_of = |nodes: &mut Vec<String>, name: &str| -> usize {
            match nodes.iter().position(|n| n == name) {
                Some(i) => i,
                None => {
                    nodes.push(name.to_string());
                    nodes.len() - 1
                }
            }
        };
        let mut indexed = Vec::with_capacity(edges.len());
        for (a, b) in edges {
            let ia = index_of(&mut nodes, a);
            let ib = index_of(&mut nodes, b);
            indexed.push((ia, ib));
        }
        Graph { nodes, edges: indexed }
    }
}

/// A fully-constructed plot: normalized series, chosen variant, merged config.
/// Immutable after construction; drawing reads it and leaves it untouched.
#[derive(Debug)]
pub struct Plot {
    series: Series,
    variant: Variant,
    config: PlotConfig,
    graph: Option<Graph>,
    bin_width: Option<f64>,
}

impl Plot {
    /// Build with an explicit variant (the `createPlot` entry point).
    ///
    /// `Variant::Network` carries an edge list, not a series; use
    /// [`Plot::network`] for it.
    pub fn new(data: impl Into<Data>, variant: Variant, config: PlotConfig) -> Result<Self> {
        if variant == Variant::Network {
            return Err(PlotError::shape(
                "network plots are built from an edge list via Plot::network",
            ));
        }
        config.validate_for(variant)?;
        let series = Series::normalize(&data.into())?;
        Ok(Self { series, variant, config, graph: None, bin_width: None })
    }

    /// Normalize the data and pick the variant heuristically (`selectPlot`).
    pub fn auto(data: impl Into<Data>, config: PlotConfig) -> Result<Self> {
        let series = Series::normalize(&data.into())?;
        let variant = select(&series);
        config.validate_for(variant)?;
        Ok(Self { series, variant, config, graph: None, bin_width: None })
    }

    /// Bin raw samples and plot the counts as bars of one bin width.
    pub fn histogram(
        samples: &[f64],
        bin_width: Option<f64>,
        config: PlotConfig,
    ) -> Result<Self> {
        config.validate_for(Variant::Histogram)?;
        let binning = bin_samples(samples, bin_width, config.max_bins)?;
        let pairs = binning
            .counts
            .iter()
            .map(|&(start, count)| (Key::Num(start), Value::Scalar(count as f64)))
            .collect();
        let series = Series::from_pairs(pairs)?;
        debug!(
            "histogram of {} samples -> {} bins, width {}",
            samples.len(),
            series.len(),
            binning.width
        );
        Ok(Self {
            series,
            variant: Variant::Histogram,
            config,
            graph: None,
            bin_width: Some(binning.width),
        })
    }

    /// Plot an edge list as a node-link diagram.
    pub fn network(edges: &[(String, String)], config: PlotConfig) -> Result<Self> {
        config.validate_for(Variant::Network)?;
        Ok(Self {
            series: Series::default(),
            variant: Variant::Network,
            config,
            graph: Some(Graph::from_edges(edges)),
            bin_width: None,
        })
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Draw this plot into `frame` on the surface. Does not present.
    pub fn draw(&self, surface: &mut dyn Surface, frame: RectI32) -> Result<()> {
        match self.variant {
            Variant::Bar | Variant::Histogram => self.draw_bars(surface, frame),
            Variant::Line | Variant::Scatter => self.draw_points(surface, frame),
            Variant::Matrix => self.draw_matrix(surface, frame),
            Variant::Network => self.draw_network(surface, frame),
        }
    }

    /// Draw on the full surface and present the frame.
    pub fn render(&self, surface: &mut dyn Surface) -> Result<()> {
        let (w, h) = surface.size();
        self.draw(surface, RectI32::from_ltwh(0, 0, w, h))?;
        surface.render()
    }

    /// Draw on the full surface and export to `path` (format by extension).
    pub fn save_to_file(&self, surface: &mut dyn Surface, path: impl AsRef<Path>) -> Result<()> {
        let (w, h) = surface.size();
        self.draw(surface, RectI32::from_ltwh(0, 0, w, h))?;
        surface.save_to_file(path.as_ref())
    }

    fn style(&self, hide_y_axis: bool) -> FigureStyle {
        FigureStyle {
            title: self.config.title.clone(),
            xlabel: self.config.xlabel.clone(),
            ylabel: self.config.ylabel.clone(),
            grid: self.config.grid,
            font_size: self.config.font_size,
            palette: palette::find(&self.config.color_scheme),
            hide_y_axis,
        }
    }

    /// Positions along x for each pair, with the tick labels to show there.
    /// String keys map to sorted-distinct indices; numeric keys stand as-is.
    fn x_layout(&self) -> (Vec<f64>, Option<Vec<(f64, String)>>) {
        if self.series.keys_are_strings() {
            let keys: Vec<&Key> = self.series.keys().collect();
            let (positions, ticks) = categorical_ticks(&keys);
            (positions, Some(ticks))
        } else {
            let positions = self.series.keys().filter_map(Key::as_num).collect();
            (positions, None)
        }
    }

    fn draw_empty(&self, surface: &mut dyn Surface, frame: RectI32) -> Result<()> {
        surface.begin_figure(frame, &self.style(false))?;
        surface.set_axis_limits((0.0, 1.0), (0.0, 1.0))?;
        surface.set_tick_labels(AxisSide::X, &numeric_ticks(0.0, 1.0, 6))?;
        surface.set_tick_labels(AxisSide::Y, &numeric_ticks(0.0, 1.0, 6))?;
        Ok(())
    }

    fn draw_bars(&self, surface: &mut dyn Surface, frame: RectI32) -> Result<()> {
        let values = self.series.scalar_values();
        if values.is_empty() {
            return self.draw_empty(surface, frame);
        }
        let (positions, cat_ticks) = self.x_layout();
        let width = self.bin_width.unwrap_or(self.config.bar_width);
        let labels = direct_labels(&positions, &values, &self.config);

        surface.begin_figure(frame, &self.style(labels.is_some()))?;

        let (x_min, x_max) = extent(&positions);
        let span = (x_max - x_min).max(width);
        let x_lim = (
            x_min - width * 0.5 - span * 0.02,
            x_max + width * 0.5 + span * 0.02,
        );
        let y_lim = y_bounds(&values, &self.config);
        surface.set_axis_limits(x_lim, y_lim)?;

        match cat_ticks {
            Some(ticks) => surface.set_tick_labels(AxisSide::X, &ticks)?,
            None => surface.set_tick_labels(AxisSide::X, &numeric_ticks(x_min, x_max, 6))?,
        }
        if labels.is_none() {
            surface.set_tick_labels(AxisSide::Y, &numeric_ticks(y_lim.0, y_lim.1, 6))?;
        }

        let bars: Vec<(f64, f64)> = positions.iter().copied().zip(values).collect();
        surface.draw_bars(&bars, width)?;
        if let Some(labels) = labels {
            surface.draw_labels(&labels)?;
        }
        Ok(())
    }

    fn draw_points(&self, surface: &mut dyn Surface, frame: RectI32) -> Result<()> {
        let values = self.series.scalar_values();
        if values.is_empty() {
            return self.draw_empty(surface, frame);
        }
        let (positions, cat_ticks) = self.x_layout();

        surface.begin_figure(frame, &self.style(false))?;

        let (x_min, x_max) = extent(&positions);
        let span = if x_max > x_min { x_max - x_min } else { 1.0 };
        let x_lim = (x_min - span * 0.02, x_max + span * 0.02);
        let y_lim = y_bounds(&values, &self.config);
        surface.set_axis_limits(x_lim, y_lim)?;

        match cat_ticks {
            Some(ticks) => surface.set_tick_labels(AxisSide::X, &ticks)?,
            None => surface.set_tick_labels(AxisSide::X, &numeric_ticks(x_min, x_max, 6))?,
        }
        surface.set_tick_labels(AxisSide::Y, &numeric_ticks(y_lim.0, y_lim.1, 6))?;

        let points: Vec<(f64, f64)> = positions.iter().copied().zip(values).collect();
        match self.variant {
            Variant::Scatter => surface.draw_scatter(&points),
            _ if self.config.fill => surface.draw_filled_area(&points),
            _ => surface.draw_line(&points),
        }
    }

    fn draw_matrix(&self, surface: &mut dyn Surface, frame: RectI32) -> Result<()> {
        let rows = match self.series.rows() {
            Some(rows) if !rows.is_empty() => rows,
            _ => return self.draw_empty(surface, frame),
        };
        let n_rows = rows.len() as f64;
        let n_cols = rows[0].len() as f64;

        surface.begin_figure(frame, &self.style(false))?;
        surface.set_axis_limits((0.0, n_cols), (0.0, n_rows))?;
        surface.set_tick_labels(AxisSide::X, &numeric_ticks(0.0, n_cols, 6))?;
        surface.set_tick_labels(AxisSide::Y, &numeric_ticks(0.0, n_rows, 6))?;
        surface.draw_image(&rows)
    }

    fn draw_network(&self, surface: &mut dyn Surface, frame: RectI32) -> Result<()> {
        let graph = match &self.graph {
            Some(g) if !g.nodes.is_empty() => g,
            _ => return self.draw_empty(surface, frame),
        };
        surface.begin_figure(frame, &self.style(true))?;
        surface.set_axis_limits((-1.2, 1.2), (-1.2, 1.2))?;
        surface.set_tick_labels(AxisSide::X, &[])?;
        surface.set_tick_labels(AxisSide::Y, &[])?;
        surface.draw_graph(&graph.nodes, &graph.edges)
    }
}

fn extent(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() {
        (min, max)
    } else {
        (0.0, 1.0)
    }
}

/// Arrange `plots` into a grid and present the whole frame once. `rows`
/// defaults to the ceiling of the square root of the plot count.
pub fn show_grid(plots: &[Plot], rows: Option<usize>, surface: &mut dyn Surface) -> Result<()> {
    if plots.is_empty() {
        return surface.render();
    }
    let n = plots.len();
    let rows = rows.unwrap_or_else(|| (n as f64).sqrt().ceil() as usize).max(1);
    let cols = n.div_ceil(rows);

    let (w, h) = surface.size();
    let cell_w = w / cols as i32;
    let cell_h = h / rows as i32;
    for (i, plot) in plots.iter().enumerate() {
        let r = (i / cols) as i32;
        let c = (i % cols) as i32;
        let frame = RectI32::from_ltwh(c * cell_w, r * cell_h, cell_w, cell_h);
        plot.draw(surface, frame)?;
    }
    surface.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_collects_nodes_in_first_appearance_order() {
        let g = Graph::from_edges(&[
            ("b".to_string(), "a".to_string()),
            ("a".to_string(), "c".to_string()),
        ]);
        assert_eq!(g.nodes, vec!["b", "a", "c"]);
        assert_eq!(g.edges, vec![(0, 1), (1, 2)]);
    }
}
