// File: crates/sciplot-core/src/surface.rs
// Summary: Drawing-capability trait: the seam between plot logic and any
// concrete 2D renderer.

use std::path::Path;

use crate::error::Result;
use crate::geometry::RectI32;
use crate::labels::BarLabel;
use crate::palette::Palette;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    X,
    Y,
}

/// Figure-level styling handed to the surface once per figure.
#[derive(Clone, Debug)]
pub struct FigureStyle {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub grid: bool,
    pub font_size: f32,
    pub palette: Palette,
    /// Direct bar labels replace the numeric y axis on small bar plots.
    pub hide_y_axis: bool,
}

/// Everything a renderer must provide. Coordinates passed to the `draw_*`
/// primitives are in data space; the surface owns the data-to-pixel transform
/// implied by the most recent `set_axis_limits` call.
///
/// Call order per figure: `begin_figure`, `set_axis_limits`, any number of
/// `set_tick_labels`/`draw_*` calls, then `render` (present) or
/// `save_to_file` (export) once all figures of the frame are drawn.
pub trait Surface {
    /// Full drawable size in pixels.
    fn size(&self) -> (i32, i32);

    /// Start a figure confined to `frame` (a grid cell, or the full surface).
    fn begin_figure(&mut self, frame: RectI32, style: &FigureStyle) -> Result<()>;

    fn set_axis_limits(&mut self, x: (f64, f64), y: (f64, f64)) -> Result<()>;

    fn set_tick_labels(&mut self, axis: AxisSide, ticks: &[(f64, String)]) -> Result<()>;

    /// Bars as `(center, height)` from the zero baseline, `width` in data units.
    fn draw_bars(&mut self, bars: &[(f64, f64)], width: f64) -> Result<()>;

    fn draw_line(&mut self, points: &[(f64, f64)]) -> Result<()>;

    fn draw_filled_area(&mut self, points: &[(f64, f64)]) -> Result<()>;

    fn draw_scatter(&mut self, points: &[(f64, f64)]) -> Result<()>;

    /// Matrix rows as a shaded image, row 0 at the top.
    fn draw_image(&mut self, rows: &[&[f64]]) -> Result<()>;

    /// Node-link diagram; `edges` index into `nodes`.
    fn draw_graph(&mut self, nodes: &[String], edges: &[(usize, usize)]) -> Result<()>;

    /// Direct value labels (small bar plots).
    fn draw_labels(&mut self, labels: &[BarLabel]) -> Result<()>;

    /// Present the completed frame.
    fn render(&mut self) -> Result<()>;

    /// Export the completed frame; format chosen by file extension.
    fn save_to_file(&mut self, path: &Path) -> Result<()>;
}
