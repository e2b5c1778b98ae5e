// File: crates/sciplot-core/src/lib.rs
// Summary: Core library entry point; exports the public API for plot
// construction, heuristics, and the drawing-surface seam.

pub mod axis;
pub mod config;
pub mod data;
pub mod error;
pub mod geometry;
pub mod histogram;
pub mod labels;
pub mod palette;
pub mod plot;
pub mod series;
pub mod surface;
pub mod variant;

pub use config::{OptionValue, PlotConfig};
pub use data::{Data, Datum};
pub use error::{PlotError, Result};
pub use geometry::{Insets, RectI32};
pub use histogram::{bin_samples, Binning};
pub use labels::{BarLabel, LabelAnchor};
pub use palette::{Color, Palette};
pub use plot::{show_grid, Graph, Plot};
pub use series::{Key, Series, Value};
pub use surface::{AxisSide, FigureStyle, Surface};
pub use variant::{select, Variant};
