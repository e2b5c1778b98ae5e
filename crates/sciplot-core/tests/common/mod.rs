// File: crates/sciplot-core/tests/common/mod.rs
// Purpose: Call-recording Surface double for pipeline tests.

use std::path::Path;

use sciplot_core::{AxisSide, BarLabel, FigureStyle, RectI32, Result, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Begin {
        frame: RectI32,
        title: String,
        hide_y_axis: bool,
    },
    Limits {
        x: (f64, f64),
        y: (f64, f64),
    },
    Ticks {
        axis: AxisSide,
        labels: Vec<String>,
    },
    Bars {
        bars: Vec<(f64, f64)>,
        width: f64,
    },
    Line(Vec<(f64, f64)>),
    FilledArea(Vec<(f64, f64)>),
    Scatter(Vec<(f64, f64)>),
    Image {
        rows: usize,
        cols: usize,
    },
    Graph {
        nodes: Vec<String>,
        edges: Vec<(usize, usize)>,
    },
    Labels(Vec<BarLabel>),
    Render,
    Save(String),
}

pub struct RecordingSurface {
    pub calls: Vec<Call>,
    size: (i32, i32),
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self { calls: Vec::new(), size: (1024, 640) }
    }

    pub fn begins(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Begin { .. }))
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (i32, i32) {
        self.size
    }

    fn begin_figure(&mut self, frame: RectI32, style: &FigureStyle) -> Result<()> {
        self.calls.push(Call::Begin {
            frame,
            title: style.title.clone(),
            hide_y_axis: style.hide_y_axis,
        });
        Ok(())
    }

    fn set_axis_limits(&mut self, x: (f64, f64), y: (f64, f64)) -> Result<()> {
        self.calls.push(Call::Limits { x, y });
        Ok(())
    }

    fn set_tick_labels(&mut self, axis: AxisSide, ticks: &[(f64, String)]) -> Result<()> {
        self.calls.push(Call::Ticks {
            axis,
            labels: ticks.iter().map(|(_, l)| l.clone()).collect(),
        });
        Ok(())
    }

    fn draw_bars(&mut self, bars: &[(f64, f64)], width: f64) -> Result<()> {
        self.calls.push(Call::Bars { bars: bars.to_vec(), width });
        Ok(())
    }

    fn draw_line(&mut self, points: &[(f64, f64)]) -> Result<()> {
        self.calls.push(Call::Line(points.to_vec()));
        Ok(())
    }

    fn draw_filled_area(&mut self, points: &[(f64, f64)]) -> Result<()> {
        self.calls.push(Call::FilledArea(points.to_vec()));
        Ok(())
    }

    fn draw_scatter(&mut self, points: &[(f64, f64)]) -> Result<()> {
        self.calls.push(Call::Scatter(points.to_vec()));
        Ok(())
    }

    fn draw_image(&mut self, rows: &[&[f64]]) -> Result<()> {
        self.calls.push(Call::Image {
            rows: rows.len(),
            cols: rows.first().map_or(0, |r| r.len()),
        });
        Ok(())
    }

    fn draw_graph(&mut self, nodes: &[String], edges: &[(usize, usize)]) -> Result<()> {
        self.calls.push(Call::Graph {
            nodes: nodes.to_vec(),
            edges: edges.to_vec(),
        });
        Ok(())
    }

    fn draw_labels(&mut self, labels: &[BarLabel]) -> Result<()> {
        self.calls.push(Call::Labels(labels.to_vec()));
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        self.calls.push(Call::Render);
        Ok(())
    }

    fn save_to_file(&mut self, path: &Path) -> Result<()> {
        self.calls.push(Call::Save(path.display().to_string()));
        Ok(())
    }
}
