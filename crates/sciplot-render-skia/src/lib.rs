// File: crates/sciplot-render-skia/src/lib.rs
// Summary: Skia CPU raster surface implementing the sciplot drawing trait:
// left/bottom spines only, outward ticks, raster export by file extension.

mod text;

use std::path::Path;

use log::debug;
use skia_safe as skia;

use sciplot_core::{
    AxisSide, BarLabel, Color, FigureStyle, Insets, LabelAnchor, PlotError, RectI32, Result,
    Surface,
};
use text::TextShaper;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

const TICK_LEN: f32 = 5.0;

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(color: Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(to_skia(color));
    paint
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia(color));
    paint
}

/// A CPU raster drawing surface. One figure at a time is confined to the
/// frame given to `begin_figure`; `save_to_file` snapshots the whole canvas.
pub struct SkiaSurface {
    surface: skia::Surface,
    width: i32,
    height: i32,
    shaper: TextShaper,
    insets: Insets,
    frame: RectI32,
    x_lim: (f64, f64),
    y_lim: (f64, f64),
    x_ticks: Option<Vec<(f64, String)>>,
    y_ticks: Option<Vec<(f64, String)>>,
    style: Option<FigureStyle>,
    chrome_drawn: bool,
}

impl SkiaSurface {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| PlotError::Surface("failed to create raster surface".into()))?;
        Ok(Self {
            surface,
            width,
            height,
            shaper: TextShaper::new(),
            insets: Insets::default(),
            frame: RectI32::from_ltwh(0, 0, width, height),
            x_lim: (0.0, 1.0),
            y_lim: (0.0, 1.0),
            x_ticks: None,
            y_ticks: None,
            style: None,
            chrome_drawn: false,
        })
    }

    pub fn with_default_size() -> Result<Self> {
        Self::new(WIDTH, HEIGHT)
    }

    fn plot_rect(&self) -> RectI32 {
        self.insets.apply(self.frame)
    }

    fn sx(&self, x: f64) -> f32 {
        let plot = self.plot_rect();
        let span = (self.x_lim.1 - self.x_lim.0).max(1e-9);
        plot.left as f32 + ((x - self.x_lim.0) / span) as f32 * plot.width() as f32
    }

    fn sy(&self, y: f64) -> f32 {
        let plot = self.plot_rect();
        let span = (self.y_lim.1 - self.y_lim.0).max(1e-9);
        plot.bottom as f32 - ((y - self.y_lim.0) / span) as f32 * plot.height() as f32
    }

    fn draw_text_centered(&mut self, text: &str, cx: f32, y: f32, size: f32, color: Color, mono: bool) {
        self.shaper
            .draw_centered(self.surface.canvas(), text, cx, y, size, to_skia(color), mono);
    }

    fn draw_text_right(&mut self, text: &str, right: f32, y: f32, size: f32, color: Color, mono: bool) {
        self.shaper
            .draw_right(self.surface.canvas(), text, right, y, size, to_skia(color), mono);
    }

    /// Axes, grid, ticks, and titles; drawn once per figure before the first
    /// data primitive so the data paints on top of the grid.
    fn ensure_chrome(&mut self) {
        if self.chrome_drawn {
            return;
        }
        self.chrome_drawn = true;
        let Some(style) = self.style.clone() else { return };
        let palette = style.palette;
        let plot = self.plot_rect();
        let (l, t, r, b) = (
            plot.left as f32,
            plot.top as f32,
            plot.right as f32,
            plot.bottom as f32,
        );

        let x_ticks: Vec<(f32, String)> = self
            .x_ticks
            .clone()
            .unwrap_or_default()
            .into_iter()
            .map(|(pos, label)| (self.sx(pos), label))
            .collect();
        let y_ticks: Vec<(f32, String)> = if style.hide_y_axis {
            Vec::new()
        } else {
            self.y_ticks
                .clone()
                .unwrap_or_default()
                .into_iter()
                .map(|(pos, label)| (self.sy(pos), label))
                .collect()
        };

        if style.grid {
            let paint = stroke_paint(palette.grid_line, 1.0);
            let canvas = self.surface.canvas();
            for (x, _) in &x_ticks {
                canvas.draw_line((*x, t), (*x, b), &paint);
            }
            for (y, _) in &y_ticks {
                canvas.draw_line((l, *y), (r, *y), &paint);
            }
        }

        // Spines on the left and bottom only; top and right stay open.
        {
            let axis_paint = stroke_paint(palette.axis_line, 1.5);
            let canvas = self.surface.canvas();
            canvas.draw_line((l, b), (r, b), &axis_paint);
            if !style.hide_y_axis {
                canvas.draw_line((l, t), (l, b), &axis_paint);
            }
        }

        // Outward ticks with labels.
        {
            let tick_paint = stroke_paint(palette.tick, 1.0);
            let canvas = self.surface.canvas();
            for (x, _) in &x_ticks {
                canvas.draw_line((*x, b), (*x, b + TICK_LEN), &tick_paint);
            }
            for (y, _) in &y_ticks {
                canvas.draw_line((l - TICK_LEN, *y), (l, *y), &tick_paint);
            }
        }
        for (x, label) in &x_ticks {
            self.draw_text_centered(
                label,
                *x,
                b + TICK_LEN + style.font_size,
                style.font_size,
                palette.tick,
                true,
            );
        }
        for (y, label) in &y_ticks {
            self.draw_text_right(
                label,
                l - TICK_LEN - 4.0,
                y + style.font_size * 0.35,
                style.font_size,
                palette.tick,
                true,
            );
        }

        if !style.title.is_empty() {
            let cx = (self.frame.left + self.frame.right) as f32 * 0.5;
            let y = self.frame.top as f32 + style.font_size * 1.6;
            self.draw_text_centered(
                &style.title,
                cx,
                y,
                style.font_size * 1.3,
                palette.axis_label,
                false,
            );
        }
        if !style.xlabel.is_empty() {
            let cx = (l + r) * 0.5;
            let y = self.frame.bottom as f32 - style.font_size * 0.6;
            self.draw_text_centered(&style.xlabel, cx, y, style.font_size, palette.axis_label, false);
        }
        if !style.ylabel.is_empty() {
            let x = self.frame.left as f32 + 8.0;
            let y = t - style.font_size * 0.6;
            let w = self.shaper.measure_width(&style.ylabel, style.font_size, false);
            self.draw_text_centered(
                &style.ylabel,
                x + w * 0.5,
                y,
                style.font_size,
                palette.axis_label,
                false,
            );
        }
    }

    fn style_or_err(&self) -> Result<FigureStyle> {
        self.style
            .clone()
            .ok_or_else(|| PlotError::Surface("draw call before begin_figure".into()))
    }

    /// Snapshot and encode the whole canvas.
    pub fn encode(&mut self, format: skia::EncodedImageFormat) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(format)
            .ok_or_else(|| PlotError::Surface(format!("encode {format:?} failed")))?;
        Ok(data.as_bytes().to_vec())
    }

    /// PNG bytes of the current canvas, finishing pending chrome first.
    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        self.ensure_chrome();
        self.encode(skia::EncodedImageFormat::PNG)
    }
}

impl Surface for SkiaSurface {
    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn begin_figure(&mut self, frame: RectI32, style: &FigureStyle) -> Result<()> {
        // Finish any pending figure that drew no data primitives.
        self.ensure_chrome();

        self.frame = frame;
        self.style = Some(style.clone());
        self.x_lim = (0.0, 1.0);
        self.y_lim = (0.0, 1.0);
        self.x_ticks = None;
        self.y_ticks = None;
        self.chrome_drawn = false;

        let rect = skia::Rect::from_ltrb(
            frame.left as f32,
            frame.top as f32,
            frame.right as f32,
            frame.bottom as f32,
        );
        let paint = fill_paint(style.palette.background);
        self.surface.canvas().draw_rect(rect, &paint);
        Ok(())
    }

    fn set_axis_limits(&mut self, x: (f64, f64), y: (f64, f64)) -> Result<()> {
        self.style_or_err()?;
        self.x_lim = x;
        self.y_lim = y;
        Ok(())
    }

    fn set_tick_labels(&mut self, axis: AxisSide, ticks: &[(f64, String)]) -> Result<()> {
        self.style_or_err()?;
        match axis {
            AxisSide::X => self.x_ticks = Some(ticks.to_vec()),
            AxisSide::Y => self.y_ticks = Some(ticks.to_vec()),
        }
        Ok(())
    }

    fn draw_bars(&mut self, bars: &[(f64, f64)], width: f64) -> Result<()> {
        let style = self.style_or_err()?;
        self.ensure_chrome();

        let baseline = self.sy(0.0);
        let rects: Vec<skia::Rect> = bars
            .iter()
            .map(|&(center, height)| {
                let x0 = self.sx(center - width * 0.5);
                let x1 = self.sx(center + width * 0.5).max(x0 + 1.0);
                let y = self.sy(height);
                let (top, bottom) = if y <= baseline { (y, baseline) } else { (baseline, y) };
                skia::Rect::from_ltrb(x0, top, x1, bottom)
            })
            .collect();

        let paint = fill_paint(style.palette.bar_fill);
        let canvas = self.surface.canvas();
        for rect in rects {
            canvas.draw_rect(rect, &paint);
        }
        Ok(())
    }

    fn draw_line(&mut self, points: &[(f64, f64)]) -> Result<()> {
        let style = self.style_or_err()?;
        self.ensure_chrome();
        if points.len() < 2 {
            return Ok(());
        }
        let px: Vec<(f32, f32)> = points.iter().map(|&(x, y)| (self.sx(x), self.sy(y))).collect();
        let mut path = skia::Path::new();
        path.move_to(px[0]);
        for &p in px.iter().skip(1) {
            path.line_to(p);
        }
        let stroke = stroke_paint(style.palette.line_stroke, 2.0);
        self.surface.canvas().draw_path(&path, &stroke);
        Ok(())
    }

    fn draw_filled_area(&mut self, points: &[(f64, f64)]) -> Result<()> {
        let style = self.style_or_err()?;
        self.ensure_chrome();
        if points.len() < 2 {
            return Ok(());
        }
        // Fill down to the zero baseline, clamped into the visible range.
        let base = self.sy(self.y_lim.0.max(0.0).min(self.y_lim.1));
        let px: Vec<(f32, f32)> = points.iter().map(|&(x, y)| (self.sx(x), self.sy(y))).collect();

        let mut path = skia::Path::new();
        path.move_to((px[0].0, base));
        for &p in &px {
            path.line_to(p);
        }
        path.line_to((px[px.len() - 1].0, base));
        path.close();

        let fill = fill_paint(style.palette.area_fill);
        let stroke = stroke_paint(style.palette.line_stroke, 2.0);
        let canvas = self.surface.canvas();
        canvas.draw_path(&path, &fill);
        canvas.draw_path(&path, &stroke);
        Ok(())
    }

    fn draw_scatter(&mut self, points: &[(f64, f64)]) -> Result<()> {
        let style = self.style_or_err()?;
        self.ensure_chrome();
        let px: Vec<(f32, f32)> = points.iter().map(|&(x, y)| (self.sx(x), self.sy(y))).collect();
        let paint = fill_paint(style.palette.point_fill);
        let canvas = self.surface.canvas();
        for p in px {
            canvas.draw_circle(p, 3.5, &paint);
        }
        Ok(())
    }

    fn draw_image(&mut self, rows: &[&[f64]]) -> Result<()> {
        let style = self.style_or_err()?;
        self.ensure_chrome();
        if rows.is_empty() || rows[0].is_empty() {
            return Ok(());
        }
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for row in rows {
            for &v in *row {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        let span = (hi - lo).max(1e-12);

        let n_rows = rows.len();
        let mut cells: Vec<(skia::Rect, Color)> = Vec::with_capacity(n_rows * rows[0].len());
        for (ri, row) in rows.iter().enumerate() {
            // Row 0 at the top.
            let y_top = self.sy((n_rows - ri) as f64);
            let y_bot = self.sy((n_rows - ri - 1) as f64);
            for (ci, &v) in row.iter().enumerate() {
                let x0 = self.sx(ci as f64);
                let x1 = self.sx((ci + 1) as f64);
                let color = style.palette.matrix_color((v - lo) / span);
                cells.push((skia::Rect::from_ltrb(x0, y_top, x1, y_bot), color));
            }
        }

        let canvas = self.surface.canvas();
        for (rect, color) in cells {
            canvas.draw_rect(rect, &fill_paint(color));
        }
        Ok(())
    }

    fn draw_graph(&mut self, nodes: &[String], edges: &[(usize, usize)]) -> Result<()> {
        let style = self.style_or_err()?;
        let palette = style.palette;
        self.ensure_chrome();
        if nodes.is_empty() {
            return Ok(());
        }
        // Circular layout on the unit circle; limits are set by the caller.
        let n = nodes.len();
        let positions: Vec<(f32, f32)> = (0..n)
            .map(|i| {
                let angle =
                    std::f64::consts::TAU * i as f64 / n as f64 - std::f64::consts::FRAC_PI_2;
                (self.sx(angle.cos()), self.sy(angle.sin()))
            })
            .collect();

        {
            let edge_paint = stroke_paint(palette.edge_stroke, 1.5);
            let canvas = self.surface.canvas();
            for &(a, b) in edges {
                if a >= n || b >= n {
                    return Err(PlotError::Surface(format!(
                        "edge ({a}, {b}) out of range for {n} nodes"
                    )));
                }
                canvas.draw_line(positions[a], positions[b], &edge_paint);
            }
            let node_paint = fill_paint(palette.node_fill);
            for &p in &positions {
                canvas.draw_circle(p, 10.0, &node_paint);
            }
        }
        for (i, name) in nodes.iter().enumerate() {
            let (x, y) = positions[i];
            self.draw_text_centered(name, x, y - 14.0, style.font_size, palette.axis_label, false);
        }
        Ok(())
    }

    fn draw_labels(&mut self, labels: &[BarLabel]) -> Result<()> {
        let style = self.style_or_err()?;
        let palette = style.palette;
        self.ensure_chrome();
        for label in labels {
            let x = self.sx(label.x);
            let y = self.sy(label.y);
            // Inside-bar labels sit on the fill color, so use the background
            // color for contrast; outside labels use the normal text color.
            let (color, baseline) = match label.anchor {
                LabelAnchor::Inside => (palette.background, y + style.font_size),
                LabelAnchor::Above => (palette.label_text, y - 4.0),
            };
            self.draw_text_centered(&label.text, x, baseline, style.font_size, color, true);
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        // Raster backend: presenting just finalizes pending chrome.
        self.ensure_chrome();
        Ok(())
    }

    fn save_to_file(&mut self, path: &Path) -> Result<()> {
        self.ensure_chrome();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        let format = match ext.as_str() {
            "png" => skia::EncodedImageFormat::PNG,
            "jpg" | "jpeg" => skia::EncodedImageFormat::JPEG,
            "webp" => skia::EncodedImageFormat::WEBP,
            other => {
                return Err(PlotError::Surface(format!(
                    "unsupported output format `{other}` (png, jpg, webp)"
                )));
            }
        };
        let bytes = self.encode(format)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, bytes)?;
        debug!("wrote {}", path.display());
        Ok(())
    }
}
