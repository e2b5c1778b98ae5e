// File: crates/sciplot-core/src/palette.rs
// Summary: Named color palettes for plot rendering.

/// Plain RGBA color, renderer-agnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick: Color,
    pub grid_line: Color,
    pub bar_fill: Color,
    pub line_stroke: Color,
    pub area_fill: Color,
    pub point_fill: Color,
    pub label_text: Color,
    pub matrix_low: Color,
    pub matrix_high: Color,
    pub node_fill: Color,
    pub edge_stroke: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(250, 250, 252),
            axis_line: Color::rgb(60, 60, 70),
            axis_label: Color::rgb(20, 20, 30),
            tick: Color::rgb(100, 100, 110),
            grid_line: Color::rgb(230, 230, 235),
            bar_fill: Color::rgb(40, 120, 200),
            line_stroke: Color::rgb(32, 120, 200),
            area_fill: Color::rgba(32, 120, 200, 80),
            point_fill: Color::rgb(32, 120, 200),
            label_text: Color::rgb(20, 20, 30),
            matrix_low: Color::rgb(247, 251, 255),
            matrix_high: Color::rgb(8, 48, 107),
            node_fill: Color::rgb(40, 120, 200),
            edge_stroke: Color::rgb(150, 150, 160),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            axis_line: Color::rgb(180, 180, 190),
            axis_label: Color::rgb(235, 235, 245),
            tick: Color::rgb(150, 150, 160),
            grid_line: Color::rgb(40, 40, 45),
            bar_fill: Color::rgb(96, 156, 255),
            line_stroke: Color::rgb(64, 160, 255),
            area_fill: Color::rgba(64, 160, 255, 96),
            point_fill: Color::rgb(64, 160, 255),
            label_text: Color::rgb(235, 235, 245),
            matrix_low: Color::rgb(18, 18, 20),
            matrix_high: Color::rgb(96, 156, 255),
            node_fill: Color::rgb(96, 156, 255),
            edge_stroke: Color::rgb(90, 90, 100),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Color::rgb(0x00, 0x2b, 0x36),
            axis_line: Color::rgb(0x93, 0xa1, 0xa1),
            axis_label: Color::rgb(0xee, 0xe8, 0xd5),
            tick: Color::rgb(0x83, 0x94, 0x96),
            grid_line: Color::rgb(0x07, 0x36, 0x42),
            bar_fill: Color::rgb(0x26, 0x8b, 0xd2),
            line_stroke: Color::rgb(0x26, 0x8b, 0xd2),
            area_fill: Color::rgba(0x26, 0x8b, 0xd2, 96),
            point_fill: Color::rgb(0x2a, 0xa1, 0x98),
            label_text: Color::rgb(0xee, 0xe8, 0xd5),
            matrix_low: Color::rgb(0x00, 0x2b, 0x36),
            matrix_high: Color::rgb(0x26, 0x8b, 0xd2),
            node_fill: Color::rgb(0x2a, 0xa1, 0x98),
            edge_stroke: Color::rgb(0x58, 0x6e, 0x75),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: Color::rgb(0, 0, 0),
            axis_line: Color::rgb(255, 255, 255),
            axis_label: Color::rgb(255, 255, 255),
            tick: Color::rgb(204, 204, 204),
            grid_line: Color::rgb(34, 34, 34),
            bar_fill: Color::rgb(0, 170, 255),
            line_stroke: Color::rgb(0, 255, 255),
            area_fill: Color::rgba(0, 170, 255, 120),
            point_fill: Color::rgb(0, 255, 0),
            label_text: Color::rgb(255, 255, 255),
            matrix_low: Color::rgb(0, 0, 0),
            matrix_high: Color::rgb(0, 170, 255),
            node_fill: Color::rgb(0, 255, 0),
            edge_stroke: Color::rgb(136, 136, 136),
        }
    }

    /// Interpolate the matrix gradient at `t` in [0, 1].
    pub fn matrix_color(&self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| -> u8 { (a as f64 + (b as f64 - a as f64) * t).round() as u8 };
        Color::rgba(
            lerp(self.matrix_low.r, self.matrix_high.r),
            lerp(self.matrix_low.g, self.matrix_high.g),
            lerp(self.matrix_low.b, self.matrix_high.b),
            255,
        )
    }
}

/// Built-in palette presets.
pub fn presets() -> Vec<Palette> {
    vec![
        Palette::light(),
        Palette::dark(),
        Palette::solarized_dark(),
        Palette::high_contrast(),
    ]
}

/// Find a palette by name, falling back to light.
pub fn find(name: &str) -> Palette {
    for p in presets() {
        if p.name.eq_ignore_ascii_case(name) {
            return p;
        }
    }
    Palette::light()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive_with_fallback() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("no-such-scheme").name, "light");
    }

    #[test]
    fn matrix_gradient_endpoints() {
        let p = Palette::light();
        assert_eq!(p.matrix_color(0.0).r, p.matrix_low.r);
        assert_eq!(p.matrix_color(1.0).b, p.matrix_high.b);
    }
}
