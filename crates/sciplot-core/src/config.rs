// File: crates/sciplot-core/src/config.rs
// Summary: Closed plot configuration with per-variant allow-list validation.

use crate::error::{PlotError, Result};
use crate::variant::Variant;

/// Dynamically-typed option value for string-keyed configuration sources.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Num(f64),
    Str(String),
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        OptionValue::Num(v)
    }
}

impl From<usize> for OptionValue {
    fn from(v: usize) -> Self {
        OptionValue::Num(v as f64)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::Str(v.to_string())
    }
}

/// Plot configuration. Fields are public and typed; callers with string-keyed
/// options go through [`PlotConfig::set`], which rejects unknown names. The
/// per-variant allow-list is checked once at `Plot` construction.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotConfig {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub grid: bool,
    pub fill: bool,
    /// Bar width as a fraction of one key slot.
    pub bar_width: f64,
    /// Named palette, resolved via `palette::find`.
    pub color_scheme: String,
    pub font_size: f32,
    /// Cap on auto-computed histogram bins.
    pub max_bins: usize,
    /// Bar plots below this count get direct value labels instead of a y axis.
    pub max_direct_labels: usize,
    /// Values varying by less than this fraction of their own magnitude are
    /// treated as near-constant and zoomed instead of zero-anchored.
    pub near_constant_ratio: f64,
    /// Margin applied on both sides in the near-constant zoom branch.
    pub zoom_margin: f64,
    /// Margin below the baseline (and above the max) in the anchored branch.
    pub baseline_margin: f64,
    /// Padding fraction of the tallest bar used for label placement.
    pub label_pad: f64,
    // Names set through `set()`, validated against the variant allow-list.
    dynamic: Vec<String>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            xlabel: String::new(),
            ylabel: String::new(),
            grid: false,
            fill: false,
            bar_width: 0.9,
            color_scheme: "light".to_string(),
            font_size: 14.0,
            max_bins: 40,
            max_direct_labels: 10,
            near_constant_ratio: 0.01,
            zoom_margin: 0.4,
            baseline_margin: 0.02,
            label_pad: 0.02,
            dynamic: Vec::new(),
        }
    }
}

const COMMON: &[&str] = &[
    "title",
    "xlabel",
    "ylabel",
    "grid",
    "color_scheme",
    "font_size",
    "near_constant_ratio",
    "zoom_margin",
    "baseline_margin",
];
const BAR_ONLY: &[&str] = &["bar_width", "max_direct_labels", "label_pad"];
const LINE_ONLY: &[&str] = &["fill"];
const HIST_ONLY: &[&str] = &["max_bins"];

fn allowed(variant: Variant, name: &str) -> bool {
    if COMMON.contains(&name) {
        return true;
    }
    match variant {
        Variant::Bar => BAR_ONLY.contains(&name),
        Variant::Histogram => BAR_ONLY.contains(&name) || HIST_ONLY.contains(&name),
        Variant::Line => LINE_ONLY.contains(&name),
        Variant::Scatter | Variant::Matrix | Variant::Network => false,
    }
}

impl PlotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option by name. Unknown names or mismatched value types fail
    /// with `InvalidOption`; variant compatibility is checked later, once the
    /// variant is known.
    pub fn set(&mut self, name: &str, value: impl Into<OptionValue>) -> Result<()> {
        let value = value.into();
        let invalid = || PlotError::InvalidOption {
            name: name.to_string(),
            variant: "any",
        };
        match (name, &value) {
            ("title", OptionValue::Str(s)) => self.title = s.clone(),
            ("xlabel", OptionValue::Str(s)) => self.xlabel = s.clone(),
            ("ylabel", OptionValue::Str(s)) => self.ylabel = s.clone(),
            ("grid", OptionValue::Bool(b)) => self.grid = *b,
            ("fill", OptionValue::Bool(b)) => self.fill = *b,
            ("bar_width", OptionValue::Num(n)) => self.bar_width = *n,
            ("color_scheme", OptionValue::Str(s)) => self.color_scheme = s.clone(),
            ("font_size", OptionValue::Num(n)) => self.font_size = *n as f32,
            ("max_bins", OptionValue::Num(n)) => self.max_bins = *n as usize,
            ("max_direct_labels", OptionValue::Num(n)) => self.max_direct_labels = *n as usize,
            ("near_constant_ratio", OptionValue::Num(n)) => self.near_constant_ratio = *n,
            ("zoom_margin", OptionValue::Num(n)) => self.zoom_margin = *n,
            ("baseline_margin", OptionValue::Num(n)) => self.baseline_margin = *n,
            ("label_pad", OptionValue::Num(n)) => self.label_pad = *n,
            _ => return Err(invalid()),
        }
        self.dynamic.push(name.to_string());
        Ok(())
    }

    /// Check every dynamically-set option against the variant's allow-list.
    pub fn validate_for(&self, variant: Variant) -> Result<()> {
        for name in &self.dynamic {
            if !allowed(variant, name) {
                return Err(PlotError::InvalidOption {
                    name: name.clone(),
                    variant: variant.name(),
                });
            }
        }
        Ok(())
    }
}
