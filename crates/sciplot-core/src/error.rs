// File: crates/sciplot-core/src/error.rs
// Summary: Error taxonomy for construction, configuration, and drawing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    /// The normalizer received an input shape it does not understand.
    #[error("unsupported data shape: {received}")]
    UnsupportedDataShape { received: String },

    /// A configuration key is unknown, or not accepted by the chosen variant.
    #[error("invalid option `{name}` for {variant} plot")]
    InvalidOption { name: String, variant: &'static str },

    /// Histogram binning was requested on zero samples with no bin width.
    #[error("histogram requested on an empty sample set with no bin width")]
    EmptySampleSet,

    /// The drawing surface rejected a primitive call.
    #[error("drawing surface error: {0}")]
    Surface(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PlotError {
    pub(crate) fn shape(received: impl Into<String>) -> Self {
        Self::UnsupportedDataShape { received: received.into() }
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;
