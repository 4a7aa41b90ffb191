//! Error taxonomy shared by the loaders, the layout pass and the renderers.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Everything that can abort a plotting run.
#[derive(Error, Debug)]
pub enum PlotError {
    /// A required command-line argument was missing.
    #[error("{0}")]
    Usage(String),

    /// An input, companion or output file could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// None of the naming markers occurs in the path, so the spike file cannot be located.
    #[error("cannot derive spike file path from {path:?}: none of the markers {markers:?} found")]
    PathConvention { path: String, markers: Vec<String> },

    /// Header or rows do not have the expected shape.
    #[error("malformed table {}, line {line}: {reason}", path.display())]
    Shape {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// The table has a time column but nothing else.
    #[error("table has no value columns to plot")]
    NothingToPlot,

    /// A column referenced during plotting does not exist in one of the tables.
    #[error("column {column:?} not found in {table} table")]
    ColumnNotFound { column: String, table: &'static str },

    /// The configuration file could not be read or parsed.
    #[error("invalid configuration {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    /// The drawing backend or the rasteriser failed.
    #[error("render error: {0}")]
    Render(String),
}

impl PlotError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlotError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn shape(path: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        PlotError::Shape {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }
}
