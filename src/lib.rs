//! cpgplot crate root: re-exports and module wiring.
//!
//! Plots the whitespace-delimited trace files written by the Lymnaea feeding
//! CPG simulator as stacked subplots sharing one time axis, optionally with
//! the detected spikes overlaid:
//! - `data`: locating files and loading trace/spike tables
//! - `figure`: layout, palette, SVG and PNG output
//! - `app`: interactive egui viewer with linked time axes
//! - `pipeline`: the plain and overlay runs end to end
//! - `config` / `cli`: configuration file and command-line surface

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod figure;
pub mod pipeline;

// Public re-exports for a compact external API
pub use config::{MissingFileName, PlotConfig, SpikeNaming, StyleConfig};
pub use data::{SpikeTable, TraceTable};
pub use error::{PlotError, Result};
pub use figure::{layout, Figure, RenderContext, Subplot};
pub use pipeline::{plot_overlay, plot_plain, OverlayRequest, PlainRequest, PlotOutcome};
