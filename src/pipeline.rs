//! The plotting pipeline for both modes:
//! locate input(s) → load table(s) → lay out → render → persist → display.
//!
//! [`plot_plain`] and [`plot_overlay`] stop after persisting so they can run
//! headless; [`display`] opens the viewer when the configuration asks for it.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::app::run_viewer;
use crate::config::PlotConfig;
use crate::data::paths::{
    choose_file_name, derive_spike_path, output_path, resolve_input, SPIKES_OUTPUT_SUFFIX,
    VECTOR_EXTENSION,
};
use crate::data::{SpikeTable, TraceTable};
use crate::error::{PlotError, Result};
use crate::figure::{layout, raster, svg, Figure, RenderContext};

/// Arguments of a plain-mode run.
#[derive(Debug, Clone, Default)]
pub struct PlainRequest {
    pub file_name: Option<String>,
    /// Overrides `PlotConfig::base_path`.
    pub base_path: Option<String>,
}

/// Arguments of a spike-overlay run.
#[derive(Debug, Clone, Default)]
pub struct OverlayRequest {
    /// Directory prefix, or the full path when `file_name` is `None`.
    pub path: String,
    pub file_name: Option<String>,
    /// Explicit spike file; skips derivation from the trace path.
    pub spikes: Option<PathBuf>,
}

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct PlotOutcome {
    pub input: PathBuf,
    pub spikes: Option<PathBuf>,
    pub figure: Figure,
    pub svg: PathBuf,
    pub png: Option<PathBuf>,
}

/// Plot every value column of one trace file.
pub fn plot_plain(cfg: &PlotConfig, req: &PlainRequest) -> Result<PlotOutcome> {
    let file_name = choose_file_name(req.file_name.as_deref(), &cfg.missing_file_name)?;
    let base = req.base_path.as_deref().unwrap_or(&cfg.base_path);
    info!("Plotting file from {file_name}");
    let input = resolve_input(base, &file_name);

    let trace = TraceTable::load(&input)?;
    info!(header = ?trace.header(), rows = trace.n_rows(), "trace table loaded");

    let figure = layout(&trace, None)?;
    let (svg_path, png_path) = persist(cfg, &figure, &input, "")?;
    Ok(PlotOutcome {
        input,
        spikes: None,
        figure,
        svg: svg_path,
        png: png_path,
    })
}

/// Plot a trace file with the spike markers of its companion spike file.
pub fn plot_overlay(cfg: &PlotConfig, req: &OverlayRequest) -> Result<PlotOutcome> {
    if req.path.is_empty() {
        return Err(PlotError::Usage(
            "Error: No file specified\n Format: <path> <file_name>".to_string(),
        ));
    }
    info!("Plotting file from {}", req.path);
    let full = match &req.file_name {
        Some(name) => format!("{}{}", req.path, name),
        None => req.path.clone(),
    };
    let spike_path = match &req.spikes {
        Some(p) => p.clone(),
        None => derive_spike_path(&full, &cfg.spike_naming)?,
    };
    info!(spikes = %spike_path.display(), "spike file");
    let input = PathBuf::from(full);

    let trace = TraceTable::load(&input)?;
    let spikes = SpikeTable::load(&spike_path)?;
    info!(
        header = ?trace.header(),
        rows = trace.n_rows(),
        spike_rows = spikes.table.n_rows(),
        no_spike_value = spikes.no_spike_value,
        "tables loaded"
    );

    let figure = layout(&trace, Some(&spikes))?;
    let (svg_path, png_path) = persist(cfg, &figure, &input, SPIKES_OUTPUT_SUFFIX)?;
    Ok(PlotOutcome {
        input,
        spikes: Some(spike_path),
        figure,
        svg: svg_path,
        png: png_path,
    })
}

/// Show the figure if the configuration enables the window. Blocks until it is closed.
pub fn display(cfg: &PlotConfig, outcome: PlotOutcome) -> Result<()> {
    if !cfg.show_window {
        return Ok(());
    }
    let headline = outcome.input.display().to_string();
    run_viewer(
        outcome.figure,
        RenderContext::new(&cfg.style),
        &cfg.title,
        Some(headline),
    )
    .map_err(|e| PlotError::Render(e.to_string()))
}

fn persist(
    cfg: &PlotConfig,
    figure: &Figure,
    input: &Path,
    suffix: &str,
) -> Result<(PathBuf, Option<PathBuf>)> {
    let ctx = RenderContext::new(&cfg.style);
    let svg_path = output_path(&cfg.output_dir, input, suffix, VECTOR_EXTENSION);
    let doc = svg::save_svg(&svg_path, figure, &ctx)?;
    info!(output = %svg_path.display(), subplots = figure.len(), "figure saved");

    let png_path = if cfg.png_preview {
        let p = output_path(&cfg.output_dir, input, suffix, "png");
        raster::save_png(&p, &doc)?;
        info!(output = %p.display(), "png preview saved");
        Some(p)
    } else {
        None
    };
    Ok((svg_path, png_path))
}
