//! CLI argument parsing for the two entry points.

use std::path::PathBuf;

use clap::{Args, Parser};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

use crate::config::{MissingFileName, PlotConfig};
use crate::error::Result;
use crate::pipeline::{OverlayRequest, PlainRequest};

/// Options shared by both binaries.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Configuration file (YAML, or JSON when the extension is .json)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory the images are written to
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Save the figure without opening the interactive window
    #[arg(long)]
    pub no_show: bool,

    /// Also write a PNG preview next to the SVG
    #[arg(long)]
    pub png: bool,

    /// Verbose logging
    #[arg(long)]
    pub debug: bool,
}

impl CommonArgs {
    /// Load the configuration file (or defaults) and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<PlotConfig> {
        let mut cfg = match &self.config {
            Some(path) => PlotConfig::from_file(path)?,
            None => PlotConfig::default(),
        };
        if let Some(dir) = &self.output_dir {
            cfg.output_dir = dir.clone();
        }
        if self.no_show {
            cfg.show_window = false;
        }
        if self.png {
            cfg.png_preview = true;
        }
        Ok(cfg)
    }
}

/// Plot every column of a simulator trace file as stacked subplots.
#[derive(Parser, Debug)]
#[command(name = "cpgplot")]
#[command(version)]
#[command(about = "Stacked voltage/current plots of a CPG simulator trace file", long_about = None)]
pub struct PlainCli {
    /// Trace file name, appended to BASE_PATH
    pub file_name: Option<String>,

    /// Directory prefix for FILE_NAME (default: ./data/)
    pub base_path: Option<String>,

    /// Fail instead of falling back to the sample file when FILE_NAME is omitted
    #[arg(long)]
    pub require_file_name: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl PlainCli {
    pub fn config(&self) -> Result<PlotConfig> {
        let mut cfg = self.common.resolve_config()?;
        if self.require_file_name {
            cfg.missing_file_name = MissingFileName::Fail;
        }
        Ok(cfg)
    }

    pub fn request(&self) -> PlainRequest {
        PlainRequest {
            file_name: self.file_name.clone(),
            base_path: self.base_path.clone(),
        }
    }
}

/// Plot a trace file with the spikes detected by the simulator overlaid.
#[derive(Parser, Debug)]
#[command(name = "cpgplot-spikes")]
#[command(version)]
#[command(about = "Stacked trace plots with spike markers from the companion spikes_ file", long_about = None)]
pub struct OverlayCli {
    /// Directory prefix, or the full trace path when FILE_NAME is omitted
    pub path: String,

    /// Trace file name, appended to PATH
    pub file_name: Option<String>,

    /// Spike file to use instead of deriving it from the trace path
    #[arg(long, value_name = "FILE")]
    pub spikes: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl OverlayCli {
    pub fn config(&self) -> Result<PlotConfig> {
        self.common.resolve_config()
    }

    pub fn request(&self) -> OverlayRequest {
        OverlayRequest {
            path: self.path.clone(),
            file_name: self.file_name.clone(),
            spikes: self.spikes.clone(),
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over `debug`.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(debug: bool) -> std::result::Result<(), TryInitError> {
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_positionals_and_flags() {
        let cli = PlainCli::try_parse_from(["cpgplot", "run.asc", "./out/", "--no-show"]).unwrap();
        assert_eq!(cli.file_name.as_deref(), Some("run.asc"));
        assert_eq!(cli.base_path.as_deref(), Some("./out/"));
        let cfg = cli.config().unwrap();
        assert!(!cfg.show_window);
        assert_eq!(cfg.missing_file_name, MissingFileName::default());
    }

    #[test]
    fn require_file_name_switches_policy() {
        let cli = PlainCli::try_parse_from(["cpgplot", "--require-file-name"]).unwrap();
        assert_eq!(cli.config().unwrap().missing_file_name, MissingFileName::Fail);
    }

    #[test]
    fn second_tracing_init_is_reported() {
        let _ = init_tracing(false);
        assert!(init_tracing(true).is_err());
    }

    #[test]
    fn overlay_requires_path() {
        assert!(OverlayCli::try_parse_from(["cpgplot-spikes"]).is_err());
        let cli = OverlayCli::try_parse_from(["cpgplot-spikes", "d/", "x_Euler.asc", "--png"]).unwrap();
        let req = cli.request();
        assert_eq!(req.path, "d/");
        assert_eq!(req.file_name.as_deref(), Some("x_Euler.asc"));
        assert!(cli.config().unwrap().png_preview);
    }
}
