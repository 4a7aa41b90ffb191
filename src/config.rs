//! Configuration types shared by the two entry points.
//!
//! Every field has a default matching the simulator's data layout, so a run
//! without a configuration file plots `./data/` into `./images/`. A YAML or
//! JSON file may override any subset of fields; command-line flags are applied
//! on top of that by [`crate::cli`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Missing file-name policy
// ─────────────────────────────────────────────────────────────────────────────

/// What plain mode does when no file name is given on the command line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFileName {
    /// Fall back to the given sample file name.
    UseDefault(String),
    /// Stop with a usage error.
    Fail,
}

impl Default for MissingFileName {
    fn default() -> Self {
        MissingFileName::UseDefault("prueba.asc".to_string())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Spike file naming
// ─────────────────────────────────────────────────────────────────────────────

/// Naming template used to find the spike file that belongs to a trace file.
///
/// The simulator names its outputs after the integration method, e.g.
/// `run_Euler_0.0010.asc` and `run_spikes_Euler_0.0010.asc`. The companion path
/// is built by inserting `prefix` right before the first marker found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpikeNaming {
    /// Markers tried in order; the first one present in the path is used.
    pub markers: Vec<String>,
    /// Segment inserted before the marker.
    pub prefix: String,
}

impl Default for SpikeNaming {
    fn default() -> Self {
        Self {
            markers: vec!["Euler".to_string(), "Runge".to_string()],
            prefix: "spikes_".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Figure style
// ─────────────────────────────────────────────────────────────────────────────

/// Sizes used when drawing the figure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Font size (px) for titles, axis labels and tick labels.
    pub font_size: u32,
    /// Figure width in px.
    pub width_px: u32,
    /// Height in px of one stacked subplot.
    pub subplot_height_px: u32,
    /// Stroke width of trace lines.
    pub line_width: u32,
    /// Radius of spike markers.
    pub marker_radius: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_size: 20,
            width_px: 1600,
            subplot_height_px: 260,
            line_width: 2,
            marker_radius: 4,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PlotConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for a plotting run.
///
/// | Field               | Purpose |
/// |---------------------|---------|
/// | `base_path`         | Directory prefix for plain-mode file names |
/// | `missing_file_name` | Plain-mode behaviour when no file name is given |
/// | `spike_naming`      | How the spike file path is derived |
/// | `output_dir`        | Where images are written |
/// | `style`             | Figure sizes |
/// | `show_window`       | Open the interactive viewer after saving |
/// | `png_preview`       | Also write a PNG rasterised from the SVG |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Prefix concatenated in front of the file name in plain mode.
    pub base_path: String,
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub missing_file_name: MissingFileName,
    pub spike_naming: SpikeNaming,
    pub output_dir: PathBuf,
    pub style: StyleConfig,
    pub show_window: bool,
    pub png_preview: bool,
    /// Native window title.
    pub title: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            base_path: "./data/".to_string(),
            missing_file_name: MissingFileName::default(),
            spike_naming: SpikeNaming::default(),
            output_dir: PathBuf::from("./images"),
            style: StyleConfig::default(),
            show_window: true,
            png_preview: false,
            title: "cpgplot".to_string(),
        }
    }
}

impl PlotConfig {
    /// Load a configuration file. `.json` files are parsed as JSON, anything
    /// else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| PlotError::io(path, e))?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            serde_json::from_str(&text).map_err(|e| PlotError::Config {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        } else {
            Self::from_yaml_str(&text).map_err(|reason| PlotError::Config {
                path: path.to_path_buf(),
                reason,
            })
        }
    }

    fn from_yaml_str(text: &str) -> std::result::Result<Self, String> {
        // An empty YAML document means "all defaults".
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(PlotConfig::from_yaml_str("  \n").unwrap(), PlotConfig::default());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let cfg = PlotConfig::from_yaml_str("show_window: false\nstyle:\n  font_size: 12\n").unwrap();
        assert!(!cfg.show_window);
        assert_eq!(cfg.style.font_size, 12);
        assert_eq!(cfg.style.width_px, StyleConfig::default().width_px);
        assert_eq!(cfg.spike_naming, SpikeNaming::default());
    }

    #[test]
    fn missing_file_name_policy_from_yaml() {
        let cfg = PlotConfig::from_yaml_str("missing_file_name: fail\n").unwrap();
        assert_eq!(cfg.missing_file_name, MissingFileName::Fail);
        let cfg = PlotConfig::from_yaml_str("missing_file_name:\n  use_default: other.asc\n").unwrap();
        assert_eq!(
            cfg.missing_file_name,
            MissingFileName::UseDefault("other.asc".to_string())
        );
    }
}
