//! Path conventions: input resolution, spike-file derivation and output naming.

use std::path::{Path, PathBuf};

use crate::config::{MissingFileName, SpikeNaming};
use crate::error::{PlotError, Result};

/// Output suffix appended to the file stem in spike-overlay mode.
pub const SPIKES_OUTPUT_SUFFIX: &str = "_spikes";

/// Extension of the persisted vector image.
pub const VECTOR_EXTENSION: &str = "svg";

/// Pick the file name to plot in plain mode, honouring the configured policy
/// when none was given.
pub fn choose_file_name(given: Option<&str>, policy: &MissingFileName) -> Result<String> {
    match (given, policy) {
        (Some(name), _) => Ok(name.to_string()),
        (None, MissingFileName::UseDefault(name)) => Ok(name.clone()),
        (None, MissingFileName::Fail) => Err(PlotError::Usage(
            "Error: No file specified\n Format: <file_name> [base_path]".to_string(),
        )),
    }
}

/// Build the input path by plain concatenation of `base` and `file_name`.
///
/// No separator is inserted: `"./data/" + "run.asc"` gives `./data/run.asc`,
/// while `"./data" + "run.asc"` gives `./datarun.asc`, exactly as written.
pub fn resolve_input(base: &str, file_name: &str) -> PathBuf {
    PathBuf::from(format!("{base}{file_name}"))
}

/// Derive the spike file path from a trace file path.
///
/// The markers are tried in order and `naming.prefix` is inserted before the
/// first occurrence of the first marker present.
///
/// ```
/// # use cpgplot::config::SpikeNaming;
/// # use cpgplot::data::paths::derive_spike_path;
/// let p = derive_spike_path("out/run_Euler_0.01.asc", &SpikeNaming::default()).unwrap();
/// assert_eq!(p, std::path::PathBuf::from("out/run_spikes_Euler_0.01.asc"));
/// ```
pub fn derive_spike_path(path: &str, naming: &SpikeNaming) -> Result<PathBuf> {
    let idx = naming
        .markers
        .iter()
        .filter(|m| !m.is_empty())
        .find_map(|m| path.find(m.as_str()))
        .ok_or_else(|| PlotError::PathConvention {
            path: path.to_string(),
            markers: naming.markers.clone(),
        })?;
    let (head, tail) = path.split_at(idx);
    Ok(PathBuf::from(format!("{head}{}{tail}", naming.prefix)))
}

/// Output image path: `output_dir/<stem><suffix>.<ext>`, where `<stem>` is the
/// input's file name without its last extension.
pub fn output_path(output_dir: &Path, input: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "figure".to_string());
    output_dir.join(format!("{stem}{suffix}.{extension}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euler_preferred_over_runge() {
        // Both present: Euler is tried first even though Runge comes earlier.
        let p = derive_spike_path("Runge_vs_Euler.asc", &SpikeNaming::default()).unwrap();
        assert_eq!(p, PathBuf::from("Runge_vs_spikes_Euler.asc"));
    }

    #[test]
    fn first_occurrence_of_marker() {
        let p = derive_spike_path("Euler/Euler.asc", &SpikeNaming::default()).unwrap();
        assert_eq!(p, PathBuf::from("spikes_Euler/Euler.asc"));
    }

    #[test]
    fn output_path_replaces_extension() {
        let p = output_path(
            Path::new("images"),
            Path::new("./data/run_Euler.asc"),
            "",
            VECTOR_EXTENSION,
        );
        assert_eq!(p, PathBuf::from("images/run_Euler.svg"));
    }
}
