//! Spike tables written next to the trace files.
//!
//! Layout:
//!
//! ```text
//! -50.000000            <- no_spike_value
//! t N1M N2v N3t         <- header
//! 12.5 30.1 , ,         <- sparse rows, "," marks "no spike on this channel"
//! ```
//!
//! Rows may be shorter than the header; the missing trailing channels are
//! treated as absent.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data::table::{read_table, TraceTable};
use crate::error::{PlotError, Result};

/// Field value marking an absent spike.
pub const MISSING_TOKEN: &str = ",";

/// Sparse table of spike events plus the sentinel the simulator uses for "no spike".
#[derive(Debug, Clone, PartialEq)]
pub struct SpikeTable {
    pub no_spike_value: f64,
    pub table: TraceTable,
}

impl SpikeTable {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| PlotError::io(path, e))?;
        Self::read_from(BufReader::new(file), path)
    }

    pub fn read_from<R: BufRead>(reader: R, origin: &Path) -> Result<Self> {
        let mut lines = reader.lines().enumerate();
        let no_spike_value = match lines.next() {
            Some((_, line)) => {
                let line = line.map_err(|e| PlotError::io(origin, e))?;
                line.trim().parse::<f64>().map_err(|_| {
                    PlotError::shape(
                        origin,
                        1,
                        format!("expected the no-spike value, found {:?}", line.trim()),
                    )
                })?
            }
            None => return Err(PlotError::shape(origin, 1, "empty spike file")),
        };
        let table = read_table(&mut lines, origin, Some(MISSING_TOKEN))?;
        Ok(Self {
            no_spike_value,
            table,
        })
    }

    /// Spike events of one channel as `[t, value]` pairs.
    ///
    /// Rows where the channel is absent or carries the no-spike sentinel are
    /// skipped. Fails if the channel is not in the header.
    pub fn events(&self, channel: &str) -> Result<Vec<[f64; 2]>> {
        let values = self
            .table
            .column(channel)
            .ok_or_else(|| PlotError::ColumnNotFound {
                column: channel.to_string(),
                table: "spikes",
            })?;
        Ok(self
            .table
            .time()
            .iter()
            .zip(values)
            .filter(|(t, v)| t.is_finite() && v.is_finite() && **v != self.no_spike_value)
            .map(|(t, v)| [*t, *v])
            .collect())
    }
}
