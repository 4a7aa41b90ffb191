//! Layout pass: turns loaded tables into a backend-independent [`Figure`].
//!
//! Both the SVG renderer and the interactive viewer draw from the same
//! [`Figure`], so titles, labels, colours and limits are decided once here.

use crate::data::table::finite_range;
use crate::data::{SpikeTable, TraceTable};
use crate::error::{PlotError, Result};
use crate::figure::palette::{color_for_column, NamedColor};

pub const TIME_LABEL: &str = "Time (ms)";
pub const CURRENT_LABEL: &str = "Current";
pub const VOLTAGE_LABEL: &str = "Voltage\n(mV)";

/// Column holding the injected current.
pub const CURRENT_COLUMN: &str = "c";
/// Synaptic-current channels contain this substring and never get spike markers.
pub const SYNAPTIC_TAG: &str = "Isyn";

/// Margin added on both sides of a trace's range when spikes are overlaid.
const OVERLAY_Y_MARGIN: f64 = 1.0;
/// Relative padding used for automatically fitted ranges.
const AUTO_PAD: f64 = 0.05;

/// One stacked subplot.
#[derive(Debug, Clone, PartialEq)]
pub struct Subplot {
    /// Index of the plotted column in the trace header (>= 1).
    pub column_index: usize,
    pub title: String,
    pub y_label: &'static str,
    /// Only the bottom subplot carries the time label.
    pub x_label: Option<&'static str>,
    pub color: NamedColor,
    /// `[t, value]` pairs; NaN values split the line.
    pub trace: Vec<[f64; 2]>,
    /// Spike markers, present only in overlay mode for non-synaptic channels.
    pub spikes: Option<Vec<[f64; 2]>>,
    /// Explicit y limits; `None` means fit to the data.
    pub y_limits: Option<(f64, f64)>,
}

impl Subplot {
    /// The y range to draw: explicit limits, or the padded finite data range.
    pub fn y_range(&self) -> (f64, f64) {
        if let Some(limits) = self.y_limits {
            return limits;
        }
        let values: Vec<f64> = self.trace.iter().map(|p| p[1]).collect();
        padded(finite_range(&values))
    }
}

/// A stack of subplots sharing one time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub subplots: Vec<Subplot>,
    /// Shared x range of every subplot.
    pub x_range: (f64, f64),
}

impl Figure {
    pub fn len(&self) -> usize {
        self.subplots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subplots.is_empty()
    }
}

/// Build the figure for `trace`, overlaying `spikes` when given.
pub fn layout(trace: &TraceTable, spikes: Option<&SpikeTable>) -> Result<Figure> {
    let header = trace.header();
    if header.len() < 2 {
        return Err(PlotError::NothingToPlot);
    }
    let time = trace.time();
    let last = header.len() - 1;

    let mut subplots = Vec::with_capacity(last);
    for (i, name) in header.iter().enumerate().skip(1) {
        let values = trace.column(name).ok_or_else(|| PlotError::ColumnNotFound {
            column: name.clone(),
            table: "trace",
        })?;
        let points: Vec<[f64; 2]> = time.iter().zip(values).map(|(t, v)| [*t, *v]).collect();

        // In overlay mode every subplot is clamped, synaptic ones included.
        let y_limits = spikes.and_then(|_| {
            trace
                .value_range(name)
                .map(|(lo, hi)| (lo - OVERLAY_Y_MARGIN, hi + OVERLAY_Y_MARGIN))
        });
        let markers = match spikes {
            Some(spk) if !name.contains(SYNAPTIC_TAG) => Some(spk.events(name)?),
            _ => None,
        };

        subplots.push(Subplot {
            column_index: i,
            title: name.clone(),
            y_label: y_label_for(name),
            x_label: (i == last).then_some(TIME_LABEL),
            color: color_for_column(i),
            trace: points,
            spikes: markers,
            y_limits,
        });
    }

    Ok(Figure {
        subplots,
        x_range: padded_exact(trace.time_range()),
    })
}

/// Y-axis label for a column name.
pub fn y_label_for(column: &str) -> &'static str {
    if column == CURRENT_COLUMN {
        CURRENT_LABEL
    } else {
        VOLTAGE_LABEL
    }
}

/// Range with relative padding, widened when degenerate.
fn padded(range: Option<(f64, f64)>) -> (f64, f64) {
    match range {
        Some((lo, hi)) if hi > lo => {
            let pad = (hi - lo) * AUTO_PAD;
            (lo - pad, hi + pad)
        }
        Some((v, _)) => (v - 1.0, v + 1.0),
        None => (0.0, 1.0),
    }
}

/// Exact range, widened only when degenerate.
fn padded_exact(range: Option<(f64, f64)>) -> (f64, f64) {
    match range {
        Some((lo, hi)) if hi > lo => (lo, hi),
        other => padded(other),
    }
}

/// Split a polyline at non-finite points so gaps are left undrawn.
pub fn finite_segments(points: &[[f64; 2]]) -> Vec<&[[f64; 2]]> {
    points
        .split(|p| !(p[0].is_finite() && p[1].is_finite()))
        .filter(|s| !s.is_empty())
        .collect()
}
