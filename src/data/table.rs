//! Whitespace-delimited trace tables.
//!
//! File layout: the first line holds the column names, every following line
//! one row of numbers. Fields are separated by any run of whitespace. A field
//! that does not parse as a number is stored as NaN, as is every field of a
//! row that is shorter than the header.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{PlotError, Result};

/// Numbered lines as produced by `BufRead::lines().enumerate()`.
pub(crate) type NumberedLines<'a> = dyn Iterator<Item = (usize, std::io::Result<String>)> + 'a;

/// A table of `f64` columns named by a header. The first column is time.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceTable {
    header: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl TraceTable {
    /// Build a table from a header and matching columns.
    pub fn from_columns(header: Vec<String>, columns: Vec<Vec<f64>>) -> Result<Self> {
        validate_header(&header, Path::new("<memory>"), 1)?;
        if header.len() != columns.len() {
            return Err(PlotError::shape(
                "<memory>",
                1,
                format!("{} names for {} columns", header.len(), columns.len()),
            ));
        }
        let rows = columns.first().map_or(0, Vec::len);
        if columns.iter().any(|c| c.len() != rows) {
            return Err(PlotError::shape("<memory>", 1, "columns differ in length"));
        }
        Ok(Self { header, columns })
    }

    /// Load a trace table from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| PlotError::io(path, e))?;
        Self::read_from(BufReader::new(file), path)
    }

    /// Parse a trace table from any buffered reader. `origin` only feeds error messages.
    pub fn read_from<R: BufRead>(reader: R, origin: &Path) -> Result<Self> {
        let mut lines = reader.lines().enumerate();
        read_table(&mut lines, origin, None)
    }

    /// Write the table in the same format [`TraceTable::load`] reads.
    pub fn write_to<W: Write>(&self, mut w: W) -> std::io::Result<()> {
        writeln!(w, "{}", self.header.join(" "))?;
        for row in 0..self.n_rows() {
            let fields: Vec<String> = self.columns.iter().map(|c| c[row].to_string()).collect();
            writeln!(w, "{}", fields.join(" "))?;
        }
        Ok(())
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn n_columns(&self) -> usize {
        self.header.len()
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// The first column.
    pub fn time(&self) -> &[f64] {
        self.columns.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Column values by name.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.header
            .iter()
            .position(|h| h == name)
            .map(|i| self.columns[i].as_slice())
    }

    /// Finite `(min, max)` of a column, ignoring NaN and infinities.
    /// `None` if the column is absent or holds no finite value.
    pub fn value_range(&self, name: &str) -> Option<(f64, f64)> {
        finite_range(self.column(name)?)
    }

    /// Finite `(min, max)` of the time column.
    pub fn time_range(&self) -> Option<(f64, f64)> {
        finite_range(self.time())
    }
}

pub(crate) fn finite_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Read one header line and the rows after it.
///
/// `missing_token` is a literal field value that marks an absent sample.
pub(crate) fn read_table(
    lines: &mut NumberedLines<'_>,
    path: &Path,
    missing_token: Option<&str>,
) -> Result<TraceTable> {
    let (idx, header_line) = match lines.next() {
        Some((idx, line)) => (idx, line.map_err(|e| PlotError::io(path, e))?),
        None => return Err(PlotError::shape(path, 1, "missing header line")),
    };
    let header: Vec<String> = header_line.split_whitespace().map(str::to_string).collect();
    validate_header(&header, path, idx + 1)?;

    let width = header.len();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); width];
    let mut padded = 0usize;
    for (idx, line) in lines {
        let line = line.map_err(|e| PlotError::io(path, e))?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() > width {
            return Err(PlotError::shape(
                path,
                idx + 1,
                format!("{} fields but header has {} columns", fields.len(), width),
            ));
        }
        if fields.len() < width {
            padded += 1;
        }
        for (col, values) in columns.iter_mut().enumerate() {
            let v = fields
                .get(col)
                .map_or(f64::NAN, |f| parse_field(f, missing_token));
            values.push(v);
        }
    }

    // Short rows are routine in sparse spike files.
    if padded > 0 && missing_token.is_none() {
        warn!(path = %path.display(), rows = padded, "short rows padded with NaN");
    }
    debug!(
        path = %path.display(),
        columns = width,
        rows = columns[0].len(),
        padded,
        "table loaded"
    );
    Ok(TraceTable { header, columns })
}

fn parse_field(field: &str, missing_token: Option<&str>) -> f64 {
    if missing_token == Some(field) {
        return f64::NAN;
    }
    field.parse::<f64>().unwrap_or(f64::NAN)
}

fn validate_header(header: &[String], path: &Path, line: usize) -> Result<()> {
    if header.is_empty() {
        return Err(PlotError::shape(path, line, "empty header line"));
    }
    for (i, name) in header.iter().enumerate() {
        if header[..i].contains(name) {
            return Err(PlotError::shape(
                PathBuf::from(path),
                line,
                format!("duplicate column name {name:?}"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<TraceTable> {
        TraceTable::read_from(text.as_bytes(), Path::new("test.asc"))
    }

    #[test]
    fn unparsable_fields_become_nan() {
        let t = parse("t v\n0 1\n1 abc\n").unwrap();
        let v = t.column("v").unwrap();
        assert_eq!(v[0], 1.0);
        assert!(v[1].is_nan());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let t = parse("t v\n0 1\n\n   \n1 2\n").unwrap();
        assert_eq!(t.n_rows(), 2);
    }

    #[test]
    fn range_ignores_nan() {
        let t = parse("t v\n0 nan\n1 -3\n2 5\n").unwrap();
        assert_eq!(t.value_range("v"), Some((-3.0, 5.0)));
        assert_eq!(t.time_range(), Some((0.0, 2.0)));
    }

    #[test]
    fn duplicate_header_rejected() {
        let err = parse("t v v\n0 1 2\n").unwrap_err();
        assert!(matches!(err, PlotError::Shape { line: 1, .. }));
    }
}
