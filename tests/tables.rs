use std::io::Write;
use std::path::Path;

use cpgplot::{PlotError, SpikeTable, TraceTable};
use proptest::prelude::*;

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn loads_trace_fixture() {
    let t = TraceTable::load(fixture("run_Euler_0.0100.asc")).unwrap();
    assert_eq!(t.header(), ["t", "SO", "IsynSO", "N1M", "c"]);
    assert_eq!(t.n_rows(), 8);
    assert_eq!(t.time()[1], 0.04);
    assert_eq!(t.value_range("SO"), Some((-61.0, 25.0)));
}

#[test]
fn loads_spike_fixture() {
    let s = SpikeTable::load(fixture("run_spikes_Euler_0.0100.asc")).unwrap();
    assert_eq!(s.no_spike_value, -50.0);
    assert_eq!(s.table.n_rows(), 3);
    assert_eq!(s.events("SO").unwrap(), vec![[0.12, 25.0]]);
    assert_eq!(s.events("N1M").unwrap(), vec![[0.20, 30.0]]);
    assert!(s.events("c").unwrap().is_empty());
}

#[test]
fn missing_file_is_io_error() {
    let err = TraceTable::load("definitely/not/here.asc").unwrap_err();
    assert!(matches!(err, PlotError::Io { .. }));
    let err = SpikeTable::load("definitely/not/here.asc").unwrap_err();
    assert!(matches!(err, PlotError::Io { .. }));
}

#[test]
fn too_many_fields_is_shape_error_with_line_number() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "t v1").unwrap();
    writeln!(f, "0 1").unwrap();
    writeln!(f, "1 2 3").unwrap();
    let err = TraceTable::load(f.path()).unwrap_err();
    assert!(matches!(err, PlotError::Shape { line: 3, .. }), "{err:?}");
}

#[test]
fn short_rows_are_padded_with_nan() {
    let t = TraceTable::read_from("t a b\n0 1\n1 2 3\n".as_bytes(), Path::new("x")).unwrap();
    assert!(t.column("b").unwrap()[0].is_nan());
    assert_eq!(t.column("b").unwrap()[1], 3.0);
}

#[test]
fn empty_file_has_no_header() {
    let err = TraceTable::read_from("".as_bytes(), Path::new("x")).unwrap_err();
    assert!(matches!(err, PlotError::Shape { line: 1, .. }));
}

#[test]
fn from_columns_checks_lengths() {
    let err = TraceTable::from_columns(
        vec!["t".into(), "v".into()],
        vec![vec![0.0, 1.0], vec![1.0]],
    )
    .unwrap_err();
    assert!(matches!(err, PlotError::Shape { .. }));
}

#[test]
fn written_table_reads_back_with_nan() {
    let t = TraceTable::from_columns(
        vec!["t".into(), "v".into()],
        vec![vec![0.0, 0.5], vec![f64::NAN, -1.25e-7]],
    )
    .unwrap();
    let mut buf = Vec::new();
    t.write_to(&mut buf).unwrap();
    let back = TraceTable::read_from(buf.as_slice(), Path::new("mem")).unwrap();
    assert!(back.column("v").unwrap()[0].is_nan());
    assert_eq!(back.column("v").unwrap()[1], -1.25e-7);
}

proptest! {
    #[test]
    fn round_trip_through_disk(
        rows in proptest::collection::vec((-1e6f64..1e6, -1e3f64..1e3), 1..40)
    ) {
        let t = TraceTable::from_columns(
            vec!["t".into(), "v1".into()],
            vec![
                rows.iter().map(|r| r.0).collect(),
                rows.iter().map(|r| r.1).collect(),
            ],
        )
        .unwrap();
        let f = tempfile::NamedTempFile::new().unwrap();
        t.write_to(std::io::BufWriter::new(f.reopen().unwrap())).unwrap();
        let back = TraceTable::load(f.path()).unwrap();
        prop_assert_eq!(back, t);
    }
}
