//! Integration tests for output file contents.

use std::fs;

use tabstat_model::{ColumnSeries, SummaryRecord};
use tabstat_report::{OutputPaths, write_columns, write_summary, write_transformed};

fn series(name: &str, values: &[f64]) -> ColumnSeries {
    ColumnSeries {
        name: name.to_string(),
        values: values.to_vec(),
        skipped_count: 0,
    }
}

#[test]
fn summary_file_layout() {
    let dir = tempfile::tempdir().unwrap();
    let paths = OutputPaths::for_file(dir.path(), "scores.csv");
    let records = vec![
        SummaryRecord {
            column_name: "a".to_string(),
            mean: 3.0,
            stddev: (35.0_f64 / 3.0 - 9.0).sqrt(),
            sample_count: 3,
        },
        SummaryRecord {
            column_name: "b".to_string(),
            mean: 4.0,
            stddev: (56.0_f64 / 3.0 - 16.0).sqrt(),
            sample_count: 3,
        },
    ];

    write_summary(&paths.summary, &records, 3).unwrap();

    let contents = fs::read_to_string(&paths.summary).unwrap();
    insta::assert_snapshot!(contents, @r"
    column_name,mean,stddev,param_count
    a,3.00,1.63,3
    b,4.00,1.63,3
    ");
}

#[test]
fn summary_with_no_records_has_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty_summary.csv");

    write_summary(&path, &[], 10).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "column_name,mean,stddev,param_count\n");
}

#[test]
fn transformed_file_is_row_major_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores_transformed.csv");

    let rows = write_transformed(
        &path,
        &[series("a", &[0.0, 0.5, 1.0]), series("b", &[0.0, 0.5, 1.0])],
    )
    .unwrap();

    assert_eq!(rows, 3);
    let contents = fs::read_to_string(&path).unwrap();
    insta::assert_snapshot!(contents, @r"
    a,b
    0.00,0.00
    0.50,0.50
    1.00,1.00
    ");
}

#[test]
fn columns_with_no_rows_write_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let header = vec!["x".to_string(), "y".to_string()];
    let columns: Vec<Vec<f64>> = vec![vec![], vec![]];

    let rows = write_columns(&path, &header, &columns).unwrap();

    assert_eq!(rows, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), "x,y\n");
}

#[test]
fn empty_series_are_left_out_of_transformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores_transformed.csv");

    let rows = write_transformed(
        &path,
        &[
            series("a", &[0.0, 1.0]),
            series("zzz", &[]),
            series("b", &[1.0, 0.0]),
        ],
    )
    .unwrap();

    assert_eq!(rows, 2);
    insta::assert_snapshot!(fs::read_to_string(&path).unwrap(), @r"
    a,b
    0.00,1.00
    1.00,0.00
    ");
}

#[test]
fn all_empty_series_keep_their_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank_transformed.csv");

    let rows = write_transformed(&path, &[series("a", &[]), series("b", &[])]).unwrap();

    assert_eq!(rows, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\n");
}

#[test]
fn ragged_non_empty_series_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ragged_transformed.csv");

    let err = write_transformed(&path, &[series("a", &[0.0, 1.0]), series("b", &[0.5])])
        .unwrap_err();

    assert!(matches!(err, tabstat_report::OutputError::DataShape { .. }));
    assert!(!path.exists());
}
