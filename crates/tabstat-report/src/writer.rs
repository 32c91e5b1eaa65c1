//! CSV writers for summary and column-major numeric data.

use std::fs::File;
use std::path::Path;

use csv::{QuoteStyle, Writer, WriterBuilder};
use tracing::debug;

use tabstat_model::{ColumnSeries, SummaryRecord};

use crate::error::{OutputError, Result};

/// Header line of every summary file.
pub const SUMMARY_HEADER: [&str; 4] = ["column_name", "mean", "stddev", "param_count"];

/// Two-decimal fixed formatting used for all numeric output.
pub fn format_value(value: f64) -> String {
    format!("{value:.2}")
}

fn create(path: &Path) -> Result<Writer<File>> {
    WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_path(path)
        .map_err(|e| OutputError::Create {
            path: path.to_path_buf(),
            source: e,
        })
}

fn write_record<I, T>(writer: &mut Writer<File>, path: &Path, record: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    writer.write_record(record).map_err(|e| OutputError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

fn finish(mut writer: Writer<File>, path: &Path) -> Result<()> {
    writer.flush().map_err(|e| OutputError::Flush {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Writes a header followed by column-major data, one line per row.
///
/// Every column must have the same length as the first; otherwise nothing
/// is written and [`OutputError::DataShape`] is returned. Returns the number
/// of data rows written.
pub fn write_columns<C>(path: &Path, header: &[String], columns: &[C]) -> Result<usize>
where
    C: AsRef<[f64]>,
{
    if header.len() != columns.len() {
        return Err(OutputError::HeaderMismatch {
            path: path.to_path_buf(),
            header: header.len(),
            columns: columns.len(),
        });
    }
    let rows = columns.first().map_or(0, |c| c.as_ref().len());
    for (name, column) in header.iter().zip(columns) {
        let actual = column.as_ref().len();
        if actual != rows {
            return Err(OutputError::DataShape {
                path: path.to_path_buf(),
                column: name.clone(),
                expected: rows,
                actual,
            });
        }
    }

    let mut writer = create(path)?;
    write_record(&mut writer, path, header)?;
    for row in 0..rows {
        write_record(
            &mut writer,
            path,
            columns.iter().map(|c| format_value(c.as_ref()[row])),
        )?;
    }
    finish(writer, path)?;
    Ok(rows)
}

/// Writes normalized series, headed by their column names.
///
/// Series without values are left out as long as at least one series has
/// values, so an unresolved column does not block the others. Non-empty
/// series of different lengths still fail with [`OutputError::DataShape`].
pub fn write_transformed(path: &Path, series: &[ColumnSeries]) -> Result<usize> {
    let populated = series.iter().any(|s| !s.is_empty());
    let kept: Vec<&ColumnSeries> = series
        .iter()
        .filter(|s| !populated || !s.is_empty())
        .collect();
    for omitted in series.iter().filter(|s| populated && s.is_empty()) {
        debug!(column = %omitted.name, "empty column left out of transformed output");
    }

    let header: Vec<String> = kept.iter().map(|s| s.name.clone()).collect();
    let columns: Vec<&[f64]> = kept.iter().map(|s| s.values.as_slice()).collect();
    write_columns(path, &header, &columns)
}

/// Writes one summary line per record.
///
/// `param_count` is the configured line limit, repeated on every line.
pub fn write_summary(path: &Path, records: &[SummaryRecord], param_count: i64) -> Result<()> {
    let mut writer = create(path)?;
    write_record(&mut writer, path, SUMMARY_HEADER)?;
    let param_count = param_count.to_string();
    for record in records {
        let mean = format_value(record.mean);
        let stddev = format_value(record.stddev);
        write_record(
            &mut writer,
            path,
            [
                record.column_name.as_str(),
                mean.as_str(),
                stddev.as_str(),
                param_count.as_str(),
            ],
        )?;
    }
    finish(writer, path)
}
