//! Text to number coercion.
//!
//! Bad cells are skipped and reported through `tracing`; they never become
//! zeros. A series can therefore be shorter than the number of rows read.

use thiserror::Error;
use tracing::warn;

use tabstat_model::ColumnSeries;

use crate::columns::ResolvedColumn;

/// Why a cell did not produce a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionIssue {
    #[error("could not convert \"{value}\" to a number")]
    NotNumeric { value: String },

    #[error("value \"{value}\" is out of range")]
    OutOfRange { value: String },

    #[error("row has no field at position {index}")]
    MissingCell { index: usize },
}

/// Parses one cell as a decimal floating point number.
///
/// Surrounding whitespace is ignored. Values too large or too small to
/// represent are rejected rather than saturated to infinity or zero.
pub fn parse_cell(text: &str) -> Result<f64, CoercionIssue> {
    let trimmed = text.trim();
    let value: f64 = trimmed.parse().map_err(|_| CoercionIssue::NotNumeric {
        value: text.to_string(),
    })?;
    if (value.is_infinite() && !is_infinity_literal(trimmed))
        || (value == 0.0 && has_nonzero_mantissa(trimmed))
    {
        return Err(CoercionIssue::OutOfRange {
            value: text.to_string(),
        });
    }
    Ok(value)
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn has_nonzero_mantissa(text: &str) -> bool {
    let mantissa = text.split(['e', 'E']).next().unwrap_or(text);
    mantissa.chars().any(|ch| matches!(ch, '1'..='9'))
}

/// Builds one series per column from the given rows.
///
/// Unresolved columns produce an empty series and a single warning naming
/// how many rows lacked them. `dataset` is only used for diagnostics.
pub fn coerce_columns(
    dataset: &str,
    rows: &[Vec<String>],
    columns: &[ResolvedColumn],
) -> Vec<ColumnSeries> {
    columns
        .iter()
        .map(|column| coerce_column(dataset, rows, column))
        .collect()
}

fn coerce_column(dataset: &str, rows: &[Vec<String>], column: &ResolvedColumn) -> ColumnSeries {
    let mut series = ColumnSeries::new(column.name.clone());
    let Some(index) = column.index else {
        if !rows.is_empty() {
            warn!(
                dataset,
                column = %column.name,
                rows = rows.len(),
                "column not found in header, skipping column"
            );
        }
        series.skipped_count = rows.len();
        return series;
    };

    series.values.reserve(rows.len());
    for (row_number, row) in rows.iter().enumerate() {
        let result = match row.get(index) {
            Some(cell) => parse_cell(cell),
            None => Err(CoercionIssue::MissingCell { index }),
        };
        match result {
            Ok(value) => series.values.push(value),
            Err(issue) => {
                warn!(
                    dataset,
                    column = %column.name,
                    row = row_number + 1,
                    %issue,
                    "skipping value"
                );
                series.skipped_count += 1;
            }
        }
    }
    series
}
