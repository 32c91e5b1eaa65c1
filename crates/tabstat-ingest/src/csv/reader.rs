//! Line-oriented reader for comma-delimited files.
//!
//! Fields are split naively on [`DELIMITER`]. Quoting and escaping are not
//! recognised, so a quoted field containing a comma becomes two fields.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tabstat_model::Table;

use crate::error::{IngestError, Result};

/// Field separator for input files.
pub const DELIMITER: char = ',';

/// Splits one line into text fields.
///
/// A trailing carriage return is removed. An empty line yields no fields.
pub fn split_fields(line: &str) -> Vec<String> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.is_empty() {
        return Vec::new();
    }
    line.split(DELIMITER).map(str::to_string).collect()
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Reads a delimited file. The first line is the header.
pub fn read_table(path: &Path) -> Result<Table> {
    let reader = BufReader::new(open(path)?);
    let mut lines = reader.lines();

    let Some(first) = lines.next() else {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    };
    let first = first.map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    // Skip BOM if present
    let header = split_fields(first.strip_prefix('\u{feff}').unwrap_or(&first));

    let mut rows = Vec::new();
    for line_result in lines {
        let line = line_result.map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        rows.push(split_fields(&line));
    }

    tracing::debug!(
        path = %path.display(),
        columns = header.len(),
        rows = rows.len(),
        "table read"
    );
    Ok(Table::new(header, rows))
}
