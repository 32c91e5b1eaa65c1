use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OutputError {
    /// Output file could not be created.
    #[error("unable to open {path} for writing: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to flush {path}: {source}")]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Header names and data columns differ in count.
    #[error("{path}: header has {header} names but {columns} data columns were given")]
    HeaderMismatch {
        path: PathBuf,
        header: usize,
        columns: usize,
    },

    /// A column's length differs from the first column's.
    #[error("{path}: column '{column}' has {actual} values, expected {expected}")]
    DataShape {
        path: PathBuf,
        column: String,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
