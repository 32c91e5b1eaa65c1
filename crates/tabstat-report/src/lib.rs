//! Output files for the tabstat pipeline.
//!
//! Each processed dataset writes `<basename>_summary.csv` and, when
//! normalization is requested, `<basename>_transformed.csv` next to its
//! source file.

pub mod error;
pub mod paths;
pub mod writer;

pub use error::{OutputError, Result};
pub use paths::{OutputPaths, SUMMARY_SUFFIX, TRANSFORMED_SUFFIX, output_stem};
pub use writer::{
    SUMMARY_HEADER, format_value, write_columns, write_summary, write_transformed,
};
