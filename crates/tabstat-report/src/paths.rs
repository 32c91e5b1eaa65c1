//! Output file naming.

use std::path::{Path, PathBuf};

pub const SUMMARY_SUFFIX: &str = "_summary.csv";
pub const TRANSFORMED_SUFFIX: &str = "_transformed.csv";

/// Base name used for output files: everything before the first `.csv`.
///
/// Names without `.csv` are used whole.
pub fn output_stem(file_name: &str) -> &str {
    match file_name.find(".csv") {
        Some(end) => &file_name[..end],
        None => file_name,
    }
}

/// Where a dataset's outputs are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub summary: PathBuf,
    pub transformed: PathBuf,
}

impl OutputPaths {
    pub fn for_file(data_dir: &Path, file_name: &str) -> Self {
        let stem = output_stem(file_name);
        Self {
            summary: data_dir.join(format!("{stem}{SUMMARY_SUFFIX}")),
            transformed: data_dir.join(format!("{stem}{TRANSFORMED_SUFFIX}")),
        }
    }
}
