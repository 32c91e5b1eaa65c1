use std::path::PathBuf;

use tabstat_model::SummaryRecord;

/// Outcome of one configuration run.
#[derive(Debug)]
pub struct BatchResult {
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
    /// Entries skipped at load time first, then processed specs in document order.
    pub datasets: Vec<DatasetOutcome>,
}

impl BatchResult {
    pub fn processed_count(&self) -> usize {
        self.datasets.iter().filter(|d| d.is_processed()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.datasets.len() - self.processed_count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetStatus {
    Processed,
    Skipped { reason: String },
}

#[derive(Debug)]
pub struct DatasetOutcome {
    pub key: String,
    pub file_name: Option<String>,
    pub status: DatasetStatus,
    /// Data rows in the source file.
    pub rows_read: usize,
    /// Rows left after applying the line limit.
    pub rows_considered: usize,
    /// Configured columns left after exclusion filtering.
    pub columns_selected: usize,
    /// Selected columns found in the file header.
    pub columns_resolved: usize,
    /// Cells that did not yield a value, across all selected columns.
    pub values_skipped: usize,
    /// Statistics of the raw (never normalized) values.
    pub summaries: Vec<SummaryRecord>,
    pub summary_path: Option<PathBuf>,
    pub transformed_path: Option<PathBuf>,
    /// Output failures that did not stop the dataset.
    pub errors: Vec<String>,
}

impl DatasetOutcome {
    pub fn new(key: impl Into<String>, file_name: Option<String>) -> Self {
        Self {
            key: key.into(),
            file_name,
            status: DatasetStatus::Processed,
            rows_read: 0,
            rows_considered: 0,
            columns_selected: 0,
            columns_resolved: 0,
            values_skipped: 0,
            summaries: Vec::new(),
            summary_path: None,
            transformed_path: None,
            errors: Vec::new(),
        }
    }

    pub fn skipped(key: impl Into<String>, file_name: Option<String>, reason: String) -> Self {
        Self {
            status: DatasetStatus::Skipped { reason },
            ..Self::new(key, file_name)
        }
    }

    pub fn is_processed(&self) -> bool {
        self.status == DatasetStatus::Processed
    }
}
