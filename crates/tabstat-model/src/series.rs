use serde::{Deserialize, Serialize};

/// Numeric values coerced from one configured column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnSeries {
    pub name: String,
    pub values: Vec<f64>,
    /// Cells that could not be turned into a value.
    pub skipped_count: usize,
}

impl ColumnSeries {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            skipped_count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Mean and population standard deviation of a raw column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub column_name: String,
    pub mean: f64,
    pub stddev: f64,
    pub sample_count: usize,
}
