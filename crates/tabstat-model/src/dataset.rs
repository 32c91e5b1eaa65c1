use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Processing instructions for a single source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSpec {
    /// Key of the configuration entry this spec was loaded from.
    pub key: String,
    /// File name relative to the data directory.
    pub file_name: String,
    /// Maximum number of data rows to consider. Non-positive means all rows.
    pub line_limit: i64,
    /// Configured column names. Order is significant and duplicates are kept.
    pub columns: Vec<String>,
    /// Substrings that drop a configured column when it contains any of them.
    pub exclude_terms: BTreeSet<String>,
    /// Whether a min-max normalized copy of the data is written.
    pub normalize: bool,
}

impl DatasetSpec {
    /// Creates a spec with no exclusions and normalization disabled.
    pub fn new(
        key: impl Into<String>,
        file_name: impl Into<String>,
        line_limit: i64,
        columns: Vec<String>,
    ) -> Self {
        Self {
            key: key.into(),
            file_name: file_name.into(),
            line_limit,
            columns,
            exclude_terms: BTreeSet::new(),
            normalize: false,
        }
    }

    #[must_use]
    pub fn with_exclude_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_terms = terms.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Row limit as a count, or `None` when every row is considered.
    pub fn row_limit(&self) -> Option<usize> {
        if self.line_limit > 0 {
            usize::try_from(self.line_limit).ok()
        } else {
            None
        }
    }
}
