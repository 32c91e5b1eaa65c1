//! Shared data types for the tabstat pipeline.
//!
//! One [`DatasetSpec`] is loaded per configuration entry. Its source file is
//! read into a [`Table`], the selected columns are coerced into
//! [`ColumnSeries`], and each non-empty series produces a [`SummaryRecord`].

pub mod dataset;
pub mod series;
pub mod table;

pub use dataset::DatasetSpec;
pub use series::{ColumnSeries, SummaryRecord};
pub use table::Table;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_record_serializes() {
        let record = SummaryRecord {
            column_name: "a".to_string(),
            mean: 3.0,
            stddev: 1.5,
            sample_count: 3,
        };
        let json = serde_json::to_string(&record).expect("serialize summary");
        let round: SummaryRecord = serde_json::from_str(&json).expect("deserialize summary");
        assert_eq!(round, record);
    }
}
