//! Summary statistics.

use tabstat_model::{ColumnSeries, SummaryRecord};

/// Returns the mean and population standard deviation of `values`.
///
/// The deviation is `sqrt(sum(x^2) / n - mean^2)`, with the radicand
/// floored at zero since rounding can push it slightly negative for
/// constant data. An empty slice yields `(0.0, 0.0)`.
pub fn mean_and_stddev(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sq_sum: f64 = values.iter().map(|v| v * v).sum();
    let stddev = (sq_sum / n - mean * mean).max(0.0).sqrt();
    (mean, stddev)
}

/// Summarizes a series, or returns `None` when it holds no values.
pub fn summarize(series: &ColumnSeries) -> Option<SummaryRecord> {
    if series.is_empty() {
        return None;
    }
    let (mean, stddev) = mean_and_stddev(&series.values);
    Some(SummaryRecord {
        column_name: series.name.clone(),
        mean,
        stddev,
        sample_count: series.len(),
    })
}

/// Summarizes every non-empty series, keeping series order.
pub fn summarize_all(series: &[ColumnSeries]) -> Vec<SummaryRecord> {
    series.iter().filter_map(summarize).collect()
}
