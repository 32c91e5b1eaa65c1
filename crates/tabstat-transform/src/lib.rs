//! Column-level processing for the tabstat pipeline.
//!
//! The stages run in this order for each dataset:
//!
//! 1. [`filter_columns`] drops configured names containing an excluded term
//! 2. [`resolve_columns`] maps the remaining names to header positions
//! 3. [`coerce_columns`] parses the selected cells into [`ColumnSeries`]
//! 4. [`summarize_all`] computes mean and population standard deviation
//! 5. [`normalize_all`] rescales each series into `[0, 1]` (optional)
//!
//! Summaries must be taken before normalization; normalization rewrites the
//! series in place.
//!
//! [`ColumnSeries`]: tabstat_model::ColumnSeries

pub mod coerce;
pub mod columns;
pub mod normalize;
pub mod stats;

pub use coerce::{CoercionIssue, coerce_columns, parse_cell};
pub use columns::{ResolvedColumn, filter_columns, header_index, resolve_columns};
pub use normalize::{min_max, normalize_all, normalize_values};
pub use stats::{mean_and_stddev, summarize, summarize_all};
