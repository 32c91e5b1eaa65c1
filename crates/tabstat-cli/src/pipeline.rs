//! Batch processing pipeline with explicit stages.
//!
//! Each dataset spec goes through these stages in order:
//! 1. **Read**: load the source file into a table
//! 2. **Resolve**: filter configured columns, map them to header positions,
//!    apply the line limit
//! 3. **Coerce**: parse selected cells into numeric series
//! 4. **Summarize**: compute statistics on the raw series and write the
//!    summary file
//! 5. **Normalize**: optionally rescale the series and write the transformed file
//!
//! A failure in one dataset is logged and recorded in its
//! [`DatasetOutcome`]; the remaining datasets are still processed.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, error, info, info_span};

use tabstat_ingest::{ConfigEntry, load_config, read_table};
use tabstat_model::{ColumnSeries, DatasetSpec, SummaryRecord, Table};
use tabstat_report::{OutputPaths, write_summary, write_transformed};
use tabstat_transform::{
    ResolvedColumn, coerce_columns, filter_columns, normalize_all, resolve_columns, summarize_all,
};

use crate::types::{BatchResult, DatasetOutcome};

/// Loads the configuration document and processes every dataset in it.
///
/// # Errors
///
/// Only an unreadable or unparseable configuration document is an error.
pub fn run_batch(data_dir: &Path, config_path: &Path) -> Result<BatchResult> {
    println!("Data Directory Specified: {}", data_dir.display());
    println!("Location of JSON File Specified: {}", config_path.display());

    let config = load_config(config_path)
        .with_context(|| format!("unable to load configuration {}", config_path.display()))?;
    info!(
        entries = config.entry_count(),
        skipped = config.skipped.len(),
        "configuration loaded"
    );

    let datasets = config
        .into_entries()
        .into_iter()
        .map(|entry| match entry {
            ConfigEntry::Dataset(spec) => process_dataset(data_dir, &spec),
            ConfigEntry::Skipped(skipped) => {
                DatasetOutcome::skipped(skipped.key, None, skipped.error.to_string())
            }
        })
        .collect();

    Ok(BatchResult {
        data_dir: data_dir.to_path_buf(),
        config_path: config_path.to_path_buf(),
        datasets,
    })
}

/// Runs every stage for a single dataset.
pub fn process_dataset(data_dir: &Path, spec: &DatasetSpec) -> DatasetOutcome {
    let dataset_span = info_span!(
        "dataset",
        key = %spec.key,
        file = %spec.file_name
    );
    let _dataset_guard = dataset_span.enter();
    let dataset_start = Instant::now();

    let source = data_dir.join(&spec.file_name);
    println!(
        "Processing file: {} with {} lines.",
        source.display(),
        spec.line_limit
    );

    // =========================================================================
    // Stage 1: Read
    // =========================================================================
    let mut table = match read_table(&source) {
        Ok(table) => table,
        Err(error) => {
            error!(%error, "skipping dataset");
            return DatasetOutcome::skipped(
                spec.key.clone(),
                Some(spec.file_name.clone()),
                error.to_string(),
            );
        }
    };
    let mut outcome = DatasetOutcome::new(spec.key.clone(), Some(spec.file_name.clone()));
    outcome.rows_read = table.row_count();

    // =========================================================================
    // Stage 2: Resolve
    // =========================================================================
    let resolved = resolve_stage(spec, &mut table);
    outcome.rows_considered = table.row_count();
    outcome.columns_selected = resolved.len();
    outcome.columns_resolved = resolved.iter().filter(|c| c.is_resolved()).count();

    // =========================================================================
    // Stage 3: Coerce
    // =========================================================================
    let start = Instant::now();
    let mut series = coerce_columns(&spec.key, &table.rows, &resolved);
    drop(table);
    outcome.values_skipped = series.iter().map(|s| s.skipped_count).sum();
    debug!(
        columns = series.len(),
        skipped = outcome.values_skipped,
        duration_ms = start.elapsed().as_millis(),
        "coercion complete"
    );

    // =========================================================================
    // Stage 4: Summarize (raw values only)
    // =========================================================================
    let paths = OutputPaths::for_file(data_dir, &spec.file_name);
    let summaries = summarize_all(&series);
    match write_summary(&paths.summary, &summaries, spec.line_limit) {
        Ok(()) => {
            println!("Summary statistics written to: {}", paths.summary.display());
            outcome.summary_path = Some(paths.summary.clone());
        }
        Err(error) => {
            error!(%error, "summary not written");
            outcome.errors.push(error.to_string());
        }
    }
    print_statistics(&summaries);

    // =========================================================================
    // Stage 5: Normalize
    // =========================================================================
    if spec.normalize {
        normalize_stage(&mut series, &paths, &mut outcome);
    }

    outcome.summaries = summaries;
    info!(
        rows = outcome.rows_considered,
        columns = outcome.columns_resolved,
        duration_ms = dataset_start.elapsed().as_millis(),
        "dataset complete"
    );
    outcome
}

fn resolve_stage(spec: &DatasetSpec, table: &mut Table) -> Vec<ResolvedColumn> {
    let selected = filter_columns(&spec.columns, &spec.exclude_terms);
    let excluded = spec.columns.len() - selected.len();
    if excluded > 0 {
        debug!(excluded, "columns excluded by filter");
    }
    let resolved = resolve_columns(&selected, &table.header);
    let dropped = table.truncate_rows(spec.row_limit());
    debug!(rows = table.row_count(), dropped, "rows limited");
    resolved
}

fn normalize_stage(
    series: &mut [ColumnSeries],
    paths: &OutputPaths,
    outcome: &mut DatasetOutcome,
) {
    normalize_all(series);
    match write_transformed(&paths.transformed, series) {
        Ok(rows) => {
            println!(
                "Transformed data written to: {}",
                paths.transformed.display()
            );
            debug!(rows, "transformed file written");
            outcome.transformed_path = Some(paths.transformed.clone());
        }
        Err(error) => {
            error!(%error, "transformed data not written");
            outcome.errors.push(error.to_string());
        }
    }
}

fn print_statistics(summaries: &[SummaryRecord]) {
    for record in summaries {
        println!(
            "Column {}: Mean = {:.2}, StdDev = {:.2}",
            record.column_name, record.mean, record.stddev
        );
    }
}
