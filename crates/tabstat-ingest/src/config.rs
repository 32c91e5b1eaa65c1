//! Dataset configuration loading.
//!
//! The document is an object keyed by dataset:
//!
//! ```json
//! {
//!   "weather.csv": {
//!     "file_name": "weather.csv",
//!     "lines_to_read": 100,
//!     "columns": ["temp", "humidity"],
//!     "other_parameters": { "do_not_include": ["id"], "normalize": true }
//!   }
//! }
//! ```
//!
//! Entries are returned in document order. A broken entry is reported in
//! [`LoadedConfig::skipped`] and does not affect the others.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use tabstat_model::DatasetSpec;

use crate::error::{IngestError, Result};

#[derive(Debug, Deserialize)]
struct RawEntry {
    file_name: String,
    lines_to_read: i64,
    columns: Vec<String>,
    #[serde(default)]
    other_parameters: Option<OtherParameters>,
}

#[derive(Debug, Default, Deserialize)]
struct OtherParameters {
    #[serde(default)]
    do_not_include: Vec<String>,
    #[serde(default)]
    normalize: bool,
}

/// Configuration entry that could not be turned into a spec.
#[derive(Debug)]
pub struct SkippedEntry {
    /// Zero-based position of the entry in the document.
    pub position: usize,
    pub key: String,
    pub error: IngestError,
}

/// Result of loading a configuration document.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    /// Specs in document order.
    pub specs: Vec<DatasetSpec>,
    /// Skipped entries in document order.
    pub skipped: Vec<SkippedEntry>,
}

/// One configuration entry, either usable or skipped.
#[derive(Debug)]
pub enum ConfigEntry {
    Dataset(DatasetSpec),
    Skipped(SkippedEntry),
}

impl LoadedConfig {
    pub fn entry_count(&self) -> usize {
        self.specs.len() + self.skipped.len()
    }

    /// Consumes the configuration, yielding specs and skipped entries
    /// interleaved in document order.
    pub fn into_entries(self) -> Vec<ConfigEntry> {
        let total = self.entry_count();
        let mut specs = self.specs.into_iter();
        let mut skipped = self.skipped.into_iter().peekable();
        let mut entries = Vec::with_capacity(total);
        for position in 0..total {
            if let Some(entry) = skipped.next_if(|e| e.position == position) {
                entries.push(ConfigEntry::Skipped(entry));
            } else if let Some(spec) = specs.next() {
                entries.push(ConfigEntry::Dataset(spec));
            }
        }
        entries
    }
}

/// Reads and parses the configuration document at `path`.
///
/// # Errors
///
/// Fails only when the document cannot be read, is not JSON, or is not an
/// object. Problems with individual entries are collected instead.
pub fn load_config(path: &Path) -> Result<LoadedConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config(&contents, path)
}

/// Parses configuration text. `origin` is only used in error messages.
pub fn parse_config(contents: &str, origin: &Path) -> Result<LoadedConfig> {
    let document: Value =
        serde_json::from_str(contents).map_err(|e| IngestError::ConfigParse {
            path: origin.to_path_buf(),
            source: e,
        })?;
    let Value::Object(entries) = document else {
        return Err(IngestError::ConfigNotAnObject {
            path: origin.to_path_buf(),
        });
    };

    let mut config = LoadedConfig::default();
    for (position, (key, value)) in entries.into_iter().enumerate() {
        match parse_entry(&key, value) {
            Ok(spec) => config.specs.push(spec),
            Err(error) => {
                warn!(dataset = %key, %error, "skipping configuration entry");
                config.skipped.push(SkippedEntry {
                    position,
                    key,
                    error,
                });
            }
        }
    }
    Ok(config)
}

fn parse_entry(key: &str, value: Value) -> Result<DatasetSpec> {
    if value.get("columns").filter(|v| !v.is_null()).is_none() {
        return Err(IngestError::MissingColumns {
            key: key.to_string(),
        });
    }
    let raw: RawEntry = serde_json::from_value(value).map_err(|e| IngestError::InvalidEntry {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    let other = raw.other_parameters.unwrap_or_default();

    Ok(DatasetSpec::new(key, raw.file_name, raw.lines_to_read, raw.columns)
        .with_exclude_terms(other.do_not_include)
        .with_normalize(other.normalize))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> Result<LoadedConfig> {
        parse_config(contents, Path::new("parameters.json"))
    }

    #[test]
    fn parses_full_entry() {
        let config = parse(
            r#"{
                "weather": {
                    "file_name": "weather.csv",
                    "lines_to_read": 10,
                    "columns": ["temp", "humidity", "temp"],
                    "other_parameters": {
                        "do_not_include": ["hum"],
                        "normalize": true
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.specs.len(), 1);
        let spec = &config.specs[0];
        assert_eq!(spec.key, "weather");
        assert_eq!(spec.file_name, "weather.csv");
        assert_eq!(spec.line_limit, 10);
        assert_eq!(spec.columns, vec!["temp", "humidity", "temp"]);
        assert!(spec.exclude_terms.contains("hum"));
        assert!(spec.normalize);
    }

    #[test]
    fn optional_parameters_default() {
        let config = parse(
            r#"{
                "a": { "file_name": "a.csv", "lines_to_read": 1, "columns": ["x"] },
                "b": { "file_name": "b.csv", "lines_to_read": 1, "columns": ["x"],
                       "other_parameters": {} }
            }"#,
        )
        .unwrap();

        for spec in &config.specs {
            assert!(spec.exclude_terms.is_empty());
            assert!(!spec.normalize);
        }
    }

    #[test]
    fn keeps_document_order() {
        let config = parse(
            r#"{
                "zeta": { "file_name": "z.csv", "lines_to_read": 1, "columns": [] },
                "alpha": { "file_name": "a.csv", "lines_to_read": 1, "columns": [] },
                "mid": { "file_name": "m.csv", "lines_to_read": 1, "columns": [] }
            }"#,
        )
        .unwrap();

        let keys: Vec<&str> = config.specs.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn entry_without_columns_is_skipped() {
        let config = parse(
            r#"{
                "broken": { "file_name": "x.csv", "lines_to_read": 1 },
                "ok": { "file_name": "y.csv", "lines_to_read": 1, "columns": ["a"] }
            }"#,
        )
        .unwrap();

        assert_eq!(config.specs.len(), 1);
        assert_eq!(config.specs[0].key, "ok");
        assert_eq!(config.skipped.len(), 1);
        assert!(matches!(
            config.skipped[0].error,
            IngestError::MissingColumns { .. }
        ));
        assert_eq!(config.entry_count(), 2);
    }

    #[test]
    fn mistyped_entry_is_skipped() {
        let config = parse(
            r#"{
                "bad": { "file_name": "x.csv", "lines_to_read": "ten", "columns": ["a"] }
            }"#,
        )
        .unwrap();

        assert!(config.specs.is_empty());
        assert!(matches!(
            config.skipped[0].error,
            IngestError::InvalidEntry { .. }
        ));
    }

    #[test]
    fn malformed_document_is_fatal() {
        let err = parse("{ not json").unwrap_err();
        assert!(matches!(err, IngestError::ConfigParse { .. }));

        let err = parse("[1, 2]").unwrap_err();
        assert!(matches!(err, IngestError::ConfigNotAnObject { .. }));
    }

    #[test]
    fn null_columns_count_as_missing() {
        let config = parse(
            r#"{ "nulls": { "file_name": "x.csv", "lines_to_read": 3, "columns": null } }"#,
        )
        .unwrap();

        assert!(matches!(
            config.skipped[0].error,
            IngestError::MissingColumns { .. }
        ));
    }

    #[test]
    fn entries_keep_document_order() {
        let config = parse(
            r#"{
                "first": { "file_name": "a.csv", "lines_to_read": 1, "columns": ["a"] },
                "second": { "file_name": "b.csv", "lines_to_read": 1 },
                "third": { "file_name": "c.csv", "lines_to_read": 1, "columns": ["c"] },
                "fourth": { "file_name": "d.csv", "lines_to_read": "x", "columns": ["d"] }
            }"#,
        )
        .unwrap();

        assert_eq!(config.skipped[0].position, 1);
        assert_eq!(config.skipped[1].position, 3);
        let entries = config.into_entries();
        let keys: Vec<&str> = entries
            .iter()
            .map(|entry| match entry {
                ConfigEntry::Dataset(spec) => spec.key.as_str(),
                ConfigEntry::Skipped(skipped) => skipped.key.as_str(),
            })
            .collect();
        assert_eq!(keys, vec!["first", "second", "third", "fourth"]);
    }
}
