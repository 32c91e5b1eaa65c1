//! Input side of the tabstat pipeline.
//!
//! # Features
//!
//! - **Configuration**: parse the dataset configuration document into typed
//!   [`DatasetSpec`](tabstat_model::DatasetSpec) records, in document order
//! - **Table reading**: split a comma-delimited file into a header and rows
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tabstat_ingest::{load_config, read_table};
//!
//! let config = load_config(Path::new("json/parameters.json"))?;
//! for spec in &config.specs {
//!     let table = read_table(&Path::new("data").join(&spec.file_name))?;
//!     println!("{}: {} rows", spec.key, table.row_count());
//! }
//! ```

mod config;
mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === Configuration ===
pub use config::{ConfigEntry, LoadedConfig, SkippedEntry, load_config, parse_config};

// === Table Reading ===
pub use csv::{DELIMITER, read_table, split_fields};
