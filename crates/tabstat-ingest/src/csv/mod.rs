//! Delimited file reading.

mod reader;

pub use reader::{DELIMITER, read_table, split_fields};
