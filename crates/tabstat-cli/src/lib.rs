//! Library components of the tabstat command line tool.

pub mod logging;
pub mod pipeline;
pub mod types;
