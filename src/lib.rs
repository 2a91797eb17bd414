//! csvcloud - word frequencies for the text columns of CSV files
//!
//! csvcloud is a CLI tool and library that cleans a text column of a CSV file
//! (lowercasing, stripping non-letters, removing Indonesian stopwords and short
//! words), counts the remaining words and ranks them, for the whole file and
//! separately for each value of an optional category column.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reports)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core analysis engine (normalize, count, partition)
//! - `dataset`: CSV loading and column typing
//! - `errors`: Error types of the analysis and loading layers
//! - `export`: Frequency table CSV export
//! - `mcp`: Model Context Protocol server implementation
//! - `summary`: Serializable view of analysis results
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod dataset;
pub mod errors;
pub mod export;
pub mod mcp;
pub mod summary;
pub mod utils;
