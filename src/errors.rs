//! Error types for the analysis core and dataset loading.
//!
//! The CLI and MCP layers wrap these in `anyhow` with context; the core
//! returns them as plain values so callers decide how to present them.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Why a slice produced no analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// No record matched the slice.
    NoRecords,
    /// Records matched, but nothing survived normalization.
    NoTokens,
}

impl std::fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmptyReason::NoRecords => write!(f, "no records"),
            EmptyReason::NoTokens => write!(f, "no tokens remain after cleaning"),
        }
    }
}

/// Error type for the normalization and aggregation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("slice '{slice}' is empty: {reason}")]
    EmptyResult { slice: String, reason: EmptyReason },
    #[error("no text columns found in the dataset")]
    NoTextColumns,
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("column '{column}' not found (available: {})", available.join(", "))]
    UnknownColumn {
        column: String,
        available: Vec<String>,
    },
}

impl AnalysisError {
    /// True for per-slice outcomes that must not abort sibling slices.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AnalysisError::EmptyResult { .. })
    }
}

/// Error type for reading a dataset from disk.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open '{}': {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("failed to read CSV '{}': {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },
    #[error(transparent)]
    Parse(#[from] csv::Error),
}
