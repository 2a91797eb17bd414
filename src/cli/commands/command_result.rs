use std::path::PathBuf;

use crate::{
    cli::args::OutputFormat,
    core::{AnalysisBundle, AnalysisOptions, CategoryCount},
    dataset::ColumnInfo,
};

#[derive(Debug)]
pub enum CommandSummary {
    Analyze(AnalyzeSummary),
    Columns(ColumnsSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct AnalyzeSummary {
    pub file: PathBuf,
    pub row_count: usize,
    pub options: AnalysisOptions,
    pub format: OutputFormat,
    /// Record counts per category, when a category column was chosen.
    pub breakdown: Option<Vec<CategoryCount>>,
    /// All-data bundle first, then categories in first-seen order.
    pub bundles: Vec<AnalysisBundle>,
    /// Files written by `--export-dir`.
    pub exported: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct ColumnsSummary {
    pub file: PathBuf,
    pub row_count: usize,
    pub columns: Vec<ColumnInfo>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running csvcloud commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Slices that produced no analysis, or 1 when a file has no text column.
    /// Any error makes the process exit with code 1.
    pub error_count: usize,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, error_count: usize) -> Self {
        Self {
            summary,
            error_count,
        }
    }
}
