use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::summary::BundleSummary;

/// Default number of ranked entries returned per bundle.
pub const DEFAULT_ENTRY_LIMIT: usize = 20;

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListColumnsParams {
    /// Path to the CSV file
    pub csv_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeCsvParams {
    /// Path to the CSV file
    pub csv_path: String,
    /// Text column to analyse. Defaults to the first text column.
    pub text_column: Option<String>,
    /// Category column for per-category analyses
    pub category_column: Option<String>,
    /// Word-cloud budget, 20 to 200
    pub max_words: Option<u32>,
    /// Ranked entries per bundle, 1 to 200 (default 20)
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Directory to start the config file search from
    pub project_root_path: String,
}

// ============================================================
// Columns Types (list_columns)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnsResult {
    pub row_count: usize,
    pub columns: Vec<ColumnDto>,
    /// Names of the columns that can be analysed, in file order
    pub text_columns: Vec<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDto {
    pub name: String,
    pub is_text: bool,
    pub missing_count: usize,
}

impl From<crate::dataset::ColumnInfo> for ColumnDto {
    fn from(c: crate::dataset::ColumnInfo) -> Self {
        Self {
            name: c.name,
            is_text: c.is_text,
            missing_count: c.missing_count,
        }
    }
}

// ============================================================
// Analysis Types (analyze_csv)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeCsvResult {
    pub row_count: usize,
    pub text_column: String,
    pub category_column: Option<String>,
    pub max_words: u32,
    /// All-data bundle first, then one per category value
    pub bundles: Vec<BundleSummary>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub text_column: Option<String>,
    pub category_column: Option<String>,
    pub max_words: u32,
    pub table_limit: usize,
    pub extra_stopwords: Vec<String>,
    pub export_dir: Option<String>,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            text_column: c.text_column,
            category_column: c.category_column,
            max_words: c.max_words,
            table_limit: c.table_limit,
            extra_stopwords: c.extra_stopwords,
            export_dir: c.export_dir,
        }
    }
}
