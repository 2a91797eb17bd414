//! Partitioned analysis: normalize and count per category slice.
//!
//! One bundle is produced for the whole dataset and, when a category column is
//! chosen, one more per distinct category value in first-seen order. Slices are
//! independent and are processed in parallel; the output order does not depend
//! on scheduling.

use std::ops::RangeInclusive;

use indexmap::IndexSet;
use rayon::prelude::*;
use serde::Serialize;

use super::{
    frequency::{FrequencyTable, RankedEntries, TokenStats, aggregate, rank},
    normalize::{TokenSequence, normalize},
    stopwords::Stopwords,
};
use crate::{
    dataset::{Dataset, RawRecord},
    errors::{AnalysisError, EmptyReason},
    utils::{file_suffix, percent},
};

/// Recognized range for the word-cloud budget.
pub const MAX_WORDS_RANGE: RangeInclusive<u32> = 20..=200;

pub const DEFAULT_MAX_WORDS: u32 = 100;

/// How many ranked entries each bundle carries for tabular display and export.
pub const TABLE_LIMIT: usize = 200;

/// Label used for the whole-dataset slice.
pub const ALL_DATA_LABEL: &str = "All data";

/// Label used for the slice of records with no category value.
pub const MISSING_CATEGORY_LABEL: &str = "(missing)";

/// Caller-supplied settings for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub text_column: String,
    pub category_column: Option<String>,
    /// Cloud generation budget. Distinct from `table_limit`.
    pub max_words: u32,
    pub table_limit: usize,
}

impl AnalysisOptions {
    pub fn new(text_column: impl Into<String>) -> Self {
        Self {
            text_column: text_column.into(),
            category_column: None,
            max_words: DEFAULT_MAX_WORDS,
            table_limit: TABLE_LIMIT,
        }
    }

    pub fn with_category(mut self, category_column: impl Into<String>) -> Self {
        self.category_column = Some(category_column.into());
        self
    }

    pub fn with_max_words(mut self, max_words: u32) -> Self {
        self.max_words = max_words;
        self
    }

    pub fn with_table_limit(mut self, table_limit: usize) -> Self {
        self.table_limit = table_limit;
        self
    }

    /// Reject out-of-range settings. Values are never clamped.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        validate_max_words(self.max_words)?;
        if self.table_limit == 0 {
            return Err(AnalysisError::InvalidArgument(
                "table limit must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn validate_max_words(max_words: u32) -> Result<(), AnalysisError> {
    if !MAX_WORDS_RANGE.contains(&max_words) {
        return Err(AnalysisError::InvalidArgument(format!(
            "max_words must be between {} and {}, got {}",
            MAX_WORDS_RANGE.start(),
            MAX_WORDS_RANGE.end(),
            max_words
        )));
    }
    Ok(())
}

/// Which records a bundle covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum SliceKey {
    All,
    /// `None` is the missing category value.
    Category(Option<String>),
}

impl SliceKey {
    pub fn label(&self) -> &str {
        match self {
            SliceKey::All => ALL_DATA_LABEL,
            SliceKey::Category(Some(value)) => value,
            SliceKey::Category(None) => MISSING_CATEGORY_LABEL,
        }
    }

    /// Suffix for exported file names: empty for all data, `_<value>` otherwise.
    pub fn file_suffix(&self) -> String {
        match self {
            SliceKey::All => String::new(),
            SliceKey::Category(Some(value)) => file_suffix(value),
            SliceKey::Category(None) => file_suffix("missing"),
        }
    }
}

/// Everything computed for a slice that had tokens.
#[derive(Debug, Clone)]
pub struct SliceAnalysis {
    pub tokens: TokenSequence,
    pub table: FrequencyTable,
    /// Ranked entries capped at the table limit.
    pub top_entries: RankedEntries,
    /// Ranked entries capped at `max_words`.
    pub cloud_entries: RankedEntries,
    pub stats: TokenStats,
}

impl SliceAnalysis {
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

/// Result for one slice. Empty slices carry an [`AnalysisError::EmptyResult`].
#[derive(Debug, Clone)]
pub struct AnalysisBundle {
    pub slice: SliceKey,
    pub record_count: usize,
    pub outcome: Result<SliceAnalysis, AnalysisError>,
}

impl AnalysisBundle {
    pub fn analysis(&self) -> Option<&SliceAnalysis> {
        self.outcome.as_ref().ok()
    }

    pub fn empty_reason(&self) -> Option<EmptyReason> {
        match &self.outcome {
            Err(AnalysisError::EmptyResult { reason, .. }) => Some(*reason),
            _ => None,
        }
    }
}

/// Record count of one category value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub value: Option<String>,
    pub count: usize,
    pub percent: f64,
}

/// Run the full pipeline over `dataset`.
///
/// Whole-request problems (no text columns, unknown column, invalid options)
/// are returned as `Err`. Empty slices are reported inside their bundle and do
/// not stop the others.
pub fn analyze(
    dataset: &Dataset,
    options: &AnalysisOptions,
    stopwords: &Stopwords,
) -> Result<Vec<AnalysisBundle>, AnalysisError> {
    options.validate()?;
    dataset.require_text_columns()?;

    let text_index = dataset.column_index(&options.text_column)?;
    let category_index = options
        .category_column
        .as_deref()
        .map(|c| dataset.column_index(c))
        .transpose()?;

    let slices = build_slices(dataset, category_index);

    let bundles = slices
        .par_iter()
        .map(|(slice, records)| AnalysisBundle {
            slice: slice.clone(),
            record_count: records.len(),
            outcome: analyze_slice(slice, records, text_index, options, stopwords),
        })
        .collect();

    Ok(bundles)
}

/// Distinct values of a category column with their record counts.
pub fn category_breakdown(
    dataset: &Dataset,
    category_column: &str,
) -> Result<Vec<CategoryCount>, AnalysisError> {
    let index = dataset.column_index(category_column)?;
    let total = dataset.len();

    Ok(distinct_values(dataset, index)
        .into_iter()
        .map(|value| {
            let count = matching_records(dataset, index, value).len();
            CategoryCount {
                value: value.map(str::to_string),
                count,
                percent: percent(count, total),
            }
        })
        .collect())
}

fn build_slices(
    dataset: &Dataset,
    category_index: Option<usize>,
) -> Vec<(SliceKey, Vec<&RawRecord>)> {
    let mut slices: Vec<(SliceKey, Vec<&RawRecord>)> =
        vec![(SliceKey::All, dataset.records().iter().collect())];

    if let Some(index) = category_index {
        for value in distinct_values(dataset, index) {
            slices.push((
                SliceKey::Category(value.map(str::to_string)),
                matching_records(dataset, index, value),
            ));
        }
    }

    slices
}

fn distinct_values(dataset: &Dataset, index: usize) -> IndexSet<Option<&str>> {
    dataset.column_values(index).collect()
}

/// Records whose category equals `value`. A missing value equals nothing.
fn matching_records<'a>(
    dataset: &'a Dataset,
    index: usize,
    value: Option<&str>,
) -> Vec<&'a RawRecord> {
    let Some(value) = value else {
        return Vec::new();
    };
    dataset
        .records()
        .iter()
        .filter(|r| r.get(index) == Some(value))
        .collect()
}

fn analyze_slice(
    slice: &SliceKey,
    records: &[&RawRecord],
    text_index: usize,
    options: &AnalysisOptions,
    stopwords: &Stopwords,
) -> Result<SliceAnalysis, AnalysisError> {
    let empty = |reason| AnalysisError::EmptyResult {
        slice: slice.label().to_string(),
        reason,
    };

    if records.is_empty() {
        return Err(empty(EmptyReason::NoRecords));
    }

    let text = records
        .iter()
        .map(|r| r.get(text_index).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ");

    let tokens = normalize(Some(&text), stopwords);
    if tokens.is_empty() {
        return Err(empty(EmptyReason::NoTokens));
    }

    let table = aggregate(&tokens);
    let top_entries = rank(&table, options.table_limit)?;
    let cloud_entries = rank(&table, options.max_words as usize)?;
    let stats = TokenStats::new(&table, &tokens);

    Ok(SliceAnalysis {
        tokens,
        table,
        top_entries,
        cloud_entries,
        stats,
    })
}
