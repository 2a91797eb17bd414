//! Serializable view of analysis bundles.
//!
//! Shared by the CLI's JSON output and the MCP server so both surfaces report
//! the same shape.

use schemars::JsonSchema;
use serde::Serialize;

use crate::core::{AnalysisBundle, TOP_SHARE_COUNT, top_shares};
use crate::errors::EmptyReason;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum BundleStatus {
    Analyzed,
    NoRecords,
    NoTokens,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryDto {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShareDto {
    pub word: String,
    pub percent: f64,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsDto {
    pub unique_words: usize,
    pub total_words: usize,
    pub mean_word_length: f64,
}

/// One bundle as reported to users.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BundleSummary {
    pub label: String,
    /// True for the whole-dataset bundle.
    pub all_data: bool,
    pub record_count: usize,
    pub status: BundleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsDto>,
    /// Ranked entries, capped at the requested limit.
    pub entries: Vec<EntryDto>,
    /// Entries included in the word-cloud budget.
    pub cloud_word_count: usize,
    /// Share of each of the top 10 words within the top 10.
    pub top_shares: Vec<ShareDto>,
}

impl BundleSummary {
    /// Summarize `bundle`, keeping at most `entry_limit` ranked entries.
    pub fn new(bundle: &AnalysisBundle, entry_limit: usize) -> Self {
        let label = bundle.slice.label().to_string();
        let all_data = matches!(bundle.slice, crate::core::SliceKey::All);

        let Some(analysis) = bundle.analysis() else {
            let status = match bundle.empty_reason() {
                Some(EmptyReason::NoRecords) => BundleStatus::NoRecords,
                _ => BundleStatus::NoTokens,
            };
            return Self {
                label,
                all_data,
                record_count: bundle.record_count,
                status,
                stats: None,
                entries: Vec::new(),
                cloud_word_count: 0,
                top_shares: Vec::new(),
            };
        };

        Self {
            label,
            all_data,
            record_count: bundle.record_count,
            status: BundleStatus::Analyzed,
            stats: Some(StatsDto {
                unique_words: analysis.stats.distinct_count,
                total_words: analysis.stats.total_count,
                mean_word_length: round1(analysis.stats.mean_length),
            }),
            entries: analysis
                .top_entries
                .iter()
                .take(entry_limit)
                .map(|e| EntryDto {
                    word: e.word.clone(),
                    count: e.count,
                })
                .collect(),
            cloud_word_count: analysis.cloud_entries.len(),
            top_shares: top_shares(&analysis.top_entries, TOP_SHARE_COUNT)
                .into_iter()
                .map(|s| ShareDto {
                    word: s.word,
                    percent: round1(s.percent),
                })
                .collect(),
        }
    }
}

/// Round to one decimal place, as the reports display it.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
