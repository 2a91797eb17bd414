//! Token counting and ranking.

use indexmap::IndexMap;
use serde::Serialize;

use crate::errors::AnalysisError;

/// Number of entries shown in the top-words share breakdown.
pub const TOP_SHARE_COUNT: usize = 10;

/// Token counts in first-seen order.
///
/// The sum of all counts equals the length of the sequence the table was
/// built from, and every key occurred at least once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: IndexMap<String, usize>,
}

/// One ranked row: a token and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Entries sorted by count descending, ties in first-seen order.
pub type RankedEntries = Vec<WordCount>;

/// A ranked entry with its percentage of the displayed total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordShare {
    pub word: String,
    pub count: usize,
    pub percent: f64,
}

/// Count every occurrence of every token.
pub fn aggregate(tokens: &[String]) -> FrequencyTable {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    FrequencyTable { counts }
}

/// Top `limit` entries of `table`.
///
/// Fails with [`AnalysisError::InvalidArgument`] when `limit` is zero. A limit
/// above the number of distinct tokens returns every entry.
pub fn rank(table: &FrequencyTable, limit: usize) -> Result<RankedEntries, AnalysisError> {
    if limit == 0 {
        return Err(AnalysisError::InvalidArgument(
            "rank limit must be positive".to_string(),
        ));
    }
    let mut entries = table.ranked();
    entries.truncate(limit);
    Ok(entries)
}

impl FrequencyTable {
    pub fn get(&self, token: &str) -> Option<usize> {
        self.counts.get(token).copied()
    }

    /// Number of distinct tokens.
    pub fn distinct_count(&self) -> usize {
        self.counts.len()
    }

    /// Number of token occurrences.
    pub fn total_count(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Every entry, ranked. Used for export where no cap applies.
    pub fn ranked(&self) -> RankedEntries {
        let mut entries: Vec<WordCount> = self
            .iter()
            .map(|(word, count)| WordCount {
                word: word.to_string(),
                count,
            })
            .collect();
        // sort_by is stable, so equal counts keep insertion order
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }
}

/// Summary statistics of one token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenStats {
    pub distinct_count: usize,
    pub total_count: usize,
    /// Mean character length over every occurrence, not over distinct tokens.
    pub mean_length: f64,
}

impl TokenStats {
    pub fn new(table: &FrequencyTable, tokens: &[String]) -> Self {
        let total_chars: usize = tokens.iter().map(|t| t.chars().count()).sum();
        let mean_length = if tokens.is_empty() {
            0.0
        } else {
            total_chars as f64 / tokens.len() as f64
        };
        Self {
            distinct_count: table.distinct_count(),
            total_count: tokens.len(),
            mean_length,
        }
    }
}

/// Percentages of the first `n` entries relative to their own total.
pub fn top_shares(entries: &[WordCount], n: usize) -> Vec<WordShare> {
    let top = &entries[..entries.len().min(n)];
    let total: usize = top.iter().map(|e| e.count).sum();
    top.iter()
        .map(|e| WordShare {
            word: e.word.clone(),
            count: e.count,
            percent: if total == 0 {
                0.0
            } else {
                e.count as f64 * 100.0 / total as f64
            },
        })
        .collect()
}
