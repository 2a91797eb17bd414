//! Core analysis engine.
//!
//! ## Pipeline
//!
//! ```text
//! records ──► slices ──► joined text ──► normalize ──► tokens ──► aggregate ──► ranked table
//! ```
//!
//! - `stopwords`: the fixed Indonesian stopword set
//! - `normalize`: raw text to a filtered token sequence
//! - `frequency`: counting, ranking and summary statistics
//! - `analysis`: per-category orchestration producing one bundle per slice

pub mod analysis;
pub mod frequency;
pub mod normalize;
pub mod stopwords;

pub use analysis::{
    ALL_DATA_LABEL, AnalysisBundle, AnalysisOptions, CategoryCount, DEFAULT_MAX_WORDS,
    MAX_WORDS_RANGE, MISSING_CATEGORY_LABEL, SliceAnalysis, SliceKey, TABLE_LIMIT, analyze,
    category_breakdown, validate_max_words,
};
pub use frequency::{
    FrequencyTable, RankedEntries, TOP_SHARE_COUNT, TokenStats, WordCount, WordShare, aggregate,
    rank, top_shares,
};
pub use normalize::{TokenSequence, clean_text, detokenize, normalize};
pub use stopwords::{INDONESIAN_STOPWORDS, Stopwords};
