//! Report formatting and printing utilities.
//!
//! Renders command results as terminal text or JSON. Kept apart from the
//! analysis code so csvcloud can be used as a library.

use std::io::{self, Write};
use std::path::PathBuf;

use colored::Colorize;
use enum_dispatch::enum_dispatch;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::{
    args::OutputFormat,
    commands::{AnalyzeSummary, ColumnsSummary, CommandResult, CommandSummary, InitSummary},
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{
    AnalysisBundle, CategoryCount, MISSING_CATEGORY_LABEL, SliceAnalysis, TOP_SHARE_COUNT,
    WordCount, top_shares,
};
use crate::errors::EmptyReason;
use crate::summary::BundleSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout, warnings to stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Analyze(summary) => {
            let renderer = Renderer::from(summary.format);
            let _ = renderer.render(summary, &mut io::stdout().lock());
            if summary.format == OutputFormat::Text {
                print_empty_warnings_to(&summary.bundles, verbose, &mut io::stderr().lock());
            }
        }
        CommandSummary::Columns(summary) => print_columns_to(summary, &mut io::stdout().lock()),
        CommandSummary::Init(summary) => print_init_to(summary, &mut io::stdout().lock()),
    }
}

// ============================================================
// Analyze Renderers
// ============================================================

/// Output backend for `analyze`.
#[enum_dispatch]
pub trait Render {
    /// Write `summary` to `writer`.
    fn render(&self, summary: &AnalyzeSummary, writer: &mut dyn Write) -> io::Result<()>;
}

#[enum_dispatch(Render)]
#[derive(Debug, Clone, Copy)]
pub enum Renderer {
    Text(TextRenderer),
    Json(JsonRenderer),
}

impl From<OutputFormat> for Renderer {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Renderer::Text(TextRenderer),
            OutputFormat::Json => Renderer::Json(JsonRenderer),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TextRenderer;

impl Render for TextRenderer {
    fn render(&self, summary: &AnalyzeSummary, writer: &mut dyn Write) -> io::Result<()> {
        writeln!(
            writer,
            "Analyzing '{}' in {} ({} {})",
            summary.options.text_column.bold(),
            summary.file.display(),
            summary.row_count,
            plural(summary.row_count, "row", "rows")
        )?;

        if let (Some(column), Some(breakdown)) =
            (&summary.options.category_column, &summary.breakdown)
        {
            writeln!(writer)?;
            writeln!(writer, "Categories in '{}':", column.bold())?;
            write_breakdown(breakdown, writer)?;
        }

        for bundle in &summary.bundles {
            writeln!(writer)?;
            write_bundle(bundle, writer)?;
        }

        writeln!(writer)?;
        write_footer(summary, writer)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct JsonRenderer;

/// Top-level JSON document for `analyze --format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeReport<'a> {
    file: &'a PathBuf,
    row_count: usize,
    text_column: &'a str,
    category_column: Option<&'a str>,
    max_words: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<&'a [CategoryCount]>,
    bundles: Vec<BundleSummary>,
    exported: &'a [PathBuf],
}

impl Render for JsonRenderer {
    fn render(&self, summary: &AnalyzeSummary, writer: &mut dyn Write) -> io::Result<()> {
        let report = AnalyzeReport {
            file: &summary.file,
            row_count: summary.row_count,
            text_column: &summary.options.text_column,
            category_column: summary.options.category_column.as_deref(),
            max_words: summary.options.max_words,
            categories: summary.breakdown.as_deref(),
            bundles: summary
                .bundles
                .iter()
                .map(|b| BundleSummary::new(b, summary.options.table_limit))
                .collect(),
            exported: &summary.exported,
        };
        serde_json::to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn write_breakdown(breakdown: &[CategoryCount], writer: &mut dyn Write) -> io::Result<()> {
    let labels: Vec<&str> = breakdown
        .iter()
        .map(|c| c.value.as_deref().unwrap_or(MISSING_CATEGORY_LABEL))
        .collect();
    let width = labels.iter().map(|l| l.width()).max().unwrap_or(0);

    for (label, category) in labels.iter().zip(breakdown) {
        writeln!(
            writer,
            "  {}{}  {} {} ({:.1}%)",
            label,
            padding(label, width),
            category.count,
            plural(category.count, "record", "records"),
            category.percent
        )?;
    }
    Ok(())
}

fn write_bundle(bundle: &AnalysisBundle, writer: &mut dyn Write) -> io::Result<()> {
    writeln!(
        writer,
        "{} {} ({} {})",
        "==>".cyan(),
        bundle.slice.label().bold(),
        bundle.record_count,
        plural(bundle.record_count, "record", "records")
    )?;

    let Some(analysis) = bundle.analysis() else {
        return writeln!(
            writer,
            "  {}",
            empty_message(bundle.empty_reason()).dimmed()
        );
    };

    writeln!(
        writer,
        "  Unique words: {} | Total words: {} | Average word length: {:.1}",
        analysis.stats.distinct_count, analysis.stats.total_count, analysis.stats.mean_length
    )?;

    write_word_table(&analysis.top_entries, writer)?;
    writeln!(
        writer,
        "  Word cloud: {} {}",
        analysis.cloud_entries.len(),
        plural(analysis.cloud_entries.len(), "word", "words")
    )?;
    write_top_shares(analysis, writer)
}

fn write_word_table(entries: &[WordCount], writer: &mut dyn Write) -> io::Result<()> {
    let rank_width = entries.len().to_string().len();
    let word_width = entries.iter().map(|e| e.word.width()).max().unwrap_or(0);

    for (i, entry) in entries.iter().enumerate() {
        writeln!(
            writer,
            "  {:>rank_width$}. {}{}  {}",
            i + 1,
            entry.word,
            padding(&entry.word, word_width),
            entry.count,
        )?;
    }
    Ok(())
}

fn write_top_shares(analysis: &SliceAnalysis, writer: &mut dyn Write) -> io::Result<()> {
    let shares = top_shares(&analysis.top_entries, TOP_SHARE_COUNT);
    if shares.is_empty() {
        return Ok(());
    }
    let parts: Vec<String> = shares
        .iter()
        .map(|s| format!("{} {:.1}%", s.word, s.percent))
        .collect();
    writeln!(
        writer,
        "  Top {} share: {}",
        shares.len(),
        parts.join(", ")
    )
}

fn write_footer(summary: &AnalyzeSummary, writer: &mut dyn Write) -> io::Result<()> {
    let total = summary.bundles.len();
    let empty = summary
        .bundles
        .iter()
        .filter(|b| b.analysis().is_none())
        .count();

    if empty == 0 {
        writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Analyzed {} {}", total, plural(total, "slice", "slices")).green()
        )?;
    } else {
        writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} of {} slices produced no words", empty, total).red()
        )?;
    }

    if let Some(first) = summary.exported.first() {
        let dir = first
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        writeln!(
            writer,
            "{} Exported {} {} to {}",
            SUCCESS_MARK.green(),
            summary.exported.len(),
            plural(summary.exported.len(), "file", "files"),
            dir
        )?;
    }
    Ok(())
}

/// Print one warning per empty slice.
pub fn print_empty_warnings_to<W: Write>(bundles: &[AnalysisBundle], verbose: bool, writer: &mut W) {
    let empty: Vec<&AnalysisBundle> = bundles.iter().filter(|b| b.analysis().is_none()).collect();
    if empty.is_empty() {
        return;
    }

    if !verbose && empty.len() > 1 {
        let _ = writeln!(
            writer,
            "{} {} slices produced no words (use {} for details)",
            "warning:".bold().yellow(),
            empty.len(),
            "-v".cyan()
        );
        return;
    }

    for bundle in empty {
        let _ = writeln!(
            writer,
            "{} '{}': {}",
            "warning:".bold().yellow(),
            bundle.slice.label(),
            empty_message(bundle.empty_reason())
        );
    }
}

/// Print the column listing to a custom writer.
pub fn print_columns_to<W: Write>(summary: &ColumnsSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}: {} {}, {} {}",
        summary.file.display(),
        summary.row_count,
        plural(summary.row_count, "row", "rows"),
        summary.columns.len(),
        plural(summary.columns.len(), "column", "columns")
    );

    let width = summary
        .columns
        .iter()
        .map(|c| c.name.width())
        .max()
        .unwrap_or(0);

    for column in &summary.columns {
        let kind = if column.is_text {
            "text".green()
        } else {
            "other".dimmed()
        };
        let missing = if column.missing_count > 0 {
            format!("  ({} missing)", column.missing_count)
        } else {
            String::new()
        };
        let _ = writeln!(
            writer,
            "  {}{}  {}{}",
            column.name,
            padding(&column.name, width),
            kind,
            missing
        );
    }

    if !summary.columns.iter().any(|c| c.is_text) {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            "No text columns found".red()
        );
    }
}

/// Print the `init` result to a custom writer.
pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn empty_message(reason: Option<EmptyReason>) -> &'static str {
    match reason {
        Some(EmptyReason::NoRecords) => "no matching records",
        _ => "no words left after cleaning",
    }
}

fn padding(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.width()))
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
