use std::path::{Path, PathBuf};

use anyhow::{Context, Ok, Result};
use colored::Colorize;

use super::super::args::AnalyzeCommand;
use super::{AnalyzeSummary, CommandResult, CommandSummary};
use crate::{
    config::{CONFIG_FILE_NAME, OptionOverrides, load_config},
    core::category_breakdown,
    dataset::Dataset,
    errors::AnalysisError,
    export::write_frequency_csv,
};

pub fn analyze(cmd: AnalyzeCommand) -> Result<CommandResult> {
    let verbose = cmd.common.verbose;

    // ============================================================
    // 1. Load config (CLI args > config file > defaults)
    // ============================================================
    let config_result = load_config(Path::new("."))?;
    if verbose && !config_result.from_file {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }
    let config = config_result.config;

    // ============================================================
    // 2. Load the dataset
    // ============================================================
    let file = cmd.common.file.clone();
    let dataset = Dataset::from_path(&file)?;
    if verbose {
        eprintln!(
            "Note: Loaded {} row(s) and {} column(s) from {}",
            dataset.len(),
            dataset.columns().len(),
            file.display()
        );
    }

    // ============================================================
    // 3. Resolve columns and options
    // ============================================================
    let defaulted_text_column = cmd.text_column.is_none() && config.text_column.is_none();
    let options = config.resolve_options(
        &dataset,
        OptionOverrides {
            text_column: cmd.text_column,
            category_column: cmd.category_column,
            max_words: cmd.max_words,
        },
    )?;
    if verbose && defaulted_text_column {
        eprintln!(
            "Note: No text column given, using '{}'",
            options.text_column
        );
    }

    // ============================================================
    // 4. Run the pipeline
    // ============================================================
    let stopwords = config.stopwords();
    if verbose {
        eprintln!("Note: Filtering {} stopword(s)", stopwords.len());
    }
    let breakdown = options
        .category_column
        .as_deref()
        .map(|c| category_breakdown(&dataset, c))
        .transpose()?;
    let bundles = crate::core::analyze(&dataset, &options, &stopwords)?;

    if verbose {
        for bundle in &bundles {
            let tokens = bundle.analysis().map_or(0, |a| a.token_count());
            eprintln!(
                "Note: Slice '{}': {} record(s), {} token(s)",
                bundle.slice.label(),
                bundle.record_count,
                tokens
            );
        }
    }

    // ============================================================
    // 5. Export
    // ============================================================
    let export_dir = cmd
        .export_dir
        .or_else(|| config.export_dir.as_ref().map(PathBuf::from));
    let mut exported = Vec::new();
    if let Some(dir) = export_dir {
        for bundle in &bundles {
            let Some(analysis) = bundle.analysis() else {
                continue;
            };
            let path =
                write_frequency_csv(&dir, &options.text_column, &bundle.slice, &analysis.table)
                    .with_context(|| {
                        format!("Failed to export slice '{}'", bundle.slice.label())
                    })?;
            if verbose {
                eprintln!("{} {}", "Wrote".dimmed(), path.display());
            }
            exported.push(path);
        }
    }

    let error_count = bundles
        .iter()
        .filter(|b| b.outcome.as_ref().is_err_and(AnalysisError::is_recoverable))
        .count();

    Ok(CommandResult::new(
        CommandSummary::Analyze(AnalyzeSummary {
            file,
            row_count: dataset.len(),
            options,
            format: cmd.format,
            breakdown,
            bundles,
            exported,
        }),
        error_count,
    ))
}
