//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `analyze`: Word-frequency analysis of a text column, optionally per category
//! - `columns`: List the columns of a CSV file and which ones hold text
//! - `init`: Initialize csvcloud configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Analyze(cmd)) => cmd.common.verbose,
            Some(Command::Columns(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by commands that read a CSV file.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// CSV file to read (first row is the header)
    pub file: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

#[derive(Debug, Args)]
pub struct AnalyzeCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Text column to analyse (overrides config file; default: first text column)
    #[arg(long)]
    pub text_column: Option<String>,

    /// Category column for separate analyses, or "none" (overrides config file)
    #[arg(long)]
    pub category_column: Option<String>,

    /// Word-cloud budget, 20 to 200 (overrides config file)
    #[arg(long)]
    pub max_words: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Write one word_frequency_*.csv per analysed slice into this directory
    #[arg(long)]
    pub export_dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ColumnsCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Count words in a text column, overall and per category
    Analyze(AnalyzeCommand),
    /// List columns and mark the ones that can be analysed
    Columns(ColumnsCommand),
    /// Initialize a new .csvcloudrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
