use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::{
    core::{AnalysisOptions, DEFAULT_MAX_WORDS, Stopwords, TABLE_LIMIT, validate_max_words},
    dataset::Dataset,
    errors::AnalysisError,
};

pub const CONFIG_FILE_NAME: &str = ".csvcloudrc.json";

/// Category column value that disables partitioning.
pub const NO_CATEGORY: &str = "none";

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Column to analyse. Defaults to the first text column of the file.
    #[serde(default)]
    pub text_column: Option<String>,
    #[serde(default)]
    pub category_column: Option<String>,
    #[serde(default = "default_max_words")]
    pub max_words: u32,
    #[serde(default = "default_table_limit")]
    pub table_limit: usize,
    /// Added to the built-in Indonesian stopwords.
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
    #[serde(default)]
    pub export_dir: Option<String>,
}

fn default_max_words() -> u32 {
    DEFAULT_MAX_WORDS
}

fn default_table_limit() -> usize {
    TABLE_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text_column: None,
            category_column: None,
            max_words: default_max_words(),
            table_limit: default_table_limit(),
            extra_stopwords: Vec::new(),
            export_dir: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if `maxWords` is out of range, `tableLimit` is zero, or
    /// an extra stopword could never match a normalized token.
    pub fn validate(&self) -> Result<()> {
        validate_max_words(self.max_words).context("Invalid 'maxWords'")?;

        if self.table_limit == 0 {
            bail!("Invalid 'tableLimit': must be positive");
        }

        for word in &self.extra_stopwords {
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
                bail!(
                    "Invalid word in 'extraStopwords': \"{}\" (only lowercase a-z allowed)",
                    word
                );
            }
        }

        Ok(())
    }

    /// The built-in stopwords plus `extraStopwords`.
    pub fn stopwords(&self) -> Stopwords {
        Stopwords::indonesian().with_extra(&self.extra_stopwords)
    }

    /// Build analysis options for `dataset`: overrides first, then this
    /// config, then the first text column of the file.
    pub fn resolve_options(
        &self,
        dataset: &Dataset,
        overrides: OptionOverrides,
    ) -> Result<AnalysisOptions, AnalysisError> {
        let text_columns = dataset.require_text_columns()?;
        let text_column = overrides
            .text_column
            .or_else(|| self.text_column.clone())
            .unwrap_or_else(|| text_columns[0].to_string());

        let index = dataset.column_index(&text_column)?;
        if !dataset.is_text_column(index) {
            return Err(AnalysisError::InvalidArgument(format!(
                "column '{}' has no text values (text columns: {})",
                text_column,
                text_columns.join(", ")
            )));
        }

        let category_column = overrides
            .category_column
            .or_else(|| self.category_column.clone())
            .filter(|c| !c.eq_ignore_ascii_case(NO_CATEGORY));

        let mut options = AnalysisOptions::new(text_column)
            .with_max_words(overrides.max_words.unwrap_or(self.max_words))
            .with_table_limit(self.table_limit);
        if let Some(category) = category_column {
            options = options.with_category(category);
        }
        options.validate()?;
        Ok(options)
    }
}

/// Per-request settings that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
    pub text_column: Option<String>,
    pub category_column: Option<String>,
    pub max_words: Option<u32>,
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
