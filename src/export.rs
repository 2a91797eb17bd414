//! Frequency table export.
//!
//! Writes the full table of a bundle, ranked, as `word,frequency` CSV. File
//! names follow `word_frequency_<text column><slice suffix>.csv`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::core::{FrequencyTable, SliceKey};

pub const CSV_HEADER: [&str; 2] = ["word", "frequency"];

/// Serialize the whole table, highest count first.
pub fn frequency_csv(table: &FrequencyTable) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for entry in table.ranked() {
        writer.write_record([entry.word, entry.count.to_string()])?;
    }
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV buffer: {}", e))
}

pub fn export_file_name(text_column: &str, slice: &SliceKey) -> String {
    format!("word_frequency_{}{}.csv", text_column, slice.file_suffix())
}

/// Write one bundle's table into `dir`, creating the directory if needed.
pub fn write_frequency_csv(
    dir: &Path,
    text_column: &str,
    slice: &SliceKey,
    table: &FrequencyTable,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;

    let path = dir.join(export_file_name(text_column, slice));
    let bytes = frequency_csv(table)?;
    fs::write(&path, bytes).with_context(|| format!("Failed to write: {}", path.display()))?;
    Ok(path)
}
