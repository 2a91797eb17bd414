//! In-memory tabular data and CSV loading.
//!
//! Every cell is kept as text. A cell is missing when it is empty or one of
//! the usual "not available" markers (`NA`, `null`, `NaN`, ...), matching how
//! spreadsheet exports usually spell an absent value.

use std::{
    fs::File,
    io::Read,
    path::Path,
};

use crate::{
    errors::{AnalysisError, DatasetError},
    utils::looks_numeric,
};

/// Cell values read as missing.
pub const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// One row of the source table, positionally aligned with [`Dataset::columns`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    values: Vec<Option<String>>,
}

impl RawRecord {
    pub fn new(values: Vec<Option<String>>) -> Self {
        Self { values }
    }

    /// Value at `index`, `None` when missing or past the end of a short row.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).and_then(|v| v.as_deref())
    }
}

/// A table of named columns and rows.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<RawRecord>,
}

/// Column description used by the `columns` command and the MCP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub is_text: bool,
    pub missing_count: usize,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<RawRecord>) -> Self {
        Self { columns, records }
    }

    /// Build from string cells, applying the missing-value markers.
    pub fn from_rows<C, R, S>(columns: C, rows: R) -> Self
    where
        C: IntoIterator<Item = S>,
        R: IntoIterator<Item = Vec<S>>,
        S: AsRef<str>,
    {
        let columns = columns.into_iter().map(|c| c.as_ref().to_string()).collect();
        let records = rows
            .into_iter()
            .map(|row| RawRecord::new(row.iter().map(|cell| parse_cell(cell.as_ref())).collect()))
            .collect();
        Self::new(columns, records)
    }

    /// Load a CSV file with a header row.
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path).map_err(|source| DatasetError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file).map_err(|err| match err {
            DatasetError::Parse(source) => DatasetError::Csv {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Load CSV from any reader. Rows may be ragged; short rows get missing values.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            records.push(RawRecord::new(row.iter().map(parse_cell).collect()));
        }

        Ok(Self::new(columns, records))
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Result<usize, AnalysisError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| AnalysisError::UnknownColumn {
                column: name.to_string(),
                available: self.columns.clone(),
            })
    }

    /// Values of one column, in row order.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = Option<&str>> {
        self.records.iter().map(move |r| r.get(index))
    }

    /// A column is text-typed when at least one present value is not a number.
    ///
    /// With no rows at all every column counts as text, so a header-only file
    /// still reaches analysis and reports its empty slice.
    pub fn is_text_column(&self, index: usize) -> bool {
        if self.records.is_empty() {
            return index < self.columns.len();
        }
        self.column_values(index)
            .flatten()
            .any(|value| !looks_numeric(value))
    }

    /// Names of all text-typed columns in header order.
    pub fn text_columns(&self) -> Vec<&str> {
        (0..self.columns.len())
            .filter(|&i| self.is_text_column(i))
            .map(|i| self.columns[i].as_str())
            .collect()
    }

    /// Like [`Dataset::text_columns`], but fails when there are none.
    pub fn require_text_columns(&self) -> Result<Vec<&str>, AnalysisError> {
        let text_columns = self.text_columns();
        if text_columns.is_empty() {
            return Err(AnalysisError::NoTextColumns);
        }
        Ok(text_columns)
    }

    pub fn column_info(&self) -> Vec<ColumnInfo> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, name)| ColumnInfo {
                name: name.clone(),
                is_text: self.is_text_column(i),
                missing_count: self.column_values(i).filter(Option::is_none).count(),
            })
            .collect()
    }
}

fn parse_cell(cell: &str) -> Option<String> {
    if MISSING_MARKERS.contains(&cell) {
        None
    } else {
        Some(cell.to_string())
    }
}
