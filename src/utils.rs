//! Common utility functions shared across the codebase.

/// Checks if a cell value reads as a number.
///
/// Surrounding whitespace is ignored. Columns whose present values all read
/// as numbers are not offered for text analysis.
///
/// # Examples
///
/// ```
/// use csvcloud::utils::looks_numeric;
///
/// assert!(looks_numeric("42"));
/// assert!(looks_numeric(" -3.5 "));
/// assert!(looks_numeric("1e3"));
/// assert!(!looks_numeric("4K"));
/// assert!(!looks_numeric("ASN"));
/// assert!(!looks_numeric(""));
/// ```
pub fn looks_numeric(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
}

/// Turn a category value into a file-name suffix. Spaces and path separators
/// become underscores so the file always lands in the export directory.
pub fn file_suffix(category: &str) -> String {
    format!("_{}", category.replace([' ', '/', '\\'], "_"))
}

/// Percentage of `part` in `whole`, 0 when `whole` is 0.
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}
