use anyhow::{Ok, Result};

use super::super::args::ColumnsCommand;
use super::{ColumnsSummary, CommandResult, CommandSummary};
use crate::dataset::Dataset;

pub fn columns(cmd: ColumnsCommand) -> Result<CommandResult> {
    let file = cmd.common.file;
    let dataset = Dataset::from_path(&file)?;
    let columns = dataset.column_info();

    // A file without text columns cannot be analysed at all.
    let error_count = usize::from(!columns.iter().any(|c| c.is_text));

    Ok(CommandResult::new(
        CommandSummary::Columns(ColumnsSummary {
            file,
            row_count: dataset.len(),
            columns,
        }),
        error_count,
    ))
}
