use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    config::{OptionOverrides, load_config},
    core::{TABLE_LIMIT, analyze},
    dataset::Dataset,
    errors::AnalysisError,
    summary::BundleSummary,
};

use super::types::{
    AnalyzeCsvParams, AnalyzeCsvResult, ColumnDto, ColumnsResult, ConfigDto, ConfigValues,
    DEFAULT_ENTRY_LIMIT, GetConfigParams, ListColumnsParams,
};

#[derive(Clone)]
pub struct CsvCloudMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for CsvCloudMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl CsvCloudMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// List the columns of a CSV file
    #[tool(
        description = "List the columns of a CSV file with row count, missing values per column, and which columns hold text that can be analysed."
    )]
    pub async fn list_columns(
        &self,
        params: Parameters<ListColumnsParams>,
    ) -> Result<CallToolResult, McpError> {
        let dataset = load_dataset(&params.0.csv_path)?;

        let columns: Vec<ColumnDto> = dataset
            .column_info()
            .into_iter()
            .map(ColumnDto::from)
            .collect();
        let text_columns = columns
            .iter()
            .filter(|c| c.is_text)
            .map(|c| c.name.clone())
            .collect();

        to_tool_result(&ColumnsResult {
            row_count: dataset.len(),
            columns,
            text_columns,
        })
    }

    /// Word-frequency analysis of a CSV text column
    #[tool(
        description = "Count words in a text column of a CSV file after lowercasing, removing non-letters and Indonesian stopwords. Returns one bundle for all data and, with categoryColumn, one per category value. Empty slices are reported with status noRecords or noTokens."
    )]
    pub async fn analyze_csv(
        &self,
        params: Parameters<AnalyzeCsvParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = entry_limit(params.limit)?;

        let csv_path = Path::new(&params.csv_path);
        let config_dir = csv_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let config = load_config(config_dir)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?
            .config;

        let dataset = load_dataset(&params.csv_path)?;
        let options = config
            .resolve_options(
                &dataset,
                OptionOverrides {
                    text_column: params.text_column,
                    category_column: params.category_column,
                    max_words: params.max_words,
                },
            )
            .map_err(analysis_error)?;

        let bundles = analyze(&dataset, &options, &config.stopwords()).map_err(analysis_error)?;

        to_tool_result(&AnalyzeCsvResult {
            row_count: dataset.len(),
            text_column: options.text_column.clone(),
            category_column: options.category_column.clone(),
            max_words: options.max_words,
            bundles: bundles
                .iter()
                .map(|b| BundleSummary::new(b, limit))
                .collect(),
        })
    }

    /// Get configuration
    #[tool(
        description = "Get the csvcloud configuration (.csvcloudrc.json) that applies to a directory, or the defaults when none is found."
    )]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        to_tool_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }
}

#[tool_handler]
impl ServerHandler for CsvCloudMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "csvcloud MCP analyses word frequencies in the text columns of CSV files.\n\n\
                 Available tools:\n\
                 1. list_columns - Show columns, row count and which columns hold text\n\
                 2. analyze_csv - Ranked word counts overall and per category\n\
                 3. get_config - Get the configuration that applies to a directory\n\n\
                 Recommended Workflow:\n\
                 1. Use list_columns to pick a text column and a category column\n\
                 2. Call analyze_csv with those columns; raise limit to see more words"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

fn load_dataset(csv_path: &str) -> Result<Dataset, McpError> {
    Dataset::from_path(Path::new(csv_path))
        .map_err(|e| McpError::internal_error(format!("Failed to load CSV: {}", e), None))
}

fn entry_limit(limit: Option<u32>) -> Result<usize, McpError> {
    match limit {
        None => Ok(DEFAULT_ENTRY_LIMIT),
        Some(v) if (1..=TABLE_LIMIT).contains(&(v as usize)) => Ok(v as usize),
        Some(v) => Err(McpError::invalid_params(
            format!("limit must be between 1 and {}, got {}", TABLE_LIMIT, v),
            None,
        )),
    }
}

fn analysis_error(err: AnalysisError) -> McpError {
    McpError::invalid_params(err.to_string(), None)
}

fn to_tool_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = CsvCloudMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
