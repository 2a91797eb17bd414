use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary directory holding CSV files and an optional
/// `.csvcloudrc.json`.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        // Stop config discovery here
        fs::create_dir_all(project_root.join(".git"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test directory with one CSV file
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_csv("data.csv", "text\nhalo dunia\n")?;
    /// ```
    pub fn with_csv(name: &str, content: &str) -> Result<Self> {
        let fixture = Self::new()?;
        fixture.write_csv(name, content)?;
        Ok(fixture)
    }

    /// Write a CSV file relative to the root
    pub fn write_csv(&self, name: &str, content: &str) -> Result<()> {
        let path = self.project_root.join(name);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
        Ok(())
    }

    /// Write a .csvcloudrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".csvcloudrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Absolute path of a file in the fixture, as a string (for MCP parameters)
    pub fn csv_path(&self, name: &str) -> String {
        self.project_root.join(name).to_string_lossy().to_string()
    }

    /// Get the root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// Product reviews with a category column
pub const REVIEWS_CSV: &str = "\
produk,ulasan,rating,kategori
Laptop,Laptop ini sangat cepat dan ringan,5,ASN
Mouse,mouse cepat rusak,2,selain ASN
Keyboard,keyboard cepat nyaman,4,ASN
Monitor,,3,
";

pub fn fixture_with_reviews() -> Result<McpTestFixture> {
    McpTestFixture::with_csv("reviews.csv", REVIEWS_CSV)
}

// ============================================================================
// Helpers
// ============================================================================

/// Extract the JSON payload of a successful tool result
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
