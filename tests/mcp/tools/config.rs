use csvcloud::mcp::{CsvCloudMcpServer, types::GetConfigParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = CsvCloudMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["config"]["maxWords"], 100);
    assert_eq!(json_result["config"]["tableLimit"], 200);
    assert!(json_result["config"]["textColumn"].is_null());
    assert!(json_result["config"]["extraStopwords"].is_array());
    assert_eq!(json_result["fromFile"], false);
}

#[tokio::test]
async fn test_get_config_from_csvcloudrc() {
    let fixture = McpTestFixture::new().unwrap();

    fixture
        .write_config(&json!({
            "textColumn": "ulasan",
            "categoryColumn": "kategori",
            "maxWords": 50
        }))
        .unwrap();

    let server = CsvCloudMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["textColumn"], "ulasan");
    assert_eq!(json_result["config"]["categoryColumn"], "kategori");
    assert_eq!(json_result["config"]["maxWords"], 50);
}

#[tokio::test]
async fn test_get_config_from_parent_directory() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_config(&json!({ "maxWords": 30 })).unwrap();
    let nested = fixture.root_path().join("data").join("2024");
    std::fs::create_dir_all(&nested).unwrap();

    let server = CsvCloudMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: nested.to_string_lossy().to_string(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["maxWords"], 30);
}

#[tokio::test]
async fn test_get_config_invalid_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_config(&json!({ "maxWords": 1000 })).unwrap();
    let server = CsvCloudMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}
