//! Tests for the dependency analysis tool.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::ErrorCode;
use serde_json::json;
use tempfile::TempDir;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::exec::MockCommandRunner;
use crate::fetch::MockFetcher;
use crate::mcp::server::McpServer;
use crate::mcp::tools::deps::AnalyzeDependenciesParams;

fn server_with_fetcher(
    root: &Path,
    fetcher: MockFetcher,
) -> McpServer<MockCommandRunner, MockFetcher> {
    let config = Arc::new(GatewayConfig::new(root, None, "gemini"));
    McpServer::new(config, Arc::new(MockCommandRunner::new()), Arc::new(fetcher))
}

fn report_json(result: &rmcp::model::CallToolResult) -> serde_json::Value {
    let text = result.content[0].as_text().unwrap().text.clone();
    serde_json::from_str(&text).unwrap()
}

#[tokio::test]
async fn test_requirements_batch_survives_one_failure() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = temp_dir.path().join("requirements.txt");
    std::fs::write(&manifest, "requests==2.31.0\n# comment\nflask>=2.0\n").unwrap();

    let mut fetcher = MockFetcher::new();
    fetcher.expect_get_json().times(2).returning(|url| {
        if url.contains("/requests/") {
            Ok(json!({
                "info": {
                    "summary": "Python HTTP for Humans.",
                    "version": "2.31.0",
                    "license": "Apache 2.0"
                }
            }))
        } else {
            Err(GatewayError::ExternalCallFailed {
                detail: "status 503: unavailable".to_string(),
            })
        }
    });
    let server = server_with_fetcher(temp_dir.path(), fetcher);

    let params = AnalyzeDependenciesParams {
        file_path: manifest.display().to_string(),
    };
    let result = server
        .analyze_dependencies(Parameters(params))
        .await
        .expect("batch should survive a per-package failure");

    let report = &report_json(&result)["dependency_report"];
    let keys: Vec<&String> = report.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["flask", "requests"]);

    assert_eq!(report["requests"]["summary"], "Python HTTP for Humans.");
    assert_eq!(report["requests"]["latest_version"], "2.31.0");
    assert_eq!(report["requests"]["license"], "Apache 2.0");
    assert!(report["requests"].get("error").is_none());

    let flask_error = report["flask"]["error"].as_str().unwrap();
    assert!(flask_error.contains("Could not fetch details"));
    assert!(report["flask"].get("summary").is_none());
}

#[tokio::test]
async fn test_package_json_looks_up_each_distinct_name_once() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = temp_dir.path().join("package.json");
    std::fs::write(
        &manifest,
        r#"{"dependencies": {"a": "1"}, "devDependencies": {"a": "2", "b": "1"}}"#,
    )
    .unwrap();

    let requested = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requested);

    let mut fetcher = MockFetcher::new();
    fetcher.expect_get_json().times(2).returning(move |url| {
        seen.lock().unwrap().push(url.to_string());
        Ok(json!({
            "description": "a package",
            "dist-tags": {"latest": "1.0.0"},
            "license": "MIT"
        }))
    });
    let server = server_with_fetcher(temp_dir.path(), fetcher);

    let params = AnalyzeDependenciesParams {
        file_path: manifest.display().to_string(),
    };
    let result = server
        .analyze_dependencies(Parameters(params))
        .await
        .expect("analysis should succeed");

    let mut urls = requested.lock().unwrap().clone();
    urls.sort();
    assert_eq!(
        urls,
        vec![
            "https://registry.npmjs.org/a".to_string(),
            "https://registry.npmjs.org/b".to_string(),
        ]
    );

    let report = &report_json(&result)["dependency_report"];
    assert_eq!(report.as_object().unwrap().len(), 2);
    assert_eq!(report["a"]["latest_version"], "1.0.0");
    assert_eq!(report["b"]["license"], "MIT");
}

#[tokio::test]
async fn test_malformed_package_json_makes_no_requests() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = temp_dir.path().join("package.json");
    std::fs::write(&manifest, "{not json").unwrap();

    let mut fetcher = MockFetcher::new();
    fetcher.expect_get_json().times(0);
    let server = server_with_fetcher(temp_dir.path(), fetcher);

    let params = AnalyzeDependenciesParams {
        file_path: manifest.display().to_string(),
    };
    let err = server
        .analyze_dependencies(Parameters(params))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode(-32602));
    assert!(err.message.contains("Invalid file format"));
}

#[tokio::test]
async fn test_unsupported_manifest_name() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = temp_dir.path().join("Gemfile");
    std::fs::write(&manifest, "gem 'rails'\n").unwrap();

    let mut fetcher = MockFetcher::new();
    fetcher.expect_get_json().times(0);
    let server = server_with_fetcher(temp_dir.path(), fetcher);

    let params = AnalyzeDependenciesParams {
        file_path: manifest.display().to_string(),
    };
    let err = server
        .analyze_dependencies(Parameters(params))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode(-32602));
    assert!(err.message.contains("Gemfile"));
}

#[tokio::test]
async fn test_missing_manifest_file() {
    let temp_dir = TempDir::new().unwrap();

    let mut fetcher = MockFetcher::new();
    fetcher.expect_get_json().times(0);
    let server = server_with_fetcher(temp_dir.path(), fetcher);

    let params = AnalyzeDependenciesParams {
        file_path: temp_dir.path().join("requirements.txt").display().to_string(),
    };
    let err = server
        .analyze_dependencies(Parameters(params))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode(-32602));
    assert!(err.message.contains("not found"));
}

#[tokio::test]
async fn test_path_outside_root_is_rejected_before_io() {
    let temp_dir = TempDir::new().unwrap();

    let mut fetcher = MockFetcher::new();
    fetcher.expect_get_json().times(0);
    let server = server_with_fetcher(temp_dir.path(), fetcher);

    let params = AnalyzeDependenciesParams {
        file_path: format!("{}/../requirements.txt", temp_dir.path().display()),
    };
    let err = server
        .analyze_dependencies(Parameters(params))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode(-32602));
    assert!(err.message.contains("not allowed"));
}
