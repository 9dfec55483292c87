//! Tests for MCP server initialization and tool registration.

use std::sync::Arc;

use rmcp::ServerHandler;

use crate::config::GatewayConfig;
use crate::exec::SystemRunner;
use crate::fetch::HttpFetcher;

use super::server::McpServer;

fn test_server() -> McpServer<SystemRunner, HttpFetcher> {
    let config = Arc::new(GatewayConfig::new("/tmp/devgate-test", None, "gemini"));
    McpServer::new(
        config,
        Arc::new(SystemRunner::new()),
        Arc::new(HttpFetcher::new().expect("fetcher construction should succeed")),
    )
}

#[tokio::test]
async fn test_server_info() {
    let server = test_server();
    let info = server.get_info();

    assert!(
        info.capabilities.tools.is_some(),
        "Server should support tools"
    );
    assert!(
        info.instructions.is_some(),
        "Server should provide instructions"
    );
}

#[tokio::test]
async fn test_all_tools_registered() {
    let server = test_server();
    let tools = server.router().list_all();
    let names: Vec<String> = tools.iter().map(|tool| tool.name.to_string()).collect();

    for expected in [
        "call_gemini",
        "create_github_issue",
        "create_github_pr",
        "summarize_docs",
        "generate_docstrings",
        "lint_code",
        "generate_unit_tests",
        "analyze_dependencies",
    ] {
        assert!(
            names.contains(&expected.to_string()),
            "missing tool {expected}"
        );
    }
    assert_eq!(names.len(), 8);
}
