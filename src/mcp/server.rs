//! MCP server coordinator.
//!
//! `McpServer` owns the process-wide configuration and the two external
//! seams (command runner, HTTP fetcher) and registers one tool per gateway
//! capability. It is generic over the seams so handlers can be exercised
//! with mocks; no dynamic dispatch.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::config::GatewayConfig;
use crate::exec::CommandRunner;
use crate::fetch::Fetcher;
use crate::paths::PathGuard;

use super::tools::ai::CallGeminiParams;
use super::tools::code::{GenerateUnitTestsParams, LintCodeParams};
use super::tools::deps::AnalyzeDependenciesParams;
use super::tools::docs::{GenerateDocstringsParams, SummarizeDocsParams};
use super::tools::github::{CreateIssueParams, CreatePrParams};

pub struct McpServer<R: CommandRunner, F: Fetcher> {
    pub(crate) config: Arc<GatewayConfig>,
    pub(crate) guard: PathGuard,
    pub(crate) runner: Arc<R>,
    pub(crate) fetcher: Arc<F>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl<R: CommandRunner + 'static, F: Fetcher + 'static> McpServer<R, F> {
    pub fn new(config: Arc<GatewayConfig>, runner: Arc<R>, fetcher: Arc<F>) -> Self {
        let guard = PathGuard::new(&config.project_root);
        Self {
            config,
            guard,
            runner,
            fetcher,
            tool_router: Self::tool_router(),
        }
    }

    /// Get the tool router for this server
    pub fn router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }

    #[tool(
        description = "Calls the Gemini CLI with a given prompt. The CLI itself handles @-mentions of files and directories to include their contents."
    )]
    pub async fn call_gemini(
        &self,
        params: Parameters<CallGeminiParams>,
    ) -> Result<CallToolResult, McpError> {
        self.handle_call_gemini(params.0).await
    }

    #[tool(description = "Creates a new issue in a GitHub repository.")]
    pub async fn create_github_issue(
        &self,
        params: Parameters<CreateIssueParams>,
    ) -> Result<CallToolResult, McpError> {
        self.handle_create_github_issue(params.0).await
    }

    #[tool(description = "Creates a new pull request in a GitHub repository.")]
    pub async fn create_github_pr(
        &self,
        params: Parameters<CreatePrParams>,
    ) -> Result<CallToolResult, McpError> {
        self.handle_create_github_pr(params.0).await
    }

    #[tool(description = "Summarizes the content of a list of documentation files.")]
    pub async fn summarize_docs(
        &self,
        params: Parameters<SummarizeDocsParams>,
    ) -> Result<CallToolResult, McpError> {
        self.handle_summarize_docs(params.0).await
    }

    #[tool(
        description = "Generates docstrings for the functions and classes in a file that are missing them."
    )]
    pub async fn generate_docstrings(
        &self,
        params: Parameters<GenerateDocstringsParams>,
    ) -> Result<CallToolResult, McpError> {
        self.handle_generate_docstrings(params.0).await
    }

    #[tool(
        description = "Lints a Python or JavaScript file and returns a report of issues found by the linter."
    )]
    pub async fn lint_code(
        &self,
        params: Parameters<LintCodeParams>,
    ) -> Result<CallToolResult, McpError> {
        self.handle_lint_code(params.0).await
    }

    #[tool(description = "Generates unit tests for a given function or class in a file.")]
    pub async fn generate_unit_tests(
        &self,
        params: Parameters<GenerateUnitTestsParams>,
    ) -> Result<CallToolResult, McpError> {
        self.handle_generate_unit_tests(params.0).await
    }

    #[tool(
        description = "Analyzes a dependency file (requirements.txt or package.json) and provides a summary of each dependency."
    )]
    pub async fn analyze_dependencies(
        &self,
        params: Parameters<AnalyzeDependenciesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.handle_analyze_dependencies(params.0).await
    }
}

#[tool_handler]
impl<R: CommandRunner + 'static, F: Fetcher + 'static> ServerHandler for McpServer<R, F> {
    fn get_info(&self) -> ServerInfo {
        // ServerInfo is #[non_exhaustive]; construct from default and set
        // the fields the server populates.
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.instructions = Some(
            "devgate MCP server - invoke the Gemini CLI, create GitHub issues and pull \
             requests, summarize documentation, lint files, analyze dependency manifests, \
             and generate unit tests or docstrings"
                .to_string(),
        );
        info
    }
}
