//! Linting and unit-test generation.

use std::str::FromStr;

use rmcp::{ErrorData as McpError, model::CallToolResult, schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::GatewayError;
use crate::exec::{self, CommandRunner};
use crate::fetch::Fetcher;
use crate::mcp::server::McpServer;

use super::{json_result, read_guarded, to_mcp_error};

/// Languages the lint tool accepts, with their external linter commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintLanguage {
    Python,
    Javascript,
}

impl LintLanguage {
    pub fn linter(self) -> &'static str {
        match self {
            LintLanguage::Python => "pylint",
            LintLanguage::Javascript => "eslint",
        }
    }
}

impl FromStr for LintLanguage {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "python" => Ok(LintLanguage::Python),
            "javascript" => Ok(LintLanguage::Javascript),
            other => Err(GatewayError::UnsupportedLanguage {
                language: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct LintCodeParams {
    #[schemars(description = "The path to the file to lint.")]
    pub file_path: String,
    #[schemars(description = "The language of the file, either 'python' or 'javascript'.")]
    pub language: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GenerateUnitTestsParams {
    #[schemars(description = "The path to the file containing the item to test.")]
    pub file_path: String,
    #[schemars(description = "The name of the function or class to generate unit tests for.")]
    pub item_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LintingReport {
    pub linting_report: String,
}

impl<R: CommandRunner + 'static, F: Fetcher + 'static> McpServer<R, F> {
    pub(crate) async fn handle_lint_code(
        &self,
        params: LintCodeParams,
    ) -> Result<CallToolResult, McpError> {
        info!(file = %params.file_path, language = %params.language, "lint_code");

        let path = self.guard.check(&params.file_path).map_err(to_mcp_error)?;
        let language: LintLanguage = params.language.parse().map_err(to_mcp_error)?;

        // Linters exit non-zero when they find issues; the report is the
        // result either way.
        let output = self
            .runner
            .run(language.linter(), &[path.display().to_string()])
            .map_err(to_mcp_error)?;
        json_result(&LintingReport {
            linting_report: exec::stdout_text(&output),
        })
    }

    pub(crate) async fn handle_generate_unit_tests(
        &self,
        params: GenerateUnitTestsParams,
    ) -> Result<CallToolResult, McpError> {
        info!(file = %params.file_path, item = %params.item_name, "generate_unit_tests");

        let content = read_guarded(&self.guard, &params.file_path).map_err(to_mcp_error)?;
        let prompt = format!(
            "Generate unit tests for the function or class '{}' in the following code:\n\n```\n{}\n```",
            params.item_name, content
        );
        let response = self.invoke_model(&prompt, "").map_err(to_mcp_error)?;
        json_result(&response)
    }
}
