//! Documentation summarization and docstring generation.

use rmcp::{ErrorData as McpError, model::CallToolResult, schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::GatewayError;
use crate::exec::CommandRunner;
use crate::fetch::Fetcher;
use crate::mcp::server::McpServer;

use super::{json_result, read_guarded, to_mcp_error};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SummarizeDocsParams {
    #[schemars(description = "A list of paths to documentation files to summarize.")]
    pub files: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GenerateDocstringsParams {
    #[schemars(description = "The path to the file to generate docstrings for.")]
    pub file_path: String,
}

impl<R: CommandRunner + 'static, F: Fetcher + 'static> McpServer<R, F> {
    pub(crate) async fn handle_summarize_docs(
        &self,
        params: SummarizeDocsParams,
    ) -> Result<CallToolResult, McpError> {
        info!(file_count = params.files.len(), "summarize_docs");

        let mut all_content = String::new();
        for raw in &params.files {
            let content = read_guarded(&self.guard, raw).map_err(to_mcp_error)?;
            all_content.push_str(&content);
            all_content.push_str("\n\n");
        }
        if all_content.trim().is_empty() {
            return Err(to_mcp_error(GatewayError::InvalidFileFormat {
                message: "no content found in the provided files".to_string(),
            }));
        }

        let prompt = format!("Please summarize the following documentation:\n\n{all_content}");
        let response = self.invoke_model(&prompt, "").map_err(to_mcp_error)?;
        json_result(&response)
    }

    pub(crate) async fn handle_generate_docstrings(
        &self,
        params: GenerateDocstringsParams,
    ) -> Result<CallToolResult, McpError> {
        info!(file = %params.file_path, "generate_docstrings");

        let content = read_guarded(&self.guard, &params.file_path).map_err(to_mcp_error)?;
        let prompt = format!(
            "Add docstrings to all functions and classes in the following code that are missing \
             them. Return the full, updated code inside a single code block:\n\n```\n{content}\n```"
        );
        let response = self.invoke_model(&prompt, "").map_err(to_mcp_error)?;
        json_result(&response)
    }
}
