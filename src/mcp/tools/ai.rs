//! Generative AI CLI invocation.
//!
//! The configured AI command is invoked with the composed prompt as a single
//! argument; stdout is the model's answer. The composition/invocation helper
//! is shared with the documentation and test-generation tools.

use rmcp::{ErrorData as McpError, model::CallToolResult, schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::GatewayResult;
use crate::exec::{self, CommandRunner};
use crate::fetch::Fetcher;
use crate::mcp::server::McpServer;

use super::{json_result, to_mcp_error};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CallGeminiParams {
    #[schemars(
        description = "The prompt to send to the Gemini CLI. The CLI handles @-mentions of files and directories to include their contents in the prompt."
    )]
    pub prompt: String,
    #[schemars(description = "An optional system instruction to provide context to the model.")]
    pub system_instruction: Option<String>,
}

/// The response from the AI CLI. Every model-backed tool returns this shape.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelResponse {
    pub response: String,
}

impl<R: CommandRunner + 'static, F: Fetcher + 'static> McpServer<R, F> {
    /// Compose the final prompt and run the configured AI command with it as
    /// a single argument. Unlike linting, a non-zero exit here is a failure.
    pub(crate) fn invoke_model(
        &self,
        prompt: &str,
        system_instruction: &str,
    ) -> GatewayResult<ModelResponse> {
        let full_prompt = format!("{system_instruction}\n\n{prompt}");
        let output = self.runner.run(&self.config.ai_command, &[full_prompt])?;
        let output = exec::check_success(&self.config.ai_command, output)?;
        Ok(ModelResponse {
            response: exec::stdout_text(&output),
        })
    }

    pub(crate) async fn handle_call_gemini(
        &self,
        params: CallGeminiParams,
    ) -> Result<CallToolResult, McpError> {
        if params.prompt.trim().is_empty() {
            return Err(McpError::invalid_params("prompt must not be empty", None));
        }
        info!(prompt_len = params.prompt.len(), "call_gemini");

        let response = self
            .invoke_model(
                &params.prompt,
                params.system_instruction.as_deref().unwrap_or(""),
            )
            .map_err(to_mcp_error)?;
        json_result(&response)
    }
}
