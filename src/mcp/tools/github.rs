//! GitHub issue and pull-request creation.
//!
//! One POST per call, no retries and no idempotency key: calling a tool
//! twice with identical arguments creates two resources. The credential is
//! checked before any network activity.

use rmcp::{ErrorData as McpError, model::CallToolResult, schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::info;

use crate::error::{GatewayError, GatewayResult};
use crate::exec::CommandRunner;
use crate::fetch::Fetcher;
use crate::mcp::server::McpServer;

use super::{json_result, to_mcp_error};

pub const GITHUB_API_BASE: &str = "https://api.github.com";

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateIssueParams {
    #[schemars(description = "The owner of the GitHub repository.")]
    pub repo_owner: String,
    #[schemars(description = "The name of the GitHub repository.")]
    pub repo_name: String,
    #[schemars(description = "The title of the new issue.")]
    pub title: String,
    #[schemars(description = "The body content of the new issue.")]
    pub body: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreatePrParams {
    #[schemars(description = "The owner of the GitHub repository.")]
    pub repo_owner: String,
    #[schemars(description = "The name of the GitHub repository.")]
    pub repo_name: String,
    #[schemars(description = "The title of the new pull request.")]
    pub title: String,
    #[schemars(description = "The name of the branch where your changes are implemented.")]
    pub head: String,
    #[schemars(description = "The name of the branch you want the changes pulled into.")]
    pub base: String,
    #[schemars(description = "The body content of the new pull request.")]
    pub body: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IssueCreated {
    pub issue_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PrCreated {
    pub pr_url: String,
}

/// Extract the canonical URL from a GitHub creation response.
fn html_url(body: &Value) -> GatewayResult<String> {
    body.get("html_url")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| GatewayError::Unexpected {
            detail: "GitHub response missing html_url".to_string(),
        })
}

impl<R: CommandRunner + 'static, F: Fetcher + 'static> McpServer<R, F> {
    /// Request headers for the GitHub REST API. Fails with a
    /// missing-credential error before any network call when no token is
    /// configured.
    fn github_headers(&self) -> GatewayResult<Vec<(String, String)>> {
        let token = self
            .config
            .github_token
            .as_deref()
            .ok_or(GatewayError::MissingCredential {
                name: "GITHUB_TOKEN",
            })?;
        Ok(vec![
            ("Authorization".to_string(), format!("token {token}")),
            (
                "Accept".to_string(),
                "application/vnd.github.v3+json".to_string(),
            ),
            (
                "User-Agent".to_string(),
                concat!("devgate/", env!("CARGO_PKG_VERSION")).to_string(),
            ),
        ])
    }

    async fn github_post(&self, path: &str, payload: Value) -> GatewayResult<Value> {
        let headers = self.github_headers()?;
        self.fetcher
            .post_json(&format!("{GITHUB_API_BASE}{path}"), &headers, payload)
            .await
    }

    pub(crate) async fn handle_create_github_issue(
        &self,
        params: CreateIssueParams,
    ) -> Result<CallToolResult, McpError> {
        info!(
            owner = %params.repo_owner,
            repo = %params.repo_name,
            "create_github_issue"
        );

        let payload = json!({
            "title": params.title,
            "body": params.body.unwrap_or_default(),
        });
        let body = self
            .github_post(
                &format!("/repos/{}/{}/issues", params.repo_owner, params.repo_name),
                payload,
            )
            .await
            .map_err(to_mcp_error)?;

        let issue_url = html_url(&body).map_err(to_mcp_error)?;
        json_result(&IssueCreated { issue_url })
    }

    pub(crate) async fn handle_create_github_pr(
        &self,
        params: CreatePrParams,
    ) -> Result<CallToolResult, McpError> {
        info!(
            owner = %params.repo_owner,
            repo = %params.repo_name,
            head = %params.head,
            base = %params.base,
            "create_github_pr"
        );

        let payload = json!({
            "title": params.title,
            "body": params.body.unwrap_or_default(),
            "head": params.head,
            "base": params.base,
        });
        let body = self
            .github_post(
                &format!("/repos/{}/{}/pulls", params.repo_owner, params.repo_name),
                payload,
            )
            .await
            .map_err(to_mcp_error)?;

        let pr_url = html_url(&body).map_err(to_mcp_error)?;
        json_result(&PrCreated { pr_url })
    }
}
