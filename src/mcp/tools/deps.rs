//! Dependency manifest analysis.
//!
//! Reads a guarded manifest, extracts the distinct package names, and fans
//! out one registry lookup per name. A failed lookup is recorded per package
//! instead of aborting the batch.

use std::collections::BTreeMap;

use futures_util::future::join_all;
use rmcp::{ErrorData as McpError, model::CallToolResult, schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::deps::{parse_package_json, parse_requirements};
use crate::error::GatewayError;
use crate::exec::CommandRunner;
use crate::fetch::Fetcher;
use crate::mcp::server::McpServer;
use crate::registries::{DependencyInfo, Registry};

use super::{json_result, read_file, to_mcp_error};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AnalyzeDependenciesParams {
    #[schemars(
        description = "The path to the dependency file (e.g., requirements.txt, package.json)."
    )]
    pub file_path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DependencyReport {
    pub dependency_report: BTreeMap<String, DependencyInfo>,
}

impl<R: CommandRunner + 'static, F: Fetcher + 'static> McpServer<R, F> {
    /// One lookup per distinct name, concurrently. Every name appears in the
    /// result exactly once.
    async fn lookup_all(
        &self,
        names: Vec<String>,
        registry: Registry,
    ) -> BTreeMap<String, DependencyInfo> {
        let lookups = names.into_iter().map(|name| async move {
            let info = registry.fetch(self.fetcher.as_ref(), &name).await;
            (name, info)
        });
        join_all(lookups).await.into_iter().collect()
    }

    pub(crate) async fn handle_analyze_dependencies(
        &self,
        params: AnalyzeDependenciesParams,
    ) -> Result<CallToolResult, McpError> {
        info!(file = %params.file_path, "analyze_dependencies");

        let path = self.guard.check(&params.file_path).map_err(to_mcp_error)?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
        let content = read_file(path).map_err(to_mcp_error)?;

        let report = match file_name.as_str() {
            "requirements.txt" => {
                self.lookup_all(parse_requirements(&content), Registry::PyPi)
                    .await
            }
            "package.json" => {
                let names = parse_package_json(&content).map_err(to_mcp_error)?;
                self.lookup_all(names, Registry::Npm).await
            }
            other => {
                return Err(to_mcp_error(GatewayError::UnsupportedFileType {
                    file_name: other.to_string(),
                }));
            }
        };

        json_result(&DependencyReport {
            dependency_report: report,
        })
    }
}
