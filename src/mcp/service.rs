//! MCP Streamable HTTP service creation.
//!
//! Builds the service that gets nested into an Axum router by the binary.

use std::sync::Arc;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use crate::config::GatewayConfig;
use crate::error::GatewayResult;
use crate::exec::SystemRunner;
use crate::fetch::HttpFetcher;

use super::server::McpServer;

/// Create the MCP Streamable HTTP service with the real process runner and
/// HTTP fetcher.
///
/// # Arguments
/// * `config` - process-wide gateway configuration
/// * `cancellation_token` - token for graceful shutdown
pub fn create_mcp_service(
    config: Arc<GatewayConfig>,
    cancellation_token: CancellationToken,
) -> GatewayResult<StreamableHttpService<McpServer<SystemRunner, HttpFetcher>, LocalSessionManager>>
{
    let runner = Arc::new(SystemRunner::new());
    let fetcher = Arc::new(HttpFetcher::new()?);

    // Service factory: creates a new server instance per session
    // Note: Returns io::Error to match rmcp's expected signature
    let service_factory = move || -> Result<McpServer<SystemRunner, HttpFetcher>, std::io::Error> {
        Ok(McpServer::new(
            Arc::clone(&config),
            Arc::clone(&runner),
            Arc::clone(&fetcher),
        ))
    };

    // StreamableHttpServerConfig is #[non_exhaustive]; construct from default
    // and set the fields the gateway configures.
    let mut http_config = StreamableHttpServerConfig::default();
    http_config.sse_keep_alive = None; // Use default (15s)
    http_config.sse_retry = None; // Use default retry behavior
    http_config.stateful_mode = true; // Enable session management
    http_config.cancellation_token = cancellation_token;

    Ok(StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        http_config,
    ))
}
