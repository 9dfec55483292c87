//! devgate MCP server binary.
//!
//! Assembles the process-wide configuration (project root, credential, AI
//! command), builds the MCP Streamable HTTP service, and serves it under
//! /mcp. Handlers never read the environment themselves; everything they
//! need travels in the config built here.

use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use devgate::config::GatewayConfig;
use devgate::error::GatewayError;
use devgate::mcp::create_mcp_service;
use miette::Diagnostic;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Gateway error: {0}")]
    #[diagnostic(code(devgate::binary::gateway))]
    Gateway(#[from] GatewayError),

    #[error("Server error: {0}")]
    #[diagnostic(code(devgate::binary::io))]
    Io(#[from] std::io::Error),
}

#[derive(Parser)]
#[command(name = "devgate")]
#[command(author, version, about = "MCP gateway for developer tooling", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Project root that file-path tool arguments must stay inside
    /// (defaults to the current directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Command invoked by the AI-backed tools
    #[arg(long, default_value = "gemini")]
    ai_command: String,
}

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "devgate=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();
    init_tracing();

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let config = Arc::new(GatewayConfig::from_env(root, cli.ai_command));
    if config.github_token.is_none() {
        warn!("GITHUB_TOKEN not set; GitHub tools will refuse calls");
    }

    let cancellation_token = CancellationToken::new();
    let mcp_service = create_mcp_service(Arc::clone(&config), cancellation_token.clone())?;

    let app = axum::Router::new()
        .nest_service("/mcp", mcp_service)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        "devgate MCP server listening on http://{}/mcp (project root {})",
        addr,
        config.project_root().display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            cancellation_token.cancel();
        })
        .await?;

    Ok(())
}
