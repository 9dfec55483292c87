//! Model Context Protocol (MCP) server implementation.
//!
//! The server uses the Streamable HTTP transport and exposes the gateway's
//! tools: AI CLI invocation, GitHub issue/PR creation, documentation
//! summarization, linting, dependency analysis, and test/docstring
//! generation.
//!
//! - **server**: the coordinator holding the configuration and the external
//!   seams (process runner, HTTP fetcher), with one registered tool per
//!   capability
//! - **service**: Streamable HTTP service construction for Axum nesting
//! - **tools**: handler bodies and parameter/response types, split by
//!   capability area

pub mod server;
mod service;
pub mod tools;

#[cfg(test)]
mod server_test;

pub use server::McpServer;
pub use service::create_mcp_service;
