//! devgate — an MCP gateway for developer tooling.
//!
//! Every tool exposed by this server forwards to an external collaborator:
//! a generative AI CLI, the GitHub REST API, the PyPI/npm registries, or a
//! local linter. The crate's job is the gateway itself — validate inputs,
//! invoke the external system exactly once, normalize its failure modes into
//! one error taxonomy, and shape the result into a typed response.

pub mod config;
pub mod deps;
pub mod error;
pub mod exec;
pub mod fetch;
pub mod mcp;
pub mod paths;
pub mod registries;
