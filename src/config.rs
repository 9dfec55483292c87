//! Process-wide gateway configuration.
//!
//! Built once in the binary and handed to the server; handlers never read
//! the environment themselves.

use std::env;
use std::path::{Path, PathBuf};

use crate::paths;

/// Environment variable holding the GitHub API token.
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Root directory that every file-path tool argument must stay inside.
    pub project_root: PathBuf,
    /// GitHub API token. Absent is legal at startup; the GitHub tools fail
    /// per call with a missing-credential error.
    pub github_token: Option<String>,
    /// Command invoked by the AI-backed tools, resolved via PATH.
    pub ai_command: String,
}

impl GatewayConfig {
    pub fn new(
        project_root: impl Into<PathBuf>,
        github_token: Option<String>,
        ai_command: impl Into<String>,
    ) -> Self {
        Self {
            project_root: paths::absolutize(&project_root.into()),
            github_token: github_token.filter(|token| !token.is_empty()),
            ai_command: ai_command.into(),
        }
    }

    /// Read the credential from the process environment. Called exactly once
    /// at startup; the value travels with the config from then on.
    pub fn from_env(project_root: impl Into<PathBuf>, ai_command: impl Into<String>) -> Self {
        Self::new(project_root, env::var(GITHUB_TOKEN_VAR).ok(), ai_command)
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_project_root() {
        let config = GatewayConfig::new("/work/./project/sub/..", None, "gemini");
        assert_eq!(config.project_root(), Path::new("/work/project"));
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let config = GatewayConfig::new("/work", Some(String::new()), "gemini");
        assert!(config.github_token.is_none());

        let config = GatewayConfig::new("/work", Some("tok_abc".to_string()), "gemini");
        assert_eq!(config.github_token.as_deref(), Some("tok_abc"));
    }
}
