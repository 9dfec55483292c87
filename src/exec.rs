//! External process invocation.
//!
//! Trait-based so tool handlers can be tested with a mock runner. The runner
//! returns the raw `Output`; exit-status policy belongs to the caller, since
//! linters exit non-zero when they find issues while the AI CLI treats any
//! non-zero exit as a failure.

use std::process::{Command, Output};

use crate::error::{GatewayError, GatewayResult};

#[cfg(test)]
use mockall::automock;

/// Runs external commands synchronously. No retries, no self-imposed timeout.
#[cfg_attr(test, automock)]
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &str, args: &[String]) -> GatewayResult<Output>;
}

/// Real implementation using std::process::Command.
#[derive(Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &str, args: &[String]) -> GatewayResult<Output> {
        Command::new(command).args(args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GatewayError::ToolUnavailable {
                    command: command.to_string(),
                }
            } else {
                GatewayError::Unexpected {
                    detail: e.to_string(),
                }
            }
        })
    }
}

/// Require a zero exit status, turning a failure exit into
/// `ExternalCallFailed` carrying the captured stderr.
pub fn check_success(command: &str, output: Output) -> GatewayResult<Output> {
    if output.status.success() {
        Ok(output)
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        Err(GatewayError::ExternalCallFailed {
            detail: format!("Error calling '{command}': {stderr}"),
        })
    }
}

/// Lossy-decode captured stdout.
pub fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
