//! Gateway-wide error taxonomy.
//!
//! Every failure a tool call can hit is classified into exactly one of these
//! kinds. Validation-class errors are raised before any external call is
//! attempted; `Unexpected` is reserved for genuinely unclassified failures
//! and always carries the original detail.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum GatewayError {
    #[error("Access to path '{}' is not allowed", path.display())]
    #[diagnostic(
        code(devgate::path_not_allowed),
        help("File arguments must resolve inside the configured project root.")
    )]
    PathNotAllowed { path: PathBuf },

    #[error("File not found: {}", path.display())]
    #[diagnostic(code(devgate::not_found))]
    NotFound { path: PathBuf },

    #[error("Error reading file {}: {source}", path.display())]
    #[diagnostic(code(devgate::io_failure))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid file format: {message}")]
    #[diagnostic(code(devgate::invalid_file_format))]
    InvalidFileFormat { message: String },

    #[error(
        "Unsupported file type '{file_name}'. Supported files are 'requirements.txt' and 'package.json'"
    )]
    #[diagnostic(code(devgate::unsupported_file_type))]
    UnsupportedFileType { file_name: String },

    #[error("Unsupported language: {language}. Supported languages are 'python' and 'javascript'")]
    #[diagnostic(code(devgate::unsupported_language))]
    UnsupportedLanguage { language: String },

    #[error("{name} is not configured")]
    #[diagnostic(
        code(devgate::missing_credential),
        help("Set the environment variable before starting the server.")
    )]
    MissingCredential { name: &'static str },

    #[error("'{command}' command not found. Make sure it is installed and in your PATH")]
    #[diagnostic(code(devgate::tool_unavailable))]
    ToolUnavailable { command: String },

    #[error("External call failed: {detail}")]
    #[diagnostic(code(devgate::external_call_failed))]
    ExternalCallFailed { detail: String },

    #[error("An unexpected error occurred: {detail}")]
    #[diagnostic(code(devgate::unexpected))]
    Unexpected { detail: String },
}

impl GatewayError {
    /// Whether the failure reflects bad caller input or a missing local
    /// prerequisite, as opposed to a failure while executing the call.
    pub fn is_caller_fault(&self) -> bool {
        matches!(
            self,
            GatewayError::PathNotAllowed { .. }
                | GatewayError::NotFound { .. }
                | GatewayError::InvalidFileFormat { .. }
                | GatewayError::UnsupportedFileType { .. }
                | GatewayError::UnsupportedLanguage { .. }
                | GatewayError::MissingCredential { .. }
                | GatewayError::ToolUnavailable { .. }
        )
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
