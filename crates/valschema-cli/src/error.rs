//! CLI error types with exit code handling
//!
//! This module provides a unified error type for CLI operations that
//! maps errors to appropriate exit codes.

use miette::Diagnostic;
use thiserror::Error;
use valschema_core::CoreError;

use crate::exit_codes;

/// CLI-specific error type that includes exit code information
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum CliError {
    /// Values input is malformed (bad YAML, wrong top-level type, bad key)
    #[error("Invalid input: {message}")]
    #[diagnostic(code(valschema::cli::input))]
    Input {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Configuration file is unreadable or invalid
    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(valschema::cli::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// IO error (file not found, permissions, etc.)
    #[error("IO error: {message}")]
    #[diagnostic(code(valschema::cli::io))]
    Io {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Wrapped error for passthrough (stores the formatted message)
    #[error("{message}")]
    #[diagnostic(code(valschema::cli::error))]
    Other { message: String },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Input { .. } => exit_codes::INPUT_ERROR,
            CliError::Config { .. } => exit_codes::USAGE_ERROR,
            CliError::Io { .. } => exit_codes::IO_ERROR,
            CliError::Other { .. } => exit_codes::ERROR,
        }
    }

    /// Create an input error with help text
    pub fn input_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
            help: Some(help.into()),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: None,
        }
    }

    /// Create a configuration error with help text
    pub fn config_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: Some(help.into()),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::NotFound { .. } => CliError::Io {
                message,
                help: Some(
                    "Pass the values file as an argument, or point to a chart directory"
                        .to_string(),
                ),
            },
            CoreError::Io(_) => CliError::Io {
                message,
                help: None,
            },
            CoreError::Parse { .. } => {
                CliError::input_with_help(message, "Check the file is valid YAML")
            }
            CoreError::NotAMapping { .. } | CoreError::InvalidRoot { .. } => {
                CliError::input_with_help(
                    message,
                    "A values document must be a mapping of keys to values at the top level",
                )
            }
            CoreError::InvalidKey { .. } => CliError::input_with_help(
                message,
                "Use plain scalar keys (strings, numbers or booleans)",
            ),
            CoreError::NonFiniteNumber { .. } => CliError::input_with_help(
                message,
                "Replace .nan and .inf with a finite number or a string",
            ),
            CoreError::Archive { .. } => CliError::input_with_help(
                message,
                "A packaged chart must contain <chart>/values.yaml",
            ),
            CoreError::Json(_) => CliError::Other { message },
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            help: None,
        }
    }
}

impl From<miette::Report> for CliError {
    fn from(err: miette::Report) -> Self {
        CliError::Other {
            message: format!("{:?}", err),
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
